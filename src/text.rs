pub mod arc;
pub mod font;
pub mod glyph;
pub mod horizontal;
pub mod outline;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod testing;
