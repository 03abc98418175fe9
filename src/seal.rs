pub mod compose;
pub mod design;
pub mod fields;
pub mod output;
