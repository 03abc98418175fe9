pub mod blur;
pub mod composite;
pub mod emboss;
pub mod rotate;
