pub mod chapter;
pub mod project;
