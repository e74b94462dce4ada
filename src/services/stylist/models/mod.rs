pub mod keywords;
pub mod types;
