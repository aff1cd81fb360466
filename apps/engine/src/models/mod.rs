pub mod field;
pub mod resume;
