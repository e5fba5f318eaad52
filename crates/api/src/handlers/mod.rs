pub mod records;
pub mod validation;
