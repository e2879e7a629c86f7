pub mod payload;
pub mod records;
