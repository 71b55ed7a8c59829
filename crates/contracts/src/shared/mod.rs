pub mod date_format;
pub mod field_mapping;
pub mod format;
