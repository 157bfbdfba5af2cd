pub mod convert;
pub mod tables;
