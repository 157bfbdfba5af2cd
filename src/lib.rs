pub mod artifact;
pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod file_parsers;
pub mod gtm;
pub mod tables;
