// lib.rs - Library root for TypeSpec editor support

pub mod config;
pub mod error;
pub mod indent;
pub mod outline;
pub mod syntax;
pub mod tree;
