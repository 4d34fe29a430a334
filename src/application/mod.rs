//! Use-case layer: commands mutate articles and categories, queries read
//! them back, DTOs shape the wire representations.
pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
