// src/backend/mod.rs
pub mod client;
pub mod error;

pub use client::{analyze, check_health};
pub use error::BackendError;
