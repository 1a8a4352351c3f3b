//! Utility modules for common functionality
//!
//! Provides environment and `.env` file handling.

pub mod env;

pub use env::{parse_env_content, read_env_file};
