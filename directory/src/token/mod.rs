//! Token Module
//!
//! Data model, field limits, and format validation for directory entries.

pub mod constants;
pub mod types;
pub mod validate;

pub use constants::*;
pub use types::*;
pub use validate::*;
