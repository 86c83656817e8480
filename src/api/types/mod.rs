//! Shared API types

pub mod error;

pub use error::{messages, ApiError, ApiErrorResponse};
