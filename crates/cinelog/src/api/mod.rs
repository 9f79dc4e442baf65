//! API route handlers

pub mod error;
pub mod json;
pub mod movies;
pub mod system;

pub use error::ApiError;
pub use json::JsonBody;
