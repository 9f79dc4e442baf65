//! cinelog-core: Domain types for the movie catalog
//!
//! Contains the `Movie` record, the `Runtime` wire format, and core error types.

pub mod error;
pub mod movie;
pub mod runtime;

pub use error::CoreError;
pub use movie::Movie;
pub use runtime::Runtime;
