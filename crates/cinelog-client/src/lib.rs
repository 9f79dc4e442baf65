//! cinelog-client: HTTP client library
//!
//! Client for the cinelog daemon's JSON API.
//!
//! # Examples
//!
//! ```no_run
//! use cinelog_client::HttpClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("http://localhost:4000")?;
//!
//! // Check daemon health
//! let health = client.healthcheck().await?;
//! println!("Status: {}", health.status);
//!
//! // Fetch a movie
//! let movie = client.get_movie(123).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;

pub use error::{ClientError, Result};
pub use http::HttpClient;
