//! cinelog-api: Shared API types and schemas
//!
//! Contains request/response types and OpenAPI schema definitions used across
//! the daemon and the client.

pub mod requests;
pub mod responses;
