//! Movie record type

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::runtime::Runtime;

/// A single movie record
///
/// Only ever constructed as a placeholder literal for now; persistence and
/// lifecycle come later.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    /// Unique movie identifier
    pub id: i64,
    /// When the record was created, never sent to clients
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    /// Movie title
    pub title: String,
    /// Release year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Runtime in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Runtime>,
    /// Genre labels
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    /// Version counter, starts at 1 and increments on every update
    pub version: i32,
}
