//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response to a mint request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintedCodeResponse {
    /// The newly minted 6-digit code.
    pub code: String,
    /// When the code was minted.
    pub created_at: DateTime<Utc>,
    /// When the code expires.
    pub expires_at: DateTime<Utc>,
    /// Seconds until expiry.
    pub expires_in_seconds: i64,
}

/// Share-code details for TTL display. Never carries the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareCodeInfoResponse {
    /// The code.
    pub code: String,
    /// When the code was minted.
    pub created_at: DateTime<Utc>,
    /// When the code expires.
    pub expires_at: DateTime<Utc>,
    /// Seconds of validity left.
    pub remaining_seconds: i64,
}

/// Response to a public code resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedTokenResponse {
    /// The access token the code stood in for.
    pub token: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Number of share codes currently held in the registry.
    pub active_codes: usize,
}
