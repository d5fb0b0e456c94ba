//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Mint share code request body.
///
/// The token is treated as an opaque credential; it was already validated
/// by the issuance flow that calls this endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MintShareCodeRequest {
    /// The access token the new code will stand in for.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
}
