//! Share-code mint, info, and public resolution handlers.

use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;
use validator::Validate;

use sharecode_core::error::AppError;

use crate::dto::request::MintShareCodeRequest;
use crate::dto::response::{
    ApiResponse, MintedCodeResponse, ResolvedTokenResponse, ShareCodeInfoResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/share-codes
///
/// Mints a short-lived code for an already-validated access token. Called
/// by the token issuance flow; the registry does not inspect the token.
pub async fn mint_share_code(
    State(state): State<AppState>,
    Json(req): Json<MintShareCodeRequest>,
) -> Result<Json<ApiResponse<MintedCodeResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let minted = state.registry.mint(req.token)?;

    tracing::debug!(code = %minted.code, "Minted share code");

    Ok(Json(ApiResponse::ok(MintedCodeResponse {
        expires_in_seconds: minted.remaining_seconds(Utc::now()),
        code: minted.code,
        created_at: minted.created_at,
        expires_at: minted.expires_at,
    })))
}

/// GET /api/share-codes/{code}
///
/// Reports the remaining validity of a code without revealing its token.
pub async fn share_code_info(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ShareCodeInfoResponse>>, ApiError> {
    let entry = state
        .registry
        .info(&code)
        .ok_or_else(|| AppError::not_found("Share code not found or expired"))?;

    Ok(Json(ApiResponse::ok(ShareCodeInfoResponse {
        remaining_seconds: entry.remaining_seconds(Utc::now()),
        code: entry.code,
        created_at: entry.created_at,
        expires_at: entry.expires_at,
    })))
}

/// GET /s/{code} — public share-code resolution
///
/// Exchanges a human-entered code for the underlying access token, after
/// which the caller proceeds exactly as a direct token-bearing request.
pub async fn resolve_share_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ResolvedTokenResponse>>, ApiError> {
    let token = state
        .registry
        .resolve(&code)
        .ok_or_else(|| AppError::not_found("Share code not found or expired"))?;

    Ok(Json(ApiResponse::ok(ResolvedTokenResponse { token })))
}
