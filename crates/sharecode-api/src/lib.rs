//! # sharecode-api
//!
//! HTTP API layer for the CloudLite share-code service. Exposes minting,
//! public resolution, and TTL display of share codes over Axum, plus the
//! server bootstrap that owns the registry and its background sweeper.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
