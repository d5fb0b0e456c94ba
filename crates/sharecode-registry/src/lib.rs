//! # sharecode-registry
//!
//! In-memory share-code registry for CloudLite. Maps short-lived 6-digit
//! codes to opaque access tokens, with per-entry expiry, lazy removal on
//! expired reads, and a periodic background sweep.
//!
//! The registry is constructed once at startup and injected into the HTTP
//! layer; the sweeper runs as a cancellable background task owned by the
//! server bootstrap.

pub mod code;
pub mod entry;
pub mod registry;
pub mod sweeper;

pub use entry::ShareCode;
pub use registry::ShareCodeRegistry;
pub use sweeper::RegistrySweeper;
