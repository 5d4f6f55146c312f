//! # rowkey
//!
//! Engine-key encoding for bulk ingestion into an ordered key-value
//! store, with:
//! - Order-preserving, self-terminating "group escaped" key encoding
//! - Optional duplicate-key detection via opaque per-row identifiers
//! - An allocation-free per-row hot path through reusable buffers
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Ingestion Pipeline                         │
//! │          (row source, SST writing, transport)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ per row: key + row ID
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     KeyAdapter                               │
//! │              (Noop / DupDetect, per run)                     │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌─────────────┐               ┌─────────────┐
//!     │   Escape    │               │    KeyBuf   │
//!     │ (9B groups) │               │  (reusable) │
//!     └─────────────┘               └─────────────┘
//! ```
//!
//! Per row, the pipeline calls [`KeyAdapter::encoded_len`] to reserve,
//! [`KeyAdapter::encode`] to produce the engine key, and later
//! [`KeyAdapter::decode`] on stored keys to re-group duplicates by their
//! original user key.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod buffer;
pub mod escape;
pub mod rowid;
pub mod adapter;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RowKeyError};
pub use config::Config;
pub use buffer::KeyBuf;
pub use adapter::KeyAdapter;
pub use rowid::{encode_int_row_id, MIN_ROW_ID};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rowkey
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
