//! Release resolution layer
//!
//! This module fetches the open releases of a dashboard project and picks the
//! latest one published for the official package.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ ReleasesApi │────▶│  selector   │◀────│  compare    │
//! │  (fetch)    │     │ (pick max)  │     │ (ordering)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        └───────┬───────────┘
//!                ▼
//!         ┌─────────────┐
//!         │  resolver   │
//!         │ (page flow) │
//!         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: HTTP client for the releases endpoint
//! - [`compare`]: version ordering with a plain-string fallback
//! - [`selector`]: latest-official-release selection
//! - [`resolver`]: the popup-side flow tying the pieces together
//! - [`types`]: the deserialized release payload
//! - [`error`]: error types for fetching and resolving

pub mod api;
pub mod compare;
pub mod error;
pub mod resolver;
pub mod selector;
pub mod types;
