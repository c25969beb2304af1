//! Core library for release-lens.
//!
//! Two independent flows share persisted settings and nothing else:
//!
//! - [`filter`]: hides release panels whose package name does not match the
//!   configured official package, re-applied on board events.
//! - [`release`]: resolves the latest release of the official package from the
//!   remote releases endpoint.
//!
//! The [`settings`] store is the only shared state; the popup-side flow can
//! additionally nudge the filter side through a one-way update channel.

pub mod config;
pub mod filter;
pub mod logging;
pub mod release;
pub mod settings;
