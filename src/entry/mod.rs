//! Config entries and their typed views.
//!
//! # Responsibilities
//! - Hold one fetched value (or one fetch failure) with its load time
//! - Provide lossy typed views: integers, bool, list, random pick, shuffle
//!
//! # Design Decisions
//! - Entries are immutable and shared as `Arc<ConfigEntry>`
//! - Load state is an enum, so "loaded with error" cannot be represented

pub mod types;
pub mod views;

pub use types::ConfigEntry;
