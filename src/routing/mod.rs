//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path only)
//!     → router.rs (ordered route lookup)
//!     → matcher.rs (exact / prefix conditions)
//!     → Return: Control, Api or NotFound
//! ```
//!
//! # Design Decisions
//! - Routes fixed at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same path always yields the same route

pub mod matcher;
pub mod router;

pub use router::{Route, Router, API_PREFIX, CONTROL_PATH};
