//! Availability subsystem.
//!
//! # Data Flow
//! ```text
//! Control call (/control/toggle?target=..&active=..):
//!     → toggle.rs (parse query, compare target with identity)
//!     → state.rs (overwrite flag on match)
//!
//! API call (/api*):
//!     → state.rs (read flag)
//!     → 200 when Active, 503 when Inactive
//! ```
//!
//! # Design Decisions
//! - One state object per process, constructed at startup
//! - Malformed control calls degrade to "ignored", never to errors

pub mod state;
pub mod toggle;

pub use state::{Availability, InstanceState};
pub use toggle::{apply, parse_active_flag, ToggleOutcome, ToggleRequest};
