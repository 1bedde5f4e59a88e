//! Instance availability state machine.
//!
//! # States
//! - Active: `/api*` requests succeed
//! - Inactive: `/api*` requests answer 503 to simulate a failed backend
//!
//! # State Transitions
//! ```text
//! Active → Inactive: control call for this identity with active != "true"
//! Inactive → Active: control call for this identity with active == "true"
//! ```
//!
//! # Design Decisions
//! - Flag is an `AtomicBool`, shared via `Arc` across request tasks
//! - Identity fixed at construction, never re-read
//! - State changes logged for observability

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Availability of this instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Active,
    Inactive,
}

impl Availability {
    pub fn from_flag(active: bool) -> Self {
        if active {
            Availability::Active
        } else {
            Availability::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        self == Availability::Active
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Active => "active",
            Availability::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide state of this instance.
#[derive(Debug)]
pub struct InstanceState {
    /// Name control calls must target to affect this instance.
    identity: String,
    /// Current availability (true = active).
    active: AtomicBool,
}

impl InstanceState {
    /// Create a new instance state.
    pub fn new(identity: impl Into<String>, availability: Availability) -> Self {
        Self {
            identity: identity.into(),
            active: AtomicBool::new(availability.is_active()),
        }
    }

    /// The identity this instance answers to.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Current availability.
    pub fn availability(&self) -> Availability {
        Availability::from_flag(self.active.load(Ordering::Acquire))
    }

    pub fn is_active(&self) -> bool {
        self.availability().is_active()
    }

    /// Overwrite the availability, returning the previous value.
    pub fn set(&self, availability: Availability) -> Availability {
        let previous =
            Availability::from_flag(self.active.swap(availability.is_active(), Ordering::AcqRel));

        if previous != availability {
            tracing::info!(
                identity = %self.identity,
                from = %previous,
                to = %availability,
                "Availability changed"
            );
        } else {
            tracing::debug!(
                identity = %self.identity,
                state = %availability,
                "Availability unchanged"
            );
        }

        previous
    }
}
