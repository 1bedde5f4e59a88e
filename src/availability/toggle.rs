//! Control call parsing and application.
//!
//! A control call names a `target` instance and carries an `active` value.
//! Only a call whose target equals this instance's identity and which
//! carries an `active` parameter (possibly empty) changes state. Values are
//! parsed permissively: lowercased "true" is active, anything else inactive.

use std::fmt;

use url::form_urlencoded;

use crate::availability::state::{Availability, InstanceState};

/// Parameters of a control call, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleRequest {
    pub target: Option<String>,
    pub active: Option<String>,
}

impl ToggleRequest {
    /// Parse from a raw query string. When a key repeats, the first value wins.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut request = ToggleRequest::default();

        let Some(query) = query else {
            return request;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "target" if request.target.is_none() => request.target = Some(value.into_owned()),
                "active" if request.active.is_none() => request.active = Some(value.into_owned()),
                _ => {}
            }
        }

        request
    }

    /// Availability requested by the `active` parameter, if present.
    pub fn requested(&self) -> Option<Availability> {
        self.active
            .as_deref()
            .map(|raw| Availability::from_flag(parse_active_flag(raw)))
    }
}

/// Permissive flag parsing: only a case-insensitive "true" is true.
pub fn parse_active_flag(raw: &str) -> bool {
    raw.to_lowercase() == "true"
}

/// Result of applying a control call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// State was overwritten.
    Updated {
        identity: String,
        availability: Availability,
    },
    /// Call was not for this instance, or carried no `active` parameter.
    Ignored {
        target: Option<String>,
        identity: String,
    },
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleOutcome::Updated {
                identity,
                availability,
            } => write!(f, "STATUS UPDATED: server {identity} is now {availability}"),
            ToggleOutcome::Ignored { target, identity } => write!(
                f,
                "IGNORED: control call for {}, I am {identity}",
                target.as_deref().unwrap_or("(none)")
            ),
        }
    }
}

/// Apply a control call to the instance state.
pub fn apply(state: &InstanceState, request: &ToggleRequest) -> ToggleOutcome {
    let identity = state.identity();

    match (request.target.as_deref(), request.requested()) {
        (Some(target), Some(availability)) if target == identity => {
            state.set(availability);
            ToggleOutcome::Updated {
                identity: identity.to_string(),
                availability,
            }
        }
        _ => {
            tracing::debug!(
                target_name = ?request.target,
                active = ?request.active,
                identity = %identity,
                "Control call ignored"
            );
            ToggleOutcome::Ignored {
                target: request.target.clone(),
                identity: identity.to_string(),
            }
        }
    }
}
