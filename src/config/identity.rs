//! Instance identity resolution.
//!
//! Resolved once at startup, in order:
//! 1. `SERVER_NAME` environment variable (used verbatim when set)
//! 2. `instance.name` from the config file
//! 3. OS host name

/// Environment variable that overrides the instance identity.
pub const SERVER_NAME_ENV: &str = "SERVER_NAME";

/// Error type for identity resolution.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("failed to read host name: {0}")]
    Hostname(#[from] std::io::Error),
    #[error("host name is not valid UTF-8")]
    NonUtf8Hostname,
}

/// Resolve this instance's identity from the environment, the configured
/// name, and finally the host name.
pub fn resolve_identity(configured: Option<&str>) -> Result<String, IdentityError> {
    resolve_with(std::env::var(SERVER_NAME_ENV).ok(), configured, system_hostname)
}

fn resolve_with<F>(
    env_override: Option<String>,
    configured: Option<&str>,
    hostname: F,
) -> Result<String, IdentityError>
where
    F: FnOnce() -> Result<String, IdentityError>,
{
    if let Some(name) = env_override {
        return Ok(name);
    }
    if let Some(name) = configured {
        return Ok(name.to_string());
    }
    hostname()
}

fn system_hostname() -> Result<String, IdentityError> {
    hostname::get()?
        .into_string()
        .map_err(|_| IdentityError::NonUtf8Hostname)
}
