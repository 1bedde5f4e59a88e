//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Per request:
//!     → tower_http TraceLayer span (method, uri, status, latency)
//!     → X-Request-ID correlates log lines with responses
//! ```

pub mod logging;
