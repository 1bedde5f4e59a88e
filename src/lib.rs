//! Failover demo backend library.

pub mod availability;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use availability::{Availability, InstanceState};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
