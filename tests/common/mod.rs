//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use failover_backend::availability::{Availability, InstanceState};
use failover_backend::config::ServiceConfig;
use failover_backend::http::HttpServer;
use failover_backend::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A running service on an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub instance: Arc<InstanceState>,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestService {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

/// Start the service for `identity` in the given state.
pub async fn start_service(identity: &str, availability: Availability) -> TestService {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let instance = Arc::new(InstanceState::new(identity, availability));
    let server = HttpServer::new(config, instance.clone());

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    tokio::time::sleep(Duration::from_millis(50)).await;

    TestService {
        addr,
        instance,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// GET a URL and return status code and body.
pub async fn get(client: &reqwest::Client, url: &str) -> (u16, String) {
    let res = client.get(url).send().await.expect("service unreachable");
    let status = res.status().as_u16();
    (status, res.text().await.unwrap())
}
