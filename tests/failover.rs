//! End-to-end tests against a running service.

use std::time::Duration;

use failover_backend::availability::Availability;

mod common;

#[tokio::test]
async fn test_deactivate_then_api_fails() {
    let service = common::start_service("node1", Availability::Active).await;
    let client = common::client();

    let (status, body) = common::get(&client, &service.url("/control/toggle?target=node1&active=false")).await;
    assert_eq!(status, 200);
    assert!(body.contains("now inactive"));

    let (status, body) = common::get(&client, &service.url("/api")).await;
    assert_eq!(status, 503);
    assert!(body.contains("INACTIVE"));

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_reactivate_then_api_succeeds() {
    let service = common::start_service("node1", Availability::Inactive).await;
    let client = common::client();

    let (status, body) = common::get(&client, &service.url("/control/toggle?target=node1&active=true")).await;
    assert_eq!(status, 200);
    assert!(body.contains("now active"));

    let (status, body) = common::get(&client, &service.url("/api")).await;
    assert_eq!(status, 200);
    assert!(body.contains("node1"));

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_foreign_target_leaves_state_unchanged() {
    for availability in [Availability::Active, Availability::Inactive] {
        let service = common::start_service("node1", availability).await;
        let client = common::client();

        let (status, body) = common::get(&client, &service.url("/control/toggle?target=other&active=false")).await;
        assert_eq!(status, 200);
        assert!(body.contains("IGNORED"));
        assert_eq!(service.instance.availability(), availability);

        let expected = if availability.is_active() { 200 } else { 503 };
        let (status, _) = common::get(&client, &service.url("/api")).await;
        assert_eq!(status, expected);

        service.shutdown.trigger();
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let service = common::start_service("node1", Availability::Active).await;
    let client = common::client();

    let res = client.get(service.url("/unknown/path")).send().await.unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(
        res.headers().get("content-type").unwrap().to_str().unwrap(),
        "text/plain"
    );
    assert_eq!(res.text().await.unwrap(), "Not Found\n");

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_two_instances_only_target_toggles() {
    let a = common::start_service("node-a", Availability::Active).await;
    let b = common::start_service("node-b", Availability::Active).await;
    let client = common::client();

    // A proxy fans control calls out to every backend.
    for service in [&a, &b] {
        let (status, _) = common::get(&client, &service.url("/control/toggle?target=node-b&active=false")).await;
        assert_eq!(status, 200);
    }

    assert_eq!(common::get(&client, &a.url("/api")).await.0, 200);
    assert_eq!(common::get(&client, &b.url("/api")).await.0, 503);

    a.shutdown.trigger();
    b.shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_toggles_and_probes() {
    let service = common::start_service("node1", Availability::Active).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let toggle = service.url(&format!(
            "/control/toggle?target=node1&active={}",
            if i % 2 == 0 { "false" } else { "true" }
        ));
        let api = service.url("/api");
        tasks.push(tokio::spawn(async move {
            let (toggle_status, _) = common::get(&client, &toggle).await;
            let (api_status, _) = common::get(&client, &api).await;
            (toggle_status, api_status)
        }));
    }

    for task in tasks {
        let (toggle_status, api_status) = task.await.unwrap();
        assert_eq!(toggle_status, 200);
        assert!(api_status == 200 || api_status == 503);
    }

    // Settle on a known state and confirm the API agrees with it.
    common::get(&client, &service.url("/control/toggle?target=node1&active=false")).await;
    assert_eq!(common::get(&client, &service.url("/api")).await.0, 503);

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown_stops_server() {
    let service = common::start_service("node1", Availability::Active).await;

    service.shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), service.handle)
        .await
        .expect("server did not stop");
    assert!(result.unwrap().is_ok());
}
