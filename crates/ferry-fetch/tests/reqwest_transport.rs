#![cfg(feature = "reqwest")]

mod common;

use std::sync::Arc;

use common::server::{LocalServer, response};
use ferry_fetch::{
    EtagStore, Fetched, HashType, HttpVehicle, MemoryEtagStore, ReqwestTransport, Transport,
    TransportRequest, Vehicle,
};

#[tokio::test]
async fn revalidates_over_the_wire() {
    let server = LocalServer::spawn(vec![
        response("200 OK", &[("ETag", "\"v1\"")], "rules"),
        response("304 Not Modified", &[], ""),
    ]);
    let url = server.url("/rules.yaml");
    let store = Arc::new(MemoryEtagStore::new());
    let vehicle = HttpVehicle::new(&url, "rules.yaml", ReqwestTransport::shared(), store.clone())
        .with_header("User-Agent", "ferry-test");

    let first = vehicle.read(HashType::default()).await.unwrap();
    let hash = HashType::of(b"rules");
    assert_eq!(first, Fetched::Content { bytes: b"rules".to_vec(), hash });
    assert_eq!(store.get_etag_with_hash(&url).unwrap().1, "\"v1\"");

    let second = vehicle.read(hash).await.unwrap();
    assert_eq!(second, Fetched::Unchanged { hash });

    let requests: Vec<String> = server.finish().iter().map(|r| r.to_ascii_lowercase()).collect();
    assert!(requests[0].starts_with("get /rules.yaml http/1.1\r\n"));
    assert!(!requests[0].contains("if-none-match"));
    assert!(requests[0].contains("user-agent: ferry-test\r\n"));
    assert!(requests[1].contains("if-none-match: \"v1\"\r\n"));
}

#[tokio::test]
async fn reports_status_and_reason() {
    let server = LocalServer::spawn(vec![response("404 Not Found", &[], "missing")]);

    let response = ReqwestTransport::new()
        .request(TransportRequest::get(server.url("/missing")))
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(response.reason.as_deref(), Some("Not Found"));
    assert!(!response.is_success());
    drop(response);
    server.finish();
}
