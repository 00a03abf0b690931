#![allow(clippy::unwrap_used, clippy::panic, missing_debug_implementations, unreachable_pub)]

use axum::http::StatusCode;

mod common;

use common::{GatewayBehavior, MockGateway, TestApp};

#[tokio::test]
async fn test_livez() {
    let gateway = MockGateway::spawn(GatewayBehavior::Accept).await;
    let app = TestApp::spawn(&gateway.url).await;

    let resp = app.client.get(format!("{}/livez", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}
