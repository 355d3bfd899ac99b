//! HTTP delivery end-to-end: bind an ephemeral port, fetch the page, and
//! compare against the renderer's output.

use tokio_util::sync::CancellationToken;

use botbook::render::render_page;
use botbook::server::PageServer;

#[tokio::test]
async fn serves_the_rendered_page_at_root() {
    let cancel = CancellationToken::new();
    let (server, addr) = PageServer::bind("127.0.0.1:0", cancel.clone())
        .await
        .expect("bind ephemeral port");

    let response = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("GET / should succeed");
    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("text/html"),
        "page should be served as text/html, got {content_type}"
    );

    let body = response.text().await.expect("body");
    assert_eq!(body, render_page(), "served page should match the renderer");

    cancel.cancel();
    server.run_until_shutdown().await;
}

#[tokio::test]
async fn serves_identical_bytes_on_repeat_requests() {
    let cancel = CancellationToken::new();
    let (server, addr) = PageServer::bind("127.0.0.1:0", cancel.clone())
        .await
        .expect("bind ephemeral port");

    let url = format!("http://{addr}/");
    let first = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    let second = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    assert_eq!(first, second, "repeat requests should be byte-identical");

    cancel.cancel();
    server.run_until_shutdown().await;
}

#[tokio::test]
async fn healthz_responds_ok() {
    let cancel = CancellationToken::new();
    let (server, addr) = PageServer::bind("127.0.0.1:0", cancel.clone())
        .await
        .expect("bind ephemeral port");

    let response = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "ok");

    cancel.cancel();
    server.run_until_shutdown().await;
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let cancel = CancellationToken::new();
    let (server, addr) = PageServer::bind("127.0.0.1:0", cancel.clone())
        .await
        .expect("bind ephemeral port");

    let response = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    cancel.cancel();
    server.run_until_shutdown().await;
}
