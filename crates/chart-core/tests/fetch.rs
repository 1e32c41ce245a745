// File: crates/chart-core/tests/fetch.rs
// Purpose: Data acquisition against a one-shot local HTTP listener.

use std::time::Duration;

use flights_chart_core::{fetch_dataset, ChartError, FetchOptions, MalformedPolicy, ParseOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one response, returning the request line that was received.
async fn serve_once(status: &'static str, body: &'static str) -> anyhow::Result<(String, JoinHandle<String>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}", listener.local_addr()?);
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = sock.read(&mut chunk).await.expect("read request");
            if n == 0 { break; }
            buf.extend_from_slice(&chunk[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(response.as_bytes()).await.ok();
        sock.shutdown().await.ok();
        let req = String::from_utf8_lossy(&buf).to_string();
        req.lines().next().unwrap_or_default().to_string()
    });
    Ok((base, handle))
}

#[tokio::test]
async fn fetches_default_endpoint() -> anyhow::Result<()> {
    let (base, server) = serve_once("200 OK", r#"[{"total_flights": 5}, {"total_flights": 12}, {"total_flights": 5}]"#).await?;
    let opts = FetchOptions::new(base).with_timeout(Duration::from_secs(5));
    let ds = fetch_dataset(&opts).await?;

    assert_eq!(ds.len(), 3);
    assert_eq!(ds.max_count(), Some(12.0));
    assert_eq!(server.await?, "GET /total_flights.json HTTP/1.1");
    Ok(())
}

#[tokio::test]
async fn non_success_status_is_surfaced() -> anyhow::Result<()> {
    let (base, server) = serve_once("404 Not Found", "{}").await?;
    let err = fetch_dataset(&FetchOptions::new(base)).await.unwrap_err();
    assert!(matches!(err, ChartError::Status { status: 404, .. }), "got {err:?}");
    server.await?;
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_surfaced() -> anyhow::Result<()> {
    let (base, server) = serve_once("200 OK", "[{\"total_flights\": ").await?;
    let err = fetch_dataset(&FetchOptions::new(base)).await.unwrap_err();
    assert!(matches!(err, ChartError::Json(_)), "got {err:?}");
    server.await?;
    Ok(())
}

#[tokio::test]
async fn strict_parse_rejects_bad_records() -> anyhow::Result<()> {
    let (base, server) = serve_once("200 OK", r#"[{"count": 1}, {"count": null}]"#).await?;
    let parse = ParseOptions { field: "count".into(), policy: MalformedPolicy::Reject };
    let opts = FetchOptions::new(base).with_path("/busy_airports.json").with_parse(parse);
    let err = fetch_dataset(&opts).await.unwrap_err();
    assert!(matches!(err, ChartError::MalformedRecord { index: 1, .. }), "got {err:?}");
    assert_eq!(server.await?, "GET /busy_airports.json HTTP/1.1");
    Ok(())
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}", listener.local_addr()?);
    drop(listener);
    let err = fetch_dataset(&FetchOptions::new(base)).await.unwrap_err();
    assert!(matches!(err, ChartError::Http(_)), "got {err:?}");
    Ok(())
}
