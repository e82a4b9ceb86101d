use std::fs;
use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use spllit_host::{app, HostConfig};
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><html><body>spllit index</body></html>";
const STYLES: &str = "body { background: #0a0a0a; }";

fn dist_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("spllit-host-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), INDEX).unwrap();
    fs::write(dir.join("styles.css"), STYLES).unwrap();
    dir
}

async fn get(config: &HostConfig, uri: &str) -> (StatusCode, String) {
    let response = app(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_the_index_at_root() {
    let config = HostConfig { port: 0, dist_dir: dist_dir("root") };
    config.validate().unwrap();

    let (status, body) = get(&config, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn client_routes_fall_back_to_the_index() {
    let config = HostConfig { port: 0, dist_dir: dist_dir("routes") };

    for path in ["/how-it-works", "/features", "/pricing", "/no-such-page"] {
        let (status, body) = get(&config, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, INDEX, "{path}");
    }
}

#[tokio::test]
async fn serves_built_assets_verbatim() {
    let config = HostConfig { port: 0, dist_dir: dist_dir("assets") };

    let (status, body) = get(&config, "/styles.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, STYLES);
}

#[tokio::test]
async fn health_check_answers_ok() {
    let config = HostConfig { port: 0, dist_dir: dist_dir("health") };

    let (status, body) = get(&config, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}
