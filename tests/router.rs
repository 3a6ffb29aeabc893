//! Router-level tests driven without a socket.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use sender::{HttpServer, Reply, Sender, ServerConfig};
use tower::ServiceExt;

async fn empty(send: Sender) -> Reply {
    Ok(send)
}

async fn named_file(mut send: Sender) -> Reply {
    send.file("a.bin", vec![1, 2, 3])?;
    Ok(send)
}

fn app() -> Router {
    Router::new()
        .route("/empty", get(empty))
        .route("/file", get(named_file))
}

#[tokio::test]
async fn test_unfinished_sender_is_no_content() {
    let server = HttpServer::new(ServerConfig::default(), app());

    let res = server
        .router()
        .oneshot(Request::get("/empty").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_disposition_can_be_disabled() {
    let mut config = ServerConfig::default();
    config.response.attachment_disposition = false;
    let server = HttpServer::new(config, app());
    assert!(!server.config().response.attachment_disposition);

    let res = server
        .router()
        .oneshot(Request::get("/file").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(header::CONTENT_DISPOSITION).is_none());
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], &[1, 2, 3]);
}
