//! Demo routes exercising every kind of response.
//!
//! | Route         | Response                                   |
//! |---------------|--------------------------------------------|
//! | `/`           | HTML page                                  |
//! | `/status`     | JSON `result` envelope                     |
//! | `/legacy.xml` | JSON envelope tagged `application/xml`     |
//! | `/motd`       | text in a JSON envelope                    |
//! | `/ping`       | `{"result":true}`                          |
//! | `/login`      | redirect to `/`, sets a session cookie     |
//! | `/report`     | CSV download                               |
//! | `/fail`       | 400 error envelope                         |
//! | `/private`    | 401 error envelope                         |

use axum::{
    http::{header, HeaderValue, StatusCode},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::sender::{Reply, Sender};

#[derive(Serialize)]
struct ServiceStatus {
    version: &'static str,
    status: &'static str,
}

pub fn demo_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/status", get(status))
        .route("/legacy.xml", get(legacy_xml))
        .route("/motd", get(motd))
        .route("/ping", get(ping))
        .route("/login", get(login))
        .route("/report", get(report))
        .route("/fail", get(fail))
        .route("/private", get(private))
}

async fn index(mut send: Sender) -> Reply {
    send.html("<!doctype html><h1>sender</h1>")?;
    Ok(send)
}

async fn status(mut send: Sender) -> Reply {
    send.json(&ServiceStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })?;
    Ok(send)
}

async fn legacy_xml(mut send: Sender) -> Reply {
    send.xml("<status>operational</status>")?;
    Ok(send)
}

async fn motd(mut send: Sender) -> Reply {
    send.text("hello from sender")?;
    Ok(send)
}

async fn ping(mut send: Sender) -> Reply {
    send.error::<&str, _>(None)?;
    Ok(send)
}

async fn login(mut send: Sender) -> Reply {
    send.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_static("session=demo; Path=/; HttpOnly"),
    );
    send.redirect("/")?;
    Ok(send)
}

async fn report(mut send: Sender) -> Reply {
    send.file("report.csv", b"id,total\n1,42\n".to_vec())?;
    Ok(send)
}

async fn fail(mut send: Sender) -> Reply {
    send.fail("something went wrong")?;
    Ok(send)
}

async fn private(mut send: Sender) -> Reply {
    send.status(StatusCode::UNAUTHORIZED).fail("login required")?;
    Ok(send)
}
