use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Location for a request whose host starts with `www.`, if any.
fn bare_host_location(host: &str, path_and_query: &str) -> Option<String> {
    let bare = host.strip_prefix("www.")?;
    Some(format!("https://{bare}{path_and_query}"))
}

pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let location = req
        .headers()
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .and_then(|host| {
            let path_and_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
            bare_host_location(host, path_and_query)
        });

    let Some(location) = location else {
        return Ok(next.run(req).await);
    };

    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .map_err(|err| {
            tracing::error!(?err, "Failed to build www redirect");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, middleware, routing::get};
    use tower::ServiceExt as _;

    #[test]
    fn only_www_hosts_redirect() {
        assert_eq!(
            bare_host_location("www.example.org", "/learn?x=1").as_deref(),
            Some("https://example.org/learn?x=1")
        );
        assert_eq!(bare_host_location("example.org", "/"), None);
    }

    #[tokio::test]
    async fn middleware_redirects_permanently() {
        let app = Router::new()
            .route("/learn", get(|| async { "learn" }))
            .layer(middleware::from_fn(redirect_www));

        let redirected = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/learn")
                    .header(header::HOST, "www.example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(redirected.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(redirected.headers()[header::LOCATION], "https://example.org/learn");

        let passed = app
            .oneshot(
                Request::builder()
                    .uri("/learn")
                    .header(header::HOST, "example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(passed.status(), StatusCode::OK);
    }
}
