/// Sends a request with an optional JSON body and returns the response.
macro_rules! send {
    ($app:expr, $method:ident, $uri:expr) => {
        actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::$method().uri($uri).to_request(),
        )
        .await
    };
    ($app:expr, $method:ident, $uri:expr, $body:expr) => {
        actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::$method()
                .uri($uri)
                .set_json($body)
                .to_request(),
        )
        .await
    };
}

/// Builds the full application over fresh in-memory repositories.
macro_rules! app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| workforce_backend::AppState::in_memory().configure(cfg)),
        )
        .await
    };
}

/// Sends a request and returns `(status, json body)`.
macro_rules! exchange {
    ($($args:tt)*) => {{
        let resp = send!($($args)*);
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}
