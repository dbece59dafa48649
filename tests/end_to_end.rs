//! End-to-end activation flow against a running server.

use protocol_handler::config::HandlerConfig;
use protocol_handler::protocol::codec;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::StatusCode;

mod common;

const SAMPLE_URL: &str = "web+foo://eyJwdWJsaXNoZWRCbG9ja0lkIjoibXktdXVpZC1nb2VzLWhlcmUifQ==";
const SAMPLE_DATA: &str =
    "<h4>Data</h4><pre>{\n\t&quot;publishedBlockId&quot;: &quot;my-uuid-goes-here&quot;\n}</pre>";

fn percent_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[tokio::test]
async fn test_activation_flow() {
    let server = common::start_server(HandlerConfig::default()).await;
    let client = common::client();

    // Browser substitutes %s in the registered template.
    let res = client
        .get(server.url(&format!("/resolve?url={}", percent_encode(SAMPLE_URL))))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), StatusCode::FOUND);

    let location = res.headers()[LOCATION].to_str().unwrap().to_string();
    assert_eq!(
        location,
        format!("http://{}?req={}", server.addr, codec::encode(SAMPLE_URL))
    );

    // Browser follows the redirect.
    let res = client.get(&location).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));

    let body = res.text().await.unwrap();
    assert!(body.contains(&format!("<h4>URL</h4><pre>{}</pre>", SAMPLE_URL)));
    assert!(body.contains(SAMPLE_DATA));

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_page_without_request_renders_empty_panels() {
    let server = common::start_server(HandlerConfig::default()).await;

    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await.unwrap();
    assert!(body.contains("Register Handler"));
    assert!(body.contains("Unregister Handler"));
    assert!(!body.contains("<h4>URL</h4>"));
    assert!(!body.contains("<h4>Data</h4>"));

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_url_with_non_json_hostname_renders_url_only() {
    let server = common::start_server(HandlerConfig::default()).await;

    let req = codec::encode("web+foo://test");
    let res = common::client()
        .get(server.url(&format!("/?req={}", req)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await.unwrap();
    assert!(body.contains("<h4>URL</h4><pre>web+foo://test</pre>"));
    assert!(!body.contains("<h4>Data</h4>"));

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_garbage_never_causes_server_error() {
    let server = common::start_server(HandlerConfig::default()).await;
    let client = common::client();

    for path in [
        "/?req=%25%25%25",
        "/?req=%FF%FE",
        "/?req=",
        "/?req=dGVzdA",
        "/resolve?url=%25%25",
        "/resolve?url=http%3A%2F%2Fexample.com",
        "/resolve?url=web%2Bfoo%3Anohost",
    ] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert!(
            res.status() == StatusCode::OK || res.status() == StatusCode::FOUND,
            "{path} answered {}",
            res.status()
        );
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_page_registers_configured_scheme() {
    let mut config = HandlerConfig::default();
    config.protocol.scheme = "web+blankos".into();
    config.protocol.name = "Blankos Protocol".into();
    let server = common::start_server(config).await;

    let body = common::client()
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let template = format!("http://{}/resolve?url=%s", server.addr);
    assert!(body.contains(&format!(
        r#"navigator.registerProtocolHandler("web+blankos", "{}", "Blankos Protocol")"#,
        template
    )));
    assert!(body.contains(&format!(
        r#"navigator.unregisterProtocolHandler("web+blankos", "{}")"#,
        template
    )));

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = common::start_server(HandlerConfig::default()).await;

    let res = common::client().get(server.url("/healthz")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "ok");

    server.stop().await.unwrap();
}
