//! End-to-end checks driving the full router in-process.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use tower::ServiceExt;
use webjasa_common::{contact::ACK_MESSAGE, Inquiry, InquirySink, Result, SiteError};
use webjasa_web::{config::Config, router::build_router, state::AppState};

#[derive(Default)]
struct RecordingSink {
    received: Mutex<Vec<Inquiry>>,
}

#[async_trait]
impl InquirySink for RecordingSink {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<()> {
        self.received.lock().unwrap().push(inquiry.clone());
        Ok(())
    }
}

struct FailingSink;

#[async_trait]
impl InquirySink for FailingSink {
    async fn deliver(&self, _inquiry: &Inquiry) -> Result<()> {
        Err(SiteError::Other(anyhow::anyhow!("mailer offline")))
    }
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.server.static_dir = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../static"));
    config
}

fn app_with_sink(sink: Arc<dyn InquirySink>) -> Router {
    build_router(AppState::with_sink(test_config(), sink).unwrap())
}

fn app() -> Router {
    app_with_sink(Arc::new(RecordingSink::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_every_page_renders() {
    for uri in ["/", "/layanan", "/harga", "/faq", "/tentang", "/kontak", "/review", "/blog"] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("https://wa.me/6281234567890"), "{uri} lacks WhatsApp link");
        assert!(body.contains("mailto:info@webjasa.com"), "{uri} lacks mailto link");
    }
}

#[tokio::test]
async fn test_faq_starts_closed() {
    let (_, body) = get(app(), "/faq").await;
    assert!(!body.contains("faq-answer"));
    assert!(body.contains(r#"href="/faq?open=101#faq-101""#));
}

#[tokio::test]
async fn test_faq_open_item_shows_answer_and_links_to_close() {
    let (_, body) = get(app(), "/faq?open=1").await;
    assert_eq!(body.matches("class=\"faq-answer\"").count(), 1);
    assert!(body.contains("Sudah berapa lama WebJasa beroperasi?"));
    assert!(body.contains(r#"href="/faq#faq-1""#));
    assert!(body.contains(r#"href="/faq?open=102#faq-102""#));
}

#[tokio::test]
async fn test_faq_unknown_index_renders_closed() {
    for uri in ["/faq?open=999", "/faq?open=abc", "/faq?open=-1", "/faq?open=1&open=2"] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(!body.contains("faq-answer"), "{uri}");
    }
}

#[tokio::test]
async fn test_contact_get_has_empty_form_and_no_ack() {
    let (_, body) = get(app(), "/kontak").await;
    assert!(body.contains(r#"<form method="post" action="/kontak""#));
    assert!(!body.contains(ACK_MESSAGE));
}

#[tokio::test]
async fn test_contact_submit_acknowledges_and_keeps_values() {
    let sink = Arc::new(RecordingSink::default());
    let body = "name=Budi&email=budi%40example.com&nickname=bud&service=e-commerce&message=Butuh+toko+online&name=Budi+Santoso";
    let (status, html) = post_form(app_with_sink(sink.clone()), "/kontak", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(ACK_MESSAGE));
    assert!(html.contains(r#"value="Budi Santoso""#));
    assert!(html.contains(r#"value="budi@example.com""#));
    assert!(html.contains(r#"<option value="e-commerce" selected>"#));
    assert!(html.contains("Butuh toko online</textarea>"));
    assert!(!html.contains("nickname"));

    let received = sink.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].fields["name"], "Budi Santoso");
    assert_eq!(received[0].fields["company"], "");
    assert_eq!(received[0].fields.len(), 7);
}

#[tokio::test]
async fn test_contact_submit_with_empty_body_still_acknowledges() {
    let (status, html) = post_form(app(), "/kontak", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(ACK_MESSAGE));
}

#[tokio::test]
async fn test_contact_submit_survives_failing_sink() {
    let (status, html) = post_form(app_with_sink(Arc::new(FailingSink)), "/kontak", "name=Sari").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(ACK_MESSAGE));
    assert!(html.contains(r#"value="Sari""#));
}

#[tokio::test]
async fn test_contact_submit_without_form_content_type_still_acknowledges() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/kontak")
                .body(Body::from("name=Sari"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(ACK_MESSAGE));
    assert!(!html.contains(r#"value="Sari""#));
}

#[tokio::test]
async fn test_pages_send_no_cors_headers() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/kontak")
                .header(header::ORIGIN, "https://elsewhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_contact_values_are_escaped() {
    let (_, html) = post_form(app(), "/kontak", "name=%3Cb%3Ebold%3C%2Fb%3E").await;
    assert!(!html.contains("<b>bold"));
    assert!(html.contains("&lt;b&gt;bold"));
}

#[tokio::test]
async fn test_blog_post_and_category() {
    let (status, body) = get(app(), "/blog/4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("E-Commerce vs Marketplace"));

    let (status, body) = get(app(), "/blog/category/seo").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Panduan Lengkap SEO untuk Website Bisnis Lokal"));
    assert!(!body.contains("Artikel Unggulan"));

    let (status, _) = get(app(), "/blog/category/semua").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_blog_targets_are_404() {
    for uri in ["/blog/99", "/blog/not-a-number", "/blog/category/gardening"] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("Kembali ke Beranda"), "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_path_renders_themed_404() {
    let (status, body) = get(app(), "/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("https://wa.me/6281234567890"));
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let (status, body) = get(app(), "/static/css/main.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".faq-item"));
}
