//! Helpers for asserting on server-rendered pages.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;

/// Read a response body as UTF-8 HTML.
pub async fn read_page<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("page body should be UTF-8")
}

/// Markup the app renders for a notice of the given level.
pub fn notice_markup(level: &str, text: &str) -> String {
    format!(r#"<div class="notice notice-{level}">{text}</div>"#)
}

/// Assert that `html` contains a notice of `level` with exactly `text`.
pub fn assert_notice(html: &str, level: &str, text: &str) {
    let expected = notice_markup(level, text);
    assert!(
        html.contains(&expected),
        "expected notice {expected:?} in page:\n{html}"
    );
}

/// Assert that `html` carries no notice of `level` at all.
pub fn assert_no_notice(html: &str, level: &str) {
    let marker = format!(r#"class="notice notice-{level}""#);
    assert!(
        !html.contains(&marker),
        "unexpected {level} notice in page:\n{html}"
    );
}

/// Count the data rows of the student table on a List page.
pub fn table_row_count(html: &str) -> usize {
    html.matches(r#"<tr class="student-row">"#).count()
}

/// Assert that `html` contains a notice of `level` whose text begins with
/// `prefix` (for messages that embed engine output).
pub fn assert_notice_starts_with(html: &str, level: &str, prefix: &str) {
    let expected = format!(r#"<div class="notice notice-{level}">{prefix}"#);
    assert!(
        html.contains(&expected),
        "expected {level} notice starting {prefix:?} in page:\n{html}"
    );
}
