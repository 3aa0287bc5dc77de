mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use common::{ada, fields, seed};
use roster::repos::students::{find_student, list_students};
use roster::test_support::{create_test_app, memory_state};
use roster_test_support::page::{assert_no_notice, assert_notice, read_page, table_row_count};

fn ada_form() -> [(&'static str, &'static str); 4] {
    [
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("phone", "555-0100"),
        ("age", "36"),
    ]
}

#[actix_web::test]
async fn root_redirects_to_list() {
    let state = memory_state().await.unwrap();
    let app = create_test_app(state).build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/students");
}

#[actix_web::test]
async fn empty_list_shows_empty_state() {
    let state = memory_state().await.unwrap();
    let app = create_test_app(state).build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/students").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-trace-id"));
    let html = read_page(resp).await;

    assert_notice(&html, "info", "No students found in the database.");
    assert_no_notice(&html, "error");
    assert_eq!(table_row_count(&html), 0);
}

#[actix_web::test]
async fn list_shows_rows_and_total() {
    let state = memory_state().await.unwrap();
    seed(&state, ada()).await;
    seed(&state, fields("Grace Hopper", "grace@example.com", "555-0199", 45)).await;
    let app = create_test_app(state).build().await;

    let html = read_page(
        test::call_service(&app, test::TestRequest::get().uri("/students").to_request()).await,
    )
    .await;
    assert_notice(&html, "info", "Total Students: 2");
    assert_eq!(table_row_count(&html), 2);
    assert!(html.contains("<td>Grace Hopper</td>"));
}

#[actix_web::test]
async fn add_inserts_and_reports_success() {
    let state = memory_state().await.unwrap();
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/students")
        .set_form(ada_form())
        .to_request();
    let html = read_page(test::call_service(&app, req).await).await;
    assert_notice(&html, "success", "Student added successfully!");

    let rows = list_students(state.db()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "ada@example.com");
}

#[actix_web::test]
async fn add_with_blank_field_stores_nothing() {
    let state = memory_state().await.unwrap();
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/students")
        .set_form([
            ("name", "Ada Lovelace"),
            ("email", ""),
            ("phone", "555-0100"),
            ("age", "36"),
        ])
        .to_request();
    let html = read_page(test::call_service(&app, req).await).await;

    assert_notice(&html, "error", "Please fill in all fields!");
    assert_no_notice(&html, "success");
    // Submitted values are kept in the form.
    assert!(html.contains(r#"value="Ada Lovelace""#));
    assert!(list_students(state.db()).await.unwrap().is_empty());
}

#[actix_web::test]
async fn add_clamps_age_into_range() {
    let state = memory_state().await.unwrap();
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/students")
        .set_form([
            ("name", "Old Timer"),
            ("email", "old@example.com"),
            ("phone", "1"),
            ("age", "250"),
        ])
        .to_request();
    test::call_service(&app, req).await;

    assert_eq!(list_students(state.db()).await.unwrap()[0].age, Some(100));
}

#[actix_web::test]
async fn update_view_without_students_shows_empty_state() {
    let state = memory_state().await.unwrap();
    let app = create_test_app(state).build().await;

    for uri in ["/students/edit", "/students/delete"] {
        let html =
            read_page(test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await)
                .await;
        assert_notice(&html, "info", "No students found. Please add a student first.");
        assert!(!html.contains("<form class=\"student-form\""));
        assert!(!html.contains("<form class=\"delete-confirm\""));
    }
}

#[actix_web::test]
async fn update_view_defaults_to_first_option() {
    let state = memory_state().await.unwrap();
    let zed = seed(&state, fields("Zed", "z@example.com", "1", 20)).await;
    let amy = seed(&state, fields("Amy", "a@example.com", "2", 21)).await;
    let app = create_test_app(state).build().await;

    let html = read_page(
        test::call_service(&app, test::TestRequest::get().uri("/students/edit").to_request()).await,
    )
    .await;
    assert_notice(&html, "info", "Editing: Amy");
    assert!(html.contains(&format!(r#"action="/students/{}/edit""#, amy.id)));
    assert!(html.contains(&format!(r#"<option value="{}">{} - Zed</option>"#, zed.id, zed.id)));

    let uri = format!("/students/edit?id={}", zed.id);
    let html =
        read_page(test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await)
            .await;
    assert_notice(&html, "info", "Editing: Zed");
    assert!(html.contains(r#"value="z@example.com""#));
}

#[actix_web::test]
async fn update_overwrites_record() {
    let state = memory_state().await.unwrap();
    let student = seed(&state, ada()).await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/students/{}/edit", student.id))
        .set_form([
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("phone", "555-0100"),
            ("age", "37"),
        ])
        .to_request();
    let html = read_page(test::call_service(&app, req).await).await;
    assert_notice(&html, "success", "Student updated successfully!");
    assert_notice(&html, "info", "Editing: Ada Lovelace");

    let reloaded = find_student(state.db(), student.id).await.unwrap().unwrap();
    assert_eq!(reloaded.age, Some(37));
    assert_eq!(reloaded.created_at, student.created_at);
}

#[actix_web::test]
async fn update_with_blank_field_leaves_record() {
    let state = memory_state().await.unwrap();
    let student = seed(&state, ada()).await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/students/{}/edit", student.id))
        .set_form([
            ("name", "  "),
            ("email", "new@example.com"),
            ("phone", "555-0100"),
            ("age", "40"),
        ])
        .to_request();
    let html = read_page(test::call_service(&app, req).await).await;
    assert_notice(&html, "error", "Please fill in all fields!");

    let reloaded = find_student(state.db(), student.id).await.unwrap().unwrap();
    assert_eq!(reloaded, student);
}

#[actix_web::test]
async fn update_missing_id_warns() {
    let state = memory_state().await.unwrap();
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/students/77/edit")
        .set_form(ada_form())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = read_page(resp).await;

    assert_notice(&html, "warning", "Student 77 not found.");
    assert_no_notice(&html, "success");
    assert!(list_students(state.db()).await.unwrap().is_empty());
}

#[actix_web::test]
async fn rejected_edit_for_vanished_id_does_not_target_another_student() {
    let state = memory_state().await.unwrap();
    let ada_row = seed(&state, ada()).await;
    seed(&state, fields("Zed", "z@example.com", "1", 20)).await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri("/students/999/edit")
        .set_form([
            ("name", "Intruder"),
            ("email", "intruder@example.com"),
            ("phone", ""),
            ("age", "50"),
        ])
        .to_request();
    let html = read_page(test::call_service(&app, req).await).await;

    assert_notice(&html, "error", "Please fill in all fields!");
    assert_notice(&html, "warning", "Student 999 not found.");
    assert_notice(&html, "info", "Editing: Ada Lovelace");
    // The fallback selection shows its own stored values, not the rejected input.
    assert!(html.contains(&format!(r#"action="/students/{}/edit""#, ada_row.id)));
    assert!(html.contains(r#"value="ada@example.com""#));
    assert!(!html.contains("Intruder"));

    let untouched = find_student(state.db(), ada_row.id).await.unwrap().unwrap();
    assert_eq!(untouched, ada_row);
}

#[actix_web::test]
async fn delete_view_asks_for_confirmation() {
    let state = memory_state().await.unwrap();
    let student = seed(&state, ada()).await;
    let app = create_test_app(state).build().await;

    let uri = format!("/students/delete?id={}", student.id);
    let html =
        read_page(test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await)
            .await;
    assert_notice(&html, "warning", "Are you sure you want to delete: Ada Lovelace?");
    assert!(html.contains(&format!(r#"action="/students/{}/delete""#, student.id)));
}

#[actix_web::test]
async fn delete_cancel_keeps_record() {
    let state = memory_state().await.unwrap();
    let student = seed(&state, ada()).await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/students/{}/delete", student.id))
        .set_form([("action", "cancel")])
        .to_request();
    let html = read_page(test::call_service(&app, req).await).await;

    assert_notice(&html, "info", "Deletion cancelled.");
    assert_notice(&html, "warning", "Are you sure you want to delete: Ada Lovelace?");
    assert_eq!(list_students(state.db()).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn delete_confirm_removes_and_refreshes() {
    let state = memory_state().await.unwrap();
    let student = seed(&state, ada()).await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/students/{}/delete", student.id))
        .set_form([("action", "confirm")])
        .to_request();
    let html = read_page(test::call_service(&app, req).await).await;

    assert_notice(&html, "success", "Student deleted successfully!");
    assert_notice(&html, "info", "No students found. Please add a student first.");
    assert!(find_student(state.db(), student.id).await.unwrap().is_none());
}

#[actix_web::test]
async fn delete_confirm_missing_id_warns() {
    let state = memory_state().await.unwrap();
    let kept = seed(&state, ada()).await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/students/{}/delete", kept.id + 100))
        .set_form([("action", "confirm")])
        .to_request();
    let html = read_page(test::call_service(&app, req).await).await;

    assert_notice(&html, "warning", &format!("Student {} not found.", kept.id + 100));
    assert_eq!(list_students(state.db()).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn unknown_delete_action_is_bad_request() {
    let state = memory_state().await.unwrap();
    let student = seed(&state, ada()).await;
    let app = create_test_app(state.clone()).build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/students/{}/delete", student.id))
        .set_form([("action", "maybe")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    assert_eq!(list_students(state.db()).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn non_numeric_selection_is_bad_request() {
    let state = memory_state().await.unwrap();
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/students/edit?id=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[actix_web::test]
async fn notices_do_not_carry_over_between_requests() {
    let state = memory_state().await.unwrap();
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/students")
        .set_form(ada_form())
        .to_request();
    test::call_service(&app, req).await;

    let html = read_page(
        test::call_service(&app, test::TestRequest::get().uri("/students/new").to_request()).await,
    )
    .await;
    assert_no_notice(&html, "success");
}
