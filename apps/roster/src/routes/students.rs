//! Handlers for the List, Add, Update and Delete views.
//!
//! Storage outcomes never leave this module as errors: each one becomes a
//! notice on the re-rendered page. Only malformed requests surface as
//! `AppError` (through the extractor configs in `routes::configure`).

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::students::{self as students_repo, Student};
use crate::services::students::{self as students_service, StudentForm};
use crate::state::app_state::AppState;
use crate::views::students as student_views;
use crate::views::{Notice, Page, View};

/// `?id=` for the Update and Delete selectors.
#[derive(Debug, Default, Deserialize)]
pub struct SelectQuery {
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteChoice {
    Confirm,
    Cancel,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub action: DeleteChoice,
}

fn html(page: &Page) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.render())
}

/// Notice for a failed mutation. `verb` completes "Error {verb} student".
fn failure_notice(verb: &str, err: &DomainError) -> Notice {
    match err {
        DomainError::Validation(_, detail) => Notice::error(detail.clone()),
        DomainError::NotFound(_, detail) => Notice::warning(format!("{detail}.")),
        DomainError::Infra(_, detail) => Notice::error(format!("Error {verb} student: {detail}")),
    }
}

async fn list(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut page = Page::new(View::List);
    match students_repo::list_students(app_state.db()).await {
        Ok(rows) if rows.is_empty() => {
            page.push_notice(Notice::info("No students found in the database."));
        }
        Ok(rows) => {
            page.push_notice(Notice::info(format!("Total Students: {}", rows.len())));
            page.push_body(&student_views::list_table(&rows));
        }
        Err(e) => {
            page.push_notice(Notice::error(format!(
                "Error retrieving records: {}",
                e.detail()
            )));
        }
    }
    Ok(html(&page))
}

fn add_page(form: &StudentForm) -> Page {
    let mut page = Page::new(View::Add);
    page.push_body(&student_views::student_form("/students", form, "Add Student"));
    page
}

async fn new_form() -> Result<HttpResponse, AppError> {
    Ok(html(&add_page(&StudentForm::default())))
}

async fn create(
    app_state: web::Data<AppState>,
    form: web::Form<StudentForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let page = match students_service::create_student(app_state.db(), &form).await {
        Ok(student) => {
            debug!(student_id = student.id, "Add view submitted");
            let mut page = add_page(&StudentForm::default());
            page.push_notice(Notice::success("Student added successfully!"));
            page
        }
        Err(e) => {
            let mut page = add_page(&form);
            page.push_notice(failure_notice("adding", &e));
            page
        }
    };
    Ok(html(&page))
}

/// Fill the selector for `view` and load the chosen record.
///
/// An unknown or absent `requested` id falls back to the first option.
/// Returns `None` when there is nothing to act on; the reason is already on
/// the page as a notice.
async fn select_student(
    db: &DatabaseConnection,
    page: &mut Page,
    view: View,
    requested: Option<i64>,
) -> Option<Student> {
    let options = match students_repo::list_student_options(db).await {
        Ok(options) => options,
        Err(e) => {
            page.push_notice(Notice::error(format!(
                "Error retrieving student list: {}",
                e.detail()
            )));
            return None;
        }
    };
    let first = match options.first() {
        Some(first) => first.id,
        None => {
            page.push_notice(Notice::info("No students found. Please add a student first."));
            return None;
        }
    };
    let selected = requested
        .filter(|id| options.iter().any(|o| o.id == *id))
        .unwrap_or(first);

    let label = match view {
        View::Delete => "Select Student to Delete",
        _ => "Select Student to Update",
    };
    page.push_body(&student_views::selector(view.href(), label, &options, selected));

    match students_repo::find_student(db, selected).await {
        Ok(Some(student)) => Some(student),
        Ok(None) => {
            page.push_notice(Notice::warning(format!("Student {selected} not found.")));
            None
        }
        Err(e) => {
            page.push_notice(Notice::error(format!(
                "Error retrieving student: {}",
                e.detail()
            )));
            None
        }
    }
}

/// Update view body. `submitted` replaces the stored values in the form,
/// but only while the selection is still the `requested` student.
async fn fill_update_page(
    db: &DatabaseConnection,
    page: &mut Page,
    requested: Option<i64>,
    submitted: Option<&StudentForm>,
) {
    if let Some(student) = select_student(db, page, View::Update, requested).await {
        let form = match (requested, submitted) {
            (Some(id), Some(form)) if id == student.id => form.clone(),
            (Some(id), Some(_)) => {
                page.push_notice(Notice::warning(format!("Student {id} not found.")));
                StudentForm::from_student(&student)
            }
            _ => StudentForm::from_student(&student),
        };
        page.push_notice(Notice::info(format!("Editing: {}", student.name)));
        let action = format!("/students/{}/edit", student.id);
        page.push_body(&student_views::student_form(&action, &form, "Update Student"));
    }
}

async fn edit_view(
    app_state: web::Data<AppState>,
    query: web::Query<SelectQuery>,
) -> Result<HttpResponse, AppError> {
    let mut page = Page::new(View::Update);
    fill_update_page(app_state.db(), &mut page, query.id, None).await;
    Ok(html(&page))
}

async fn update(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<StudentForm>,
) -> Result<HttpResponse, AppError> {
    let student_id = path.into_inner();
    let form = form.into_inner();
    let db = app_state.db();
    let mut page = Page::new(View::Update);

    match students_service::update_student(db, student_id, &form).await {
        Ok(()) => {
            page.push_notice(Notice::success("Student updated successfully!"));
            fill_update_page(db, &mut page, Some(student_id), None).await;
        }
        Err(e) if e.is_not_found() => {
            page.push_notice(failure_notice("updating", &e));
            fill_update_page(db, &mut page, None, None).await;
        }
        Err(e) => {
            page.push_notice(failure_notice("updating", &e));
            fill_update_page(db, &mut page, Some(student_id), Some(&form)).await;
        }
    }
    Ok(html(&page))
}

async fn fill_delete_page(db: &DatabaseConnection, page: &mut Page, requested: Option<i64>) {
    if let Some(student) = select_student(db, page, View::Delete, requested).await {
        page.push_notice(Notice::warning(format!(
            "Are you sure you want to delete: {}?",
            student.name
        )));
        page.push_body(&student_views::delete_confirm(&student));
    }
}

async fn delete_view(
    app_state: web::Data<AppState>,
    query: web::Query<SelectQuery>,
) -> Result<HttpResponse, AppError> {
    let mut page = Page::new(View::Delete);
    fill_delete_page(app_state.db(), &mut page, query.id).await;
    Ok(html(&page))
}

async fn delete(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    let student_id = path.into_inner();
    let db = app_state.db();
    let mut page = Page::new(View::Delete);

    match form.action {
        DeleteChoice::Cancel => {
            info!(student_id, "Deletion cancelled");
            page.push_notice(Notice::info("Deletion cancelled."));
            fill_delete_page(db, &mut page, Some(student_id)).await;
        }
        DeleteChoice::Confirm => match students_service::delete_student(db, student_id).await {
            Ok(()) => {
                page.push_notice(Notice::success("Student deleted successfully!"));
                fill_delete_page(db, &mut page, None).await;
            }
            Err(e) => {
                page.push_notice(failure_notice("deleting", &e));
                fill_delete_page(db, &mut page, Some(student_id)).await;
            }
        },
    }
    Ok(html(&page))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/new", web::get().to(new_form))
        .route("/edit", web::get().to(edit_view))
        .route("/delete", web::get().to(delete_view))
        .route("/{id}/edit", web::post().to(update))
        .route("/{id}/delete", web::post().to(delete));
}
