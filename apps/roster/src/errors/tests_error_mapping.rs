// Unit tests for DomainError -> AppError mapping
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_missing_field_to_422() {
    let de = DomainError::validation(ValidationKind::MissingField, "Please fill in all fields!");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::MissingField);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_other_validation_to_generic_code() {
    let de = DomainError::validation(ValidationKind::Other("age".into()), "bad age");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_student_not_found() {
    let app: AppError = DomainError::student_not_found(7).into();
    assert_eq!(app.code().as_str(), "STUDENT_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.detail(), "Student 7 not found");
}

#[test]
fn maps_generic_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Other("Record".into()), "gone");
    let app: AppError = nf.into();
    assert_eq!(app.code(), ErrorCode::NotFound);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "boom");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::DbError);
    assert_eq!(app.status().as_u16(), 500);
}
