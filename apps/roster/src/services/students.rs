use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::debug;

use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::students::{self as students_repo, Student, StudentFields};

/// Inclusive bounds the age widget enforces.
pub const AGE_MIN: i32 = 1;
pub const AGE_MAX: i32 = 100;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields!";

/// Raw Add/Update form submission.
///
/// Every field is optional text so that an omitted or blank input is a
/// validation outcome instead of a payload error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StudentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: String,
}

impl StudentForm {
    /// Pre-fill from an existing record.
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone(),
            age: student.age.unwrap_or(AGE_MIN).to_string(),
        }
    }

    /// Presence check: every text field non-blank and age an integer.
    ///
    /// Text is kept as entered; age is clamped into the widget's range.
    pub fn validate(&self) -> Result<StudentFields, DomainError> {
        let blank = |s: &str| s.trim().is_empty();
        let age = self.age.trim().parse::<i32>().ok();

        match age {
            Some(age) if !blank(&self.name) && !blank(&self.email) && !blank(&self.phone) => {
                Ok(StudentFields {
                    name: self.name.clone(),
                    email: self.email.clone(),
                    phone: self.phone.clone(),
                    age: age.clamp(AGE_MIN, AGE_MAX),
                })
            }
            _ => {
                debug!("Student form failed presence check");
                Err(DomainError::validation(
                    ValidationKind::MissingField,
                    MISSING_FIELDS_MESSAGE,
                ))
            }
        }
    }
}

/// Validate and insert. No storage call happens when validation fails.
pub async fn create_student<C: ConnectionTrait>(
    conn: &C,
    form: &StudentForm,
) -> Result<Student, DomainError> {
    let fields = form.validate()?;
    students_repo::insert_student(conn, &fields).await
}

/// Validate and overwrite. No storage call happens when validation fails.
pub async fn update_student<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    form: &StudentForm,
) -> Result<(), DomainError> {
    let fields = form.validate()?;
    students_repo::update_student(conn, student_id, &fields).await
}

pub async fn delete_student<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
) -> Result<(), DomainError> {
    students_repo::delete_student(conn, student_id).await
}
