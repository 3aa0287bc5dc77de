//! Student repository: the storage layer (generic over ConnectionTrait).
//!
//! Each function issues exactly one auto-committed statement. "No rows" and
//! "no such id" are ordinary outcomes; only engine failures become
//! `DomainError::Infra`.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use time::PrimitiveDateTime;
use tracing::{debug, info};

use crate::entities::students;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::logging::pii::Redacted;

/// Student domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: Option<i32>,
    pub created_at: PrimitiveDateTime,
}

/// Entry for a selector: the id is the value, the name is for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentOption {
    pub id: i64,
    pub name: String,
}

impl StudentOption {
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.name)
    }
}

/// The mutable fields of a student, already presence-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
}

pub async fn insert_student<C: ConnectionTrait>(
    conn: &C,
    fields: &StudentFields,
) -> Result<Student, DomainError> {
    let active = students::ActiveModel {
        id: NotSet,
        name: Set(fields.name.clone()),
        email: Set(fields.email.clone()),
        phone: Set(fields.phone.clone()),
        age: Set(Some(fields.age)),
        created_at: NotSet,
    };

    let model = active.insert(conn).await.map_err(map_db_err)?;
    info!(
        student_id = model.id,
        email = %Redacted(&model.email),
        "Student inserted"
    );
    Ok(Student::from(model))
}

/// All students in insertion order.
pub async fn list_students<C: ConnectionTrait>(conn: &C) -> Result<Vec<Student>, DomainError> {
    let rows = students::Entity::find()
        .order_by_asc(students::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)?;
    Ok(rows.into_iter().map(Student::from).collect())
}

pub async fn find_student<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
) -> Result<Option<Student>, DomainError> {
    let row = students::Entity::find_by_id(student_id)
        .one(conn)
        .await
        .map_err(map_db_err)?;
    Ok(row.map(Student::from))
}

/// `(id, name)` pairs for selectors, by name then id.
pub async fn list_student_options<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<StudentOption>, DomainError> {
    let pairs: Vec<(i64, String)> = students::Entity::find()
        .select_only()
        .column(students::Column::Id)
        .column(students::Column::Name)
        .order_by_asc(students::Column::Name)
        .order_by_asc(students::Column::Id)
        .into_tuple()
        .all(conn)
        .await
        .map_err(map_db_err)?;
    Ok(pairs
        .into_iter()
        .map(|(id, name)| StudentOption { id, name })
        .collect())
}

/// Overwrite every mutable field of the student with `student_id`.
///
/// Zero affected rows is reported as `NotFound` rather than success.
pub async fn update_student<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    fields: &StudentFields,
) -> Result<(), DomainError> {
    let changes = students::ActiveModel {
        name: Set(fields.name.clone()),
        email: Set(fields.email.clone()),
        phone: Set(fields.phone.clone()),
        age: Set(Some(fields.age)),
        ..Default::default()
    };

    let result = students::Entity::update_many()
        .set(changes)
        .filter(students::Column::Id.eq(student_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    if result.rows_affected == 0 {
        debug!(student_id, "Update matched no rows");
        return Err(DomainError::student_not_found(student_id));
    }
    info!(student_id, "Student updated");
    Ok(())
}

/// Delete the student with `student_id`; zero affected rows is `NotFound`.
pub async fn delete_student<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
) -> Result<(), DomainError> {
    let result = students::Entity::delete_by_id(student_id)
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    if result.rows_affected == 0 {
        debug!(student_id, "Delete matched no rows");
        return Err(DomainError::student_not_found(student_id));
    }
    info!(student_id, "Student deleted");
    Ok(())
}

impl From<students::Model> for Student {
    fn from(model: students::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            age: model.age,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_label_joins_id_and_name() {
        let option = StudentOption {
            id: 3,
            name: "Grace Hopper".into(),
        };
        assert_eq!(option.label(), "3 - Grace Hopper");
    }

    #[test]
    fn option_label_keeps_separator_inside_names() {
        let option = StudentOption {
            id: 12,
            name: "Jean - Luc".into(),
        };
        assert_eq!(option.label(), "12 - Jean - Luc");
    }
}
