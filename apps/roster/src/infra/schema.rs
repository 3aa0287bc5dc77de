//! Idempotent creation of the `students` table.

use sea_orm::sea_query::{ColumnDef, Expr, Table};
use sea_orm::{ConnectionTrait, DbErr, DeriveIden};
use tracing::debug;

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Age,
    CreatedAt,
}

/// Create the `students` table when it does not exist yet.
///
/// Re-running against an existing table is a no-op. There is no migration
/// path: an existing table is left exactly as found.
pub async fn ensure_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let stmt = Table::create()
        .table(Students::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Students::Id)
                .integer()
                .not_null()
                .primary_key()
                .auto_increment(),
        )
        .col(ColumnDef::new(Students::Name).text().not_null())
        .col(ColumnDef::new(Students::Email).text().not_null())
        .col(ColumnDef::new(Students::Phone).text().not_null())
        .col(ColumnDef::new(Students::Age).integer().null())
        .col(
            ColumnDef::new(Students::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned();

    let builder = conn.get_database_backend();
    conn.execute(builder.build(&stmt)).await?;
    debug!("schema=ensure table=students ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::*;
    use crate::config::db::DbKind;
    use crate::entities::students;
    use crate::infra::db::connect_db;

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let db = connect_db(DbKind::SqliteMemory).await.unwrap();
        ensure_schema(&db).await.unwrap();
        ensure_schema(&db).await.unwrap();

        let count = students::Entity::find().count(&db).await.unwrap();
        assert_eq!(count, 0);
    }
}
