use sea_orm::DatabaseConnection;

/// Application state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pooled handle to the student database
    db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
