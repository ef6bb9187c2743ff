use chrono::{DateTime, Utc};
use shared::persistence::DocumentHandle;
use uuid::Uuid;

/// Columns returned after a document insert. The body stays in the table.
#[derive(Debug, sqlx::FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub collection: String,
    pub created_at: DateTime<Utc>,
}

impl From<DocumentRow> for DocumentHandle {
    fn from(row: DocumentRow) -> Self {
        DocumentHandle {
            id: row.id.to_string(),
            collection: row.collection,
            created_at: row.created_at,
        }
    }
}
