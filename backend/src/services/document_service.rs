use serde_json::Value;
use shared::constants::SPIN_ENTRIES_COLLECTION;
use shared::contact::ContactSubmission;
use shared::persistence::DocumentHandle;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::error::Error;
use crate::models::DocumentRow;

/// Checks a document body before it is stored in `collection`.
///
/// Every collection takes JSON objects. Spin entries must also carry a
/// complete contact submission.
pub fn validate_document(collection: &str, body: &Value) -> Result<(), Error> {
    if !body.is_object() {
        return Err(Error::InvalidDocument("Document must be a JSON object".to_string()));
    }

    if collection == SPIN_ENTRIES_COLLECTION {
        let submission: ContactSubmission = serde_json::from_value(body.clone())
            .map_err(|e| Error::InvalidDocument(format!("Invalid spin entry: {}", e)))?;

        if let Err(errors) = submission.validate() {
            let mut missing: Vec<&str> = errors.field_errors().keys().copied().collect();
            missing.sort_unstable();
            return Err(Error::InvalidDocument(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
    }

    Ok(())
}

/// Appends one document. Rows are never updated; the database stamps
/// `created_at`.
pub async fn insert_document(
    pool: &PgPool,
    collection: &str,
    body: Value,
) -> Result<DocumentHandle, Error> {
    debug!("Inserting document into {}", collection);

    let row = sqlx::query_as::<_, DocumentRow>(
        "INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3) \
         RETURNING id, collection, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(collection)
    .bind(body)
    .fetch_one(pool)
    .await?;

    info!("Stored document {} in {}", row.id, row.collection);
    Ok(row.into())
}
