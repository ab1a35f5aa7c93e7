//! Request/query types (Deserialize)

use serde::Deserialize;

/// `DELETE /workouts?id=` query. Kept as text so a non-numeric id is a 400
/// with a message rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}
