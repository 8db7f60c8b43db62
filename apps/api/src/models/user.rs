#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// A user document in the `users` collection.
///
/// The collection schema is owned by the account service; only the fields
/// this API reads or writes are modeled here. Unknown document fields are
/// ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    /// Organized resume text; absent until the first successful upload.
    pub resume: Option<String>,
}
