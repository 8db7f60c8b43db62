//! User Store — document-store access for user records.
//!
//! `AppState` carries an `Arc<dyn UserStore>`: production wires
//! `MongoUserStore`, handler tests inject an in-memory implementation.
//! An update is never assumed to have landed; it is classified from the
//! matched/modified counts the store reports.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::errors::AppError;
use crate::models::user::UserRecord;

/// Name of the collection holding user documents.
const USERS_COLLECTION: &str = "users";

/// Classification of an update as reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A document matched and the resume field was rewritten.
    Applied,
    /// No document matched the userId; it vanished since the lookup.
    NoMatch,
    /// A document matched but nothing was modified. MongoDB reports a
    /// `$set` of the already-present value as zero modified documents.
    Unmodified,
}

/// Read/write access to user records, keyed by the caller-supplied userId.
///
/// Record lifecycle is owned elsewhere: this API only confirms existence
/// and overwrites the resume field, never creating or deleting documents.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, AppError>;

    async fn update_resume(&self, user_id: &str, resume: &str)
        -> Result<UpdateOutcome, AppError>;
}

/// MongoDB-backed store over the `users` collection.
pub struct MongoUserStore {
    users: Collection<UserRecord>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, AppError> {
        let user = self.users.find_one(doc! { "userId": user_id }).await?;
        Ok(user)
    }

    async fn update_resume(
        &self,
        user_id: &str,
        resume: &str,
    ) -> Result<UpdateOutcome, AppError> {
        let result = self
            .users
            .update_one(
                doc! { "userId": user_id },
                doc! { "$set": { "resume": resume } },
            )
            .await?;

        Ok(classify_update(result.matched_count, result.modified_count))
    }
}

/// Classifies the matched/modified counts the store reports for an update.
pub fn classify_update(matched: u64, modified: u64) -> UpdateOutcome {
    if matched == 0 {
        UpdateOutcome::NoMatch
    } else if modified == 0 {
        UpdateOutcome::Unmodified
    } else {
        UpdateOutcome::Applied
    }
}
