use anyhow::Result;
use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

/// Name of the MongoDB database holding the user collection.
const DB_NAME: &str = "resume-ready";

/// Connects to MongoDB and returns a handle to the application database.
///
/// The driver connects lazily, so a `ping` is issued here to make startup
/// fail fast on a bad URI or an unreachable server.
pub async fn connect(mongodb_uri: &str) -> Result<Database> {
    info!("Connecting to MongoDB...");

    let client = Client::with_uri_str(mongodb_uri).await?;
    let db = client.database(DB_NAME);
    db.run_command(doc! { "ping": 1 }).await?;

    info!("Connected to MongoDB (database: {DB_NAME})");
    Ok(db)
}
