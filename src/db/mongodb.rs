use mongodb::{Client, Database};
use std::env;

/// Connect to MongoDB using `MONGODB_URI`/`MONGODB_DB`. The driver
/// connects lazily, so this succeeds even when the server is unreachable;
/// individual operations surface the failure instead.
pub async fn get_database() -> mongodb::error::Result<Database> {
    let uri =
        env::var("MONGODB_URI").unwrap_or_else(|_| String::from("mongodb://localhost:27017"));
    let db_name = env::var("MONGODB_DB").unwrap_or_else(|_| String::from("qrforge"));

    let client = Client::with_uri_str(&uri).await?;
    Ok(client.database(&db_name))
}
