use crate::response::Envelope;
use chrono::Utc;
use serde_json::{json, Value};

pub async fn health_check() -> Envelope<Value> {
    Envelope::data(json!({ "timestamp": Utc::now().to_rfc3339() }))
        .with_message("Server is running")
}
