//! Service landing route.

use axum::Json;
use serde::Serialize;

/// Service name reported by `GET /`.
pub const SERVICE_NAME: &str = "Contacts API";

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: String,
    pub service: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub contacts: &'static str,
}

/// Handler for GET /
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: format!("Welcome to {SERVICE_NAME}"),
        service: SERVICE_NAME,
        description: env!("CARGO_PKG_DESCRIPTION"),
        version: env!("CARGO_PKG_VERSION"),
        contacts: "/contacts/",
    })
}
