use serde::{Deserialize, Serialize};

/// Request payload for the query endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response payload for the query endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub sql: String,
    pub explanation: String,
    pub confidence: f64,
}

/// Response payload for the health check endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: crate::SERVICE_NAME.to_string(),
        }
    }
}
