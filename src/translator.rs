//! Placeholder natural-language-to-SQL conversion.
//!
//! The query text is embedded verbatim into a fixed `LIKE` template. Nothing is
//! escaped, so the output must never be executed against a real database.

use crate::models::QueryResponse;

/// Fixed disclaimer returned with every conversion
pub const EXPLANATION: &str =
    "This is a placeholder NL2SQL service. Replace with your actual implementation.";

/// Confidence reported for every conversion
pub const CONFIDENCE: f64 = 0.5;

/// Converts a free-text query into the placeholder SQL response.
pub fn convert(query: &str) -> QueryResponse {
    QueryResponse {
        sql: format!("SELECT * FROM table WHERE description LIKE '%{query}%'"),
        explanation: EXPLANATION.to_string(),
        confidence: CONFIDENCE,
    }
}
