use serde::{Deserialize, Serialize};

/// Query parameters for `GET /getShort`.
#[derive(Debug, Deserialize)]
pub struct GetShortParams {
    #[serde(rename = "longUrl")]
    pub long_url: Option<String>,
}

/// Query parameters for `GET /getLong`.
#[derive(Debug, Deserialize)]
pub struct GetLongParams {
    #[serde(rename = "shortUrl")]
    pub short_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Structured error payload returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}
