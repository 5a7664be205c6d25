use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use zipline_core::{ShortCode, Shortener, StorageError};

use crate::error::{ApiError, Result};
use crate::model::{GetLongParams, GetShortParams};
use crate::state::AppState;

pub async fn root_handler(State(state): State<AppState>) -> String {
    format!(
        "Welcome to URL conversion.\n\n\
         Usage:\n\
         \t{base}/getShort?longUrl=http(s)://www.xyz.com\n\
         \t{base}/getLong?shortUrl=dmzKek\n",
        base = state.base_url()
    )
}

/// `GET /getShort?longUrl=<url>` — returns the fully-qualified short URL
/// for the given long URL, minting a new mapping on first use.
pub async fn get_short_handler(
    State(state): State<AppState>,
    Query(params): Query<GetShortParams>,
) -> Result<String> {
    let long_url = params.long_url.unwrap_or_default();
    if long_url.is_empty() {
        return Err(ApiError::MalformedRequest(
            "missing query parameter: longUrl".to_string(),
        ));
    }

    let code = state.shortener().shorten(&long_url).await?;
    Ok(code.to_url(state.base_url()))
}

/// `GET /getLong?shortUrl=<code>` — returns the raw long URL a short code
/// was assigned to.
pub async fn get_long_handler(
    State(state): State<AppState>,
    Query(params): Query<GetLongParams>,
) -> Result<String> {
    let raw = params.short_url.unwrap_or_default();
    if raw.is_empty() {
        return Err(ApiError::MalformedRequest(
            "missing query parameter: shortUrl".to_string(),
        ));
    }

    let code = ShortCode::new(raw)
        .map_err(|e| ApiError::MalformedRequest(e.to_string()))?;

    match state.shortener().resolve(&code).await? {
        Some(long_url) => Ok(long_url),
        None => Err(ApiError::NotFound(code.to_string())),
    }
}

/// `GET /{code}` — redirects to the long URL behind a short code.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let code = ShortCode::new(raw)
        .map_err(|e| ApiError::MalformedRequest(e.to_string()))?;

    match state.shortener().resolve(&code).await? {
        Some(long_url) => {
            // Long URLs are stored opaquely, so one carrying characters
            // illegal in a header (e.g. a raw newline) can be registered
            // and resolved but never redirected to. Build the Location
            // value explicitly so that case stays inside the error
            // taxonomy instead of falling through to a bare 500.
            let location = HeaderValue::from_str(&long_url).map_err(|_| {
                ApiError::Storage(StorageError::InvalidData(format!(
                    "stored long url for '{}' is not a valid redirect target",
                    code
                )))
            })?;
            Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
        }
        None => Err(ApiError::NotFound(code.to_string())),
    }
}
