use crate::catalog::Catalog;
use crate::codec;
use crate::engine;
use crate::error::EngineResult;
use axum::{
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Extension,
};
use std::sync::Arc;

/// Raw inference entry point. The body encoding is chosen by the
/// Content-Type header, so decoding goes through the codec instead of an
/// axum extractor.
pub async fn invocations_handler(
    Extension(catalog): Extension<Arc<Catalog>>,
    headers: HeaderMap,
    body: String,
) -> EngineResult<Response> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json");

    // 1. Decode the body into the canonical query shape
    let request = codec::decode(&body, content_type)?;

    // 2. Rank against the catalog
    let recommendations = engine::answer(&request, &catalog)?;

    // 3. Encode the response
    let (body, content_type) = codec::encode(recommendations)?;

    Ok(([(CONTENT_TYPE, content_type)], body).into_response())
}
