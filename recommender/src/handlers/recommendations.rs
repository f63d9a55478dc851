use crate::catalog::Catalog;
use crate::engine;
use crate::error::EngineResult;
use axum::{Extension, Json};
use common::{RecommendRequest, RecommendResponse};
use std::sync::Arc;

pub async fn recommendations_handler(
    Extension(catalog): Extension<Arc<Catalog>>,
    Json(request): Json<RecommendRequest>,
) -> EngineResult<Json<RecommendResponse>> {
    let recommendations = engine::answer(&request, &catalog)?;

    Ok(Json(RecommendResponse { recommendations }))
}
