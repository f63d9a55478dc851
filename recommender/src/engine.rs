use crate::catalog::Catalog;
use crate::error::{EngineError, EngineResult};
use common::{QueryTarget, RecommendRequest, Recommendation};

/// Result count when a request does not say how many it wants
pub const DEFAULT_TOP_N: usize = 10;

/// Answer a canonical recommendation request against the catalog.
///
/// Identifier queries rank the track's stored raw vector and never recommend
/// the track itself. An identifier unknown to the catalog falls back to the
/// request's feature vector when one was supplied; that path keeps every
/// match, since there is no resolved identity to exclude.
pub fn answer(request: &RecommendRequest, catalog: &Catalog) -> EngineResult<Vec<Recommendation>> {
    let n = request.n.unwrap_or(DEFAULT_TOP_N);

    match request.target() {
        Some(QueryTarget::Track(track_id)) => match catalog.find_index(track_id) {
            Some(row) => {
                let self_id = catalog.track_id(row).to_string();

                // One extra slot so the query track itself can be dropped
                let mut recommendations = catalog.rank(catalog.features_row(row), n + 1)?;
                recommendations.retain(|r| r.track_id != self_id);
                recommendations.truncate(n);

                Ok(recommendations)
            }
            None => match &request.features {
                Some(features) => catalog.rank(features, n),
                None => Err(EngineError::TrackNotFound(track_id.to_string())),
            },
        },
        Some(QueryTarget::Vector(features)) => catalog.rank(features, n),
        None => Err(EngineError::MissingInput),
    }
}
