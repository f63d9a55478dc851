use crate::catalog::math;
use crate::error::{EngineError, EngineResult};
use common::{CatalogData, Recommendation, TrackId};
use std::cmp::Ordering;
use std::path::Path;

/// File name of the catalog blob inside the model directory
pub const CATALOG_FILE: &str = "catalog.json";

/// Immutable in-memory similarity index over the track catalog.
///
/// Unit-normalized rows are computed once at build time, so a query costs one
/// dot product per catalog entry. Never mutated after construction; shared
/// across request tasks behind an `Arc`.
#[derive(Debug)]
pub struct Catalog {
    features: Vec<Vec<f32>>,
    track_ids: Vec<TrackId>,
    unit_features: Vec<Vec<f32>>,
    dim: usize,
}

impl Catalog {
    pub fn from_data(data: CatalogData) -> EngineResult<Self> {
        data.validate()?;

        let dim = data.features.first().map_or(0, Vec::len);
        let unit_features = data
            .features
            .iter()
            .map(|row| math::unit_normalized(row))
            .collect();

        Ok(Self {
            features: data.features,
            track_ids: data.track_ids,
            unit_features,
            dim,
        })
    }

    pub async fn load_from_dir(dir: &str) -> EngineResult<Self> {
        let path = Path::new(dir).join(CATALOG_FILE);
        let contents = tokio::fs::read_to_string(&path).await?;
        let data = CatalogData::from_json(&contents)?;

        Self::from_data(data)
    }

    pub fn count(&self) -> usize {
        self.track_ids.len()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn track_id(&self, row: usize) -> &TrackId {
        &self.track_ids[row]
    }

    pub fn features_row(&self, row: usize) -> &[f32] {
        &self.features[row]
    }

    /// Locate the row a track id is stored at.
    ///
    /// Match strategies, tried in order: the native representation, the query
    /// string coerced to an integer, and finally the canonical string forms
    /// of both sides. `None` is not an error; callers pick the fallback.
    pub fn find_index(&self, track_id: &TrackId) -> Option<usize> {
        if let Some(row) = self.track_ids.iter().position(|id| id == track_id) {
            return Some(row);
        }

        if let TrackId::Str(s) = track_id {
            if let Ok(parsed) = s.trim().parse::<i64>() {
                let as_int = TrackId::Int(parsed);
                if let Some(row) = self.track_ids.iter().position(|id| *id == as_int) {
                    return Some(row);
                }
            }
        }

        let wanted = track_id.to_string();
        self.track_ids
            .iter()
            .position(|id| id.to_string() == wanted)
    }

    /// Rank every catalog entry by cosine similarity to `query`, descending,
    /// keeping the first `n`. Ties keep catalog order: first occurrence wins.
    pub fn rank(&self, query: &[f32], n: usize) -> EngineResult<Vec<Recommendation>> {
        if query.len() != self.dim {
            return Err(EngineError::DimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let unit_query = math::unit_normalized(query);

        let mut scored: Vec<(usize, f32)> = self
            .unit_features
            .iter()
            .map(|row| math::dot(&unit_query, row))
            .enumerate()
            .collect();

        // Stable sort, so equal scores stay in catalog order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(n);

        Ok(scored
            .into_iter()
            .map(|(row, similarity)| Recommendation {
                track_id: self.track_ids[row].to_string(),
                similarity,
            })
            .collect())
    }
}
