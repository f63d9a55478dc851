use crate::error::CommonError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier as stored in catalogs and sent in requests.
/// Catalogs built from heterogeneous sources store ids as JSON numbers or
/// strings; both forms are accepted everywhere an id appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackId {
    Int(i64),
    Str(String),
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackId::Int(id) => write!(f, "{}", id),
            TrackId::Str(id) => write!(f, "{}", id),
        }
    }
}

/// Request for track recommendations
///
/// Carries an existing track id, a raw feature vector, or both (the id wins;
/// the vector is then a fallback for ids unknown to the catalog).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<TrackId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<usize>,
}

/// Tagged view of the input that drives a query
#[derive(Debug)]
pub enum QueryTarget<'a> {
    Track(&'a TrackId),
    Vector(&'a [f32]),
}

impl RecommendRequest {
    /// Project the request onto its query target, or `None` when the request
    /// carries neither a track id nor a feature vector.
    pub fn target(&self) -> Option<QueryTarget<'_>> {
        if let Some(track_id) = &self.track_id {
            Some(QueryTarget::Track(track_id))
        } else if let Some(features) = &self.features {
            Some(QueryTarget::Vector(features))
        } else {
            None
        }
    }
}

/// A single ranked recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub track_id: String,
    pub similarity: f32,
}

/// Response payload, recommendations in descending similarity order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Serialized catalog blob (feature matrix + parallel id list)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub features: Vec<Vec<f32>>,
    pub track_ids: Vec<TrackId>,
}

impl CatalogData {
    pub fn from_json(json: &str) -> Result<Self, CommonError> {
        let data: CatalogData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Check structural invariants: one id per feature row, rectangular rows.
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.features.len() != self.track_ids.len() {
            return Err(CommonError::MalformedCatalog(format!(
                "{} feature rows but {} track ids",
                self.features.len(),
                self.track_ids.len()
            )));
        }

        if let Some(first) = self.features.first() {
            let dim = first.len();
            for (row, features) in self.features.iter().enumerate() {
                if features.len() != dim {
                    return Err(CommonError::MalformedCatalog(format!(
                        "feature row {} has length {}, expected {}",
                        row,
                        features.len(),
                        dim
                    )));
                }
            }
        }

        Ok(())
    }
}
