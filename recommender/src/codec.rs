use crate::error::{EngineError, EngineResult};
use common::{RecommendRequest, RecommendResponse, Recommendation, TrackId};

/// Content type of every encoded response
pub const RESPONSE_CONTENT_TYPE: &str = "application/json";

/// Decode a request body into the canonical query shape.
///
/// JSON bodies deserialize directly. CSV bodies are tokenized on commas: when
/// every token parses as a number the payload is a feature vector, otherwise
/// the first token is taken as a track id.
pub fn decode(body: &str, content_type: &str) -> EngineResult<RecommendRequest> {
    if content_type.starts_with("application/json") {
        Ok(serde_json::from_str(body)?)
    } else if content_type.starts_with("text/csv") {
        Ok(decode_csv(body))
    } else {
        Err(EngineError::UnsupportedContentType(content_type.to_string()))
    }
}

fn decode_csv(body: &str) -> RecommendRequest {
    let tokens: Vec<&str> = body.split(',').map(str::trim).collect();

    let numbers: Option<Vec<f32>> = tokens.iter().map(|t| t.parse::<f32>().ok()).collect();

    match numbers {
        Some(features) if !features.is_empty() => RecommendRequest {
            track_id: None,
            features: Some(features),
            n: None,
        },
        _ => RecommendRequest {
            track_id: Some(TrackId::Str(tokens[0].to_string())),
            features: None,
            n: None,
        },
    }
}

/// Encode ranked results as the response body plus its content type.
/// Accept negotiation is not implemented; the answer is always JSON.
pub fn encode(recommendations: Vec<Recommendation>) -> EngineResult<(String, &'static str)> {
    let body = serde_json::to_string(&RecommendResponse { recommendations })?;
    Ok((body, RESPONSE_CONTENT_TYPE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_track_id() {
        let request = decode(r#"{"track_id": "abc", "n": 5}"#, "application/json").unwrap();

        assert_eq!(request.track_id, Some(TrackId::Str("abc".to_string())));
        assert_eq!(request.n, Some(5));
    }

    #[test]
    fn test_decode_json_features() {
        let request = decode(r#"{"features": [1.0, 2.0]}"#, "application/json").unwrap();

        assert_eq!(request.features, Some(vec![1.0, 2.0]));
        assert!(request.track_id.is_none());
    }

    #[test]
    fn test_decode_json_with_charset() {
        let request = decode(r#"{"track_id": 7}"#, "application/json; charset=utf-8").unwrap();
        assert_eq!(request.track_id, Some(TrackId::Int(7)));
    }

    #[test]
    fn test_decode_json_invalid_body() {
        let result = decode("{not json", "application/json");
        assert!(matches!(result, Err(EngineError::Json(_))));
    }

    #[test]
    fn test_decode_csv_numeric() {
        let request = decode("1,2,3", "text/csv").unwrap();

        assert_eq!(request.features, Some(vec![1.0, 2.0, 3.0]));
        assert!(request.track_id.is_none());
    }

    #[test]
    fn test_decode_csv_numeric_with_spaces() {
        let request = decode(" 1.5 , -2.0 ", "text/csv").unwrap();
        assert_eq!(request.features, Some(vec![1.5, -2.0]));
    }

    #[test]
    fn test_decode_csv_identifier() {
        let request = decode("abc", "text/csv").unwrap();

        assert_eq!(request.track_id, Some(TrackId::Str("abc".to_string())));
        assert!(request.features.is_none());
    }

    #[test]
    fn test_decode_csv_identifier_first_token_only() {
        let request = decode("abc,def", "text/csv").unwrap();
        assert_eq!(request.track_id, Some(TrackId::Str("abc".to_string())));
    }

    #[test]
    fn test_decode_csv_mixed_tokens_become_identifier() {
        // One non-numeric token disqualifies the vector reading
        let request = decode("1,2,x", "text/csv").unwrap();
        assert_eq!(request.track_id, Some(TrackId::Str("1".to_string())));
    }

    #[test]
    fn test_decode_unsupported_content_type() {
        let err = decode("whatever", "text/plain").unwrap_err();

        assert!(matches!(err, EngineError::UnsupportedContentType(_)));
        assert!(err.to_string().contains("text/plain"));
    }

    #[test]
    fn test_encode_response_shape() {
        let (body, content_type) = encode(vec![Recommendation {
            track_id: "a".to_string(),
            similarity: 0.5,
        }])
        .unwrap();

        assert_eq!(content_type, "application/json");
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["recommendations"][0]["track_id"], "a");
        assert_eq!(value["recommendations"][0]["similarity"], 0.5);
    }

    #[test]
    fn test_encode_empty_results() {
        let (body, _) = encode(vec![]).unwrap();
        assert_eq!(body, r#"{"recommendations":[]}"#);
    }
}
