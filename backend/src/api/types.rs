//! REST API request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{TransformError, TransformResult};
use crate::transform::Transformation;

/// Body of `POST /transform`.
///
/// Fields are optional so that a missing field is reported as a request
/// error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformRequest {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub transformation: Option<String>,

    /// Seed for randomized effects (zalgo, spongebob_case). Kept raw so a
    /// bad value is reported on its own instead of failing the whole body.
    #[serde(default)]
    pub seed: Option<Value>,
}

impl TransformRequest {
    /// The requested seed; `null` and absent both mean unseeded
    pub fn seed(&self) -> TransformResult<Option<u64>> {
        match &self.seed {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_u64()
                .map(Some)
                .ok_or_else(|| TransformError::InvalidSeed(value.to_string())),
        }
    }
}

/// Successful transformation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResponse {
    pub success: bool,
    pub original_text: String,
    pub transformed_text: String,
    pub transformation: String,
}

impl TransformResponse {
    pub fn new(
        original_text: String,
        transformed_text: String,
        transformation: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            original_text,
            transformed_text,
            transformation: transformation.into(),
        }
    }
}

/// Catalog entry for `GET /api/transformations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationInfo {
    pub name: String,
    pub description: String,
    /// Output is an HTML fragment
    pub html: bool,
    /// Output depends on the random seed
    pub randomized: bool,
}

impl From<Transformation> for TransformationInfo {
    fn from(t: Transformation) -> Self {
        Self {
            name: t.name().to_string(),
            description: t.description().to_string(),
            html: t.is_html(),
            randomized: t.is_randomized(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationList {
    pub transformations: Vec<TransformationInfo>,
}

impl TransformationList {
    pub fn catalog() -> Self {
        Self {
            transformations: Transformation::ALL.into_iter().map(Into::into).collect(),
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "success": false,
        "error": error,
    })
}

/// Shorten `text` for log lines: first 100 characters, then `...`
pub fn preview(text: &str) -> String {
    const LIMIT: usize = 100;
    match text.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_fields_deserialize() {
        let req: TransformRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(req.text.as_deref(), Some("hi"));
        assert!(req.transformation.is_none());
        assert!(req.seed.is_none());

        let req: TransformRequest = serde_json::from_str(r#"{"text": null, "transformation": "rot13"}"#).unwrap();
        assert!(req.text.is_none());
    }

    #[test]
    fn test_request_seed() {
        let req: TransformRequest = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(req.seed(), Ok(Some(7)));

        let req: TransformRequest = serde_json::from_str(r#"{"seed": null}"#).unwrap();
        assert_eq!(req.seed(), Ok(None));

        for bad in ["-1", "1.5", r#""abc""#] {
            let req: TransformRequest = serde_json::from_str(&format!(r#"{{"seed": {bad}}}"#)).unwrap();
            assert_eq!(req.seed(), Err(TransformError::InvalidSeed(bad.to_string())), "{bad}");
        }
    }

    #[test]
    fn test_response_shape() {
        let resp = TransformResponse::new("abc".into(), "cba".into(), Transformation::Backwards.name());
        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["original_text"], "abc");
        assert_eq!(json["transformed_text"], "cba");
        assert_eq!(json["transformation"], "backwards");
    }

    #[test]
    fn test_catalog_listing() {
        let list = TransformationList::catalog();
        assert_eq!(list.transformations.len(), Transformation::ALL.len());
        let rainbow = list.transformations.iter().find(|t| t.name == "rainbow_html").unwrap();
        assert!(rainbow.html);
    }

    #[test]
    fn test_preview_truncates_long_text() {
        assert_eq!(preview("short"), "short");

        let exact = "a".repeat(100);
        assert_eq!(preview(&exact), exact);

        let long = "é".repeat(150);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), 103);
    }
}
