use serde::Deserialize;

/// A media type object. The schema is opaque apart from `$ref` and `title`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MediaType {
    pub schema: Option<serde_json::Value>,
}
