use indexmap::IndexMap;
use serde::Deserialize;

/// Flat operation list where each response carries its schema directly,
/// as produced by `@hey-api/openapi-ts` style intermediate models.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DirectDocument {
    #[serde(default)]
    pub operations: Vec<DirectOperation>,

    #[serde(default)]
    pub schemas: IndexMap<String, serde_json::Value>,
}

/// One operation with its method and path carried inline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectOperation {
    /// Any casing; unrecognized methods are skipped during collection.
    pub method: String,

    pub path: String,

    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,

    pub summary: Option<String>,

    pub description: Option<String>,

    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub responses: IndexMap<String, Option<DirectResponse>>,
}

/// A response with a single schema and no content negotiation layer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DirectResponse {
    #[serde(rename = "mediaType")]
    pub media_type: Option<String>,

    pub schema: Option<serde_json::Value>,

    pub description: Option<String>,
}
