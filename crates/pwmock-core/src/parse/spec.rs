use indexmap::IndexMap;
use serde::Deserialize;

use super::components::Components;
use super::operation::PathItem;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Info {
    pub title: String,

    pub description: Option<String>,

    pub version: String,
}

/// Top-level OpenAPI 3.x document, reduced to what mock generation reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,

    pub info: Option<Info>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    pub components: Option<Components>,
}

impl OpenApiDocument {
    /// The component schema table, empty when the document declares none.
    pub fn schemas(&self) -> IndexMap<String, serde_json::Value> {
        self.components
            .as_ref()
            .map(|c| c.schemas.clone())
            .unwrap_or_default()
    }
}
