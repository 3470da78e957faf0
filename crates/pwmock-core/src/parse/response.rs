use indexmap::IndexMap;
use serde::Deserialize;

use super::media_type::MediaType;

/// A response definition with content-type negotiated schemas.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Response {
    pub description: Option<String>,

    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}
