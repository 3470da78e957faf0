use indexmap::IndexMap;
use serde::Deserialize;

/// Reusable components. Only schemas matter here; they are kept opaque.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, serde_json::Value>,
}
