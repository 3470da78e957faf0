use indexmap::IndexMap;
use serde_json::Value;

use crate::parse::media_type::MediaType;

/// Canonical prefix of component schema references.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Derive a bare schema name from a schema value.
///
/// - `$ref` with the canonical prefix → the remainder after the prefix
/// - any other non-empty `$ref` → its last `/`-delimited segment
/// - otherwise a non-empty inline `title`
pub fn extract_schema_name(schema: &Value) -> Option<String> {
    if let Some(ref_path) = schema
        .get("$ref")
        .and_then(Value::as_str)
        .filter(|r| !r.is_empty())
    {
        let name = match ref_path.strip_prefix(SCHEMA_REF_PREFIX) {
            Some(rest) => rest,
            None => ref_path.rsplit('/').next().unwrap_or_default(),
        };
        return (!name.is_empty()).then(|| name.to_string());
    }

    schema
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

/// Pick the JSON-bearing media type from a content map.
///
/// An exact `application/json` key wins; otherwise the first key (in source
/// order) containing both `application/` and `json`, which covers vendor
/// types such as `application/vnd.api+json`.
pub fn find_json_content(content: &IndexMap<String, MediaType>) -> Option<&MediaType> {
    if let Some(mt) = content.get("application/json") {
        return Some(mt);
    }
    content
        .iter()
        .find(|(key, _)| {
            let key = key.to_ascii_lowercase();
            key.contains("application/") && key.contains("json")
        })
        .map(|(_, mt)| mt)
}

/// Look `name` up in the schema table, falling back to the inline schema.
pub fn resolve_schema(
    name: Option<&str>,
    inline: Option<&Value>,
    schemas: &IndexMap<String, Value>,
) -> Option<Value> {
    name.and_then(|n| schemas.get(n))
        .or(inline)
        .cloned()
}
