//! Normalization rules shared by every input dialect: status parsing,
//! response classification, schema resolution, sorting and tag copying.
//!
//! Dialects differ only in where a response keeps its schema, which is
//! captured by [`ResponseShape`].

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use super::naming::synthesize_operation_id;
use super::schema_name::{extract_schema_name, find_json_content, resolve_schema};
use crate::ir::{HttpMethod, OperationRecord, ResponseRecord};
use crate::parse::direct::DirectResponse;
use crate::parse::response::Response;

/// A response entry as it appears in one of the supported dialects.
#[derive(Debug, Clone, Copy)]
pub enum ResponseShape<'a> {
    /// Schema nested under a content-type keyed `content` map.
    Negotiated(&'a Response),
    /// Schema carried directly on the response.
    Direct(&'a DirectResponse),
}

impl<'a> ResponseShape<'a> {
    /// The schema value this response offers for mocking, if any.
    pub fn candidate_schema(&self) -> Option<&'a Value> {
        match self {
            ResponseShape::Negotiated(r) => {
                find_json_content(&r.content).and_then(|mt| mt.schema.as_ref())
            }
            ResponseShape::Direct(r) => r.schema.as_ref(),
        }
    }

    fn description(&self) -> Option<&'a str> {
        match self {
            ResponseShape::Negotiated(r) => r.description.as_deref(),
            ResponseShape::Direct(r) => r.description.as_deref(),
        }
    }
}

/// Response key that stands in for every undeclared status.
const DEFAULT_KEY: &str = "default";

/// Parse a response key. `default` maps to 200; anything else must be a
/// plain run of ASCII digits that fits a `u16` (no sign, no `2XX` ranges).
pub fn parse_status(key: &str) -> Option<u16> {
    if key == DEFAULT_KEY {
        return Some(200);
    }
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Build the sorted response list for one operation.
///
/// Absent bodies and unparseable keys are skipped. An explicit numeric key
/// always owns its status: `default` only fills 200 when no `"200"` entry
/// exists, and between two numeric keys for one status the first is kept.
pub fn normalize_responses<'a, I>(entries: I, schemas: &IndexMap<String, Value>) -> Vec<ResponseRecord>
where
    I: IntoIterator<Item = (&'a str, Option<ResponseShape<'a>>)>,
{
    // status -> (record, came from `default`)
    let mut by_status: IndexMap<u16, (ResponseRecord, bool)> = IndexMap::new();

    for (key, shape) in entries {
        let Some(shape) = shape else {
            debug!("skipping response {key}: no response body");
            continue;
        };
        let Some(status_code) = parse_status(key) else {
            debug!("skipping response {key}: not a status code");
            continue;
        };
        let is_default = key == DEFAULT_KEY;

        if let Some((_, existing_default)) = by_status.get(&status_code) {
            if is_default || !*existing_default {
                debug!("skipping response {key}: status {status_code} is already declared");
                continue;
            }
            debug!("response {key} replaces the default entry for status {status_code}");
        }

        let inline = shape.candidate_schema();
        let schema_name = inline.and_then(extract_schema_name);
        let schema = resolve_schema(schema_name.as_deref(), inline, schemas);

        let record = ResponseRecord {
            status_code,
            description: shape.description().map(String::from),
            schema_name,
            schema,
        };
        by_status.insert(status_code, (record, is_default));
    }

    let mut responses: Vec<ResponseRecord> =
        by_status.into_values().map(|(record, _)| record).collect();
    responses.sort_by_key(|r| r.status_code);
    responses
}

/// Operation-level fields that every dialect supplies in some form.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationHeader<'a> {
    pub operation_id: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub description: Option<&'a str>,
    pub tags: Option<&'a [String]>,
}

/// Assemble the canonical record, synthesizing the operationId if needed.
pub fn build_operation(
    method: HttpMethod,
    path: &str,
    header: OperationHeader<'_>,
    responses: Vec<ResponseRecord>,
) -> OperationRecord {
    let operation_id = header
        .operation_id
        .map(String::from)
        .unwrap_or_else(|| synthesize_operation_id(method, path));

    OperationRecord {
        operation_id,
        method,
        path: path.to_string(),
        summary: header.summary.map(String::from),
        description: header.description.map(String::from),
        tags: header.tags.map(<[String]>::to_vec),
        responses,
    }
}
