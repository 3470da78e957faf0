use indexmap::IndexMap;
use serde_json::Value;

use super::normalize::{OperationHeader, ResponseShape, build_operation, normalize_responses};
use crate::ir::OperationRecord;
use crate::parse::operation::PathItem;
use crate::parse::spec::OpenApiDocument;

/// Collect canonical operations from an OpenAPI `paths` map.
///
/// Paths are visited in source order and, within a path, methods in the
/// fixed order `get, post, put, patch, delete, head, options`.
pub fn collect_operations(
    paths: &IndexMap<String, PathItem>,
    schemas: &IndexMap<String, Value>,
) -> Vec<OperationRecord> {
    let mut operations = Vec::new();

    for (path, item) in paths {
        for (method, op) in item.operations() {
            let responses = normalize_responses(
                op.responses.iter().map(|(key, resp)| {
                    (key.as_str(), resp.as_ref().map(ResponseShape::Negotiated))
                }),
                schemas,
            );
            let header = OperationHeader {
                operation_id: op.operation_id.as_deref(),
                summary: op.summary.as_deref(),
                description: op.description.as_deref(),
                tags: op.tags.as_deref(),
            };
            operations.push(build_operation(method, path, header, responses));
        }
    }

    operations
}

/// Collect operations from a whole document using its component schemas.
pub fn collect_document(doc: &OpenApiDocument) -> Vec<OperationRecord> {
    collect_operations(&doc.paths, &doc.schemas())
}
