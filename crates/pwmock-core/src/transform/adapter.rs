use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use super::normalize::{OperationHeader, ResponseShape, build_operation, normalize_responses};
use crate::ir::{HttpMethod, OperationRecord};
use crate::parse::direct::{DirectDocument, DirectOperation};

/// Convert one flat-dialect operation into a canonical record.
///
/// Returns `None` when the method is not one of the seven recognized methods.
pub fn adapt_operation(
    op: &DirectOperation,
    schemas: &IndexMap<String, Value>,
) -> Option<OperationRecord> {
    let method: HttpMethod = match op.method.parse() {
        Ok(m) => m,
        Err(e) => {
            debug!("skipping {} {}: {e}", op.method, op.path);
            return None;
        }
    };

    let responses = normalize_responses(
        op.responses
            .iter()
            .map(|(key, resp)| (key.as_str(), resp.as_ref().map(ResponseShape::Direct))),
        schemas,
    );
    let header = OperationHeader {
        operation_id: op.operation_id.as_deref(),
        summary: op.summary.as_deref(),
        description: op.description.as_deref(),
        tags: op.tags.as_deref(),
    };

    Some(build_operation(method, &op.path, header, responses))
}

/// Convert a list of flat-dialect operations, preserving their order.
pub fn adapt_operations(
    ops: &[DirectOperation],
    schemas: &IndexMap<String, Value>,
) -> Vec<OperationRecord> {
    ops.iter()
        .filter_map(|op| adapt_operation(op, schemas))
        .collect()
}

/// Convert a whole flat-dialect document.
pub fn adapt_document(doc: &DirectDocument) -> Vec<OperationRecord> {
    adapt_operations(&doc.operations, &doc.schemas)
}
