use pwmock_core::ir::HttpMethod;
use pwmock_core::parse;
use pwmock_core::transform::{Dialect, DocumentFormat, SourceDocument, adapt_document};
use serde_json::json;

const DIRECT: &str = include_str!("fixtures/direct-operations.json");

#[test]
fn adapts_flat_operations() {
    let doc = parse::direct_from_json(DIRECT).unwrap();
    let ops = adapt_document(&doc);

    // TRACE is not a recognized method and is dropped.
    assert_eq!(ops.len(), 3);

    let get = &ops[0];
    assert_eq!(get.operation_id, "GetUsers");
    assert_eq!(get.method, HttpMethod::Get);
    assert_eq!(get.path, "/users");
    assert_eq!(get.tags, Some(vec!["users".to_string()]));
    assert_eq!(get.responses.len(), 2);

    let ok = get.responses.iter().find(|r| r.status_code == 200).unwrap();
    assert_eq!(ok.schema_name.as_deref(), Some("User"));
    assert!(ok.is_success());
    assert_eq!(ok.schema, Some(json!({ "type": "object" })));

    let bad = get.responses.iter().find(|r| r.status_code == 400).unwrap();
    assert!(bad.is_error());
    assert_eq!(bad.schema_name, None);
    assert_eq!(bad.schema, Some(json!({ "type": "object" })));
}

#[test]
fn handles_missing_responses() {
    let doc = parse::direct_from_json(DIRECT).unwrap();
    let ops = adapt_document(&doc);
    let create = &ops[1];
    assert_eq!(create.operation_id, "CreateUser");
    assert_eq!(create.method, HttpMethod::Post);
    assert!(create.responses.is_empty());
    assert_eq!(create.tags, None);
}

#[test]
fn non_standard_ref_prefix_and_synthesized_id() {
    let doc = parse::direct_from_json(DIRECT).unwrap();
    let ops = adapt_document(&doc);
    let put = &ops[2];

    assert_eq!(put.operation_id, "putUsersById");
    assert_eq!(put.method, HttpMethod::Put);
    // null body and range key are skipped, default maps to 200
    assert_eq!(put.responses.len(), 1);
    let ok = &put.responses[0];
    assert_eq!(ok.status_code, 200);
    assert_eq!(ok.schema_name.as_deref(), Some("LegacyUser"));
    assert_eq!(ok.schema, Some(json!({ "type": "object", "deprecated": true })));
}

#[test]
fn source_document_dispatches_on_dialect() {
    let source = SourceDocument::parse(Dialect::OpenapiTs, DocumentFormat::Json, DIRECT).unwrap();
    assert_eq!(source.dialect(), Dialect::OpenapiTs);
    assert_eq!(source.collect().len(), 3);

    // The same text is not a valid OpenAPI document.
    assert!(SourceDocument::parse(Dialect::Openapi, DocumentFormat::Json, DIRECT).is_err());
}
