use minijinja::context;
use pwmock_core::GeneratorError;
use pwmock_core::config::MockConfig;
use pwmock_core::ir::OperationRecord;
use pwmock_core::transform::naming::{builder_class_name, operation_to_fixture_name};
use pwmock_core::transform::{path_to_glob, path_to_regex_source, query_tolerant};

use super::{NameRegistry, mocked_responses, render};

/// Emit `builders.ts`: one fluent mock class per fixture-backed response.
pub fn emit_builders(
    operations: &[OperationRecord],
    config: &MockConfig,
) -> Result<String, GeneratorError> {
    let mut names = NameRegistry::default();
    let mut builders = Vec::new();

    for op in operations {
        let glob = path_to_glob(&op.path, &config.base_url_pattern);
        let pattern = regex_literal_body(&op.path);

        for (resp, schema_name) in mocked_responses(op, config) {
            let class_name = builder_class_name(&op.operation_id, resp.status_code);
            if !names.claim(&class_name, "builder class") {
                continue;
            }
            builders.push(context! {
                class_name => class_name,
                schema_name => schema_name,
                fixture_name => operation_to_fixture_name(&op.operation_id, resp.status_code),
                method => op.method.as_str(),
                glob => glob.clone(),
                pattern => pattern.clone(),
                status => resp.status_code,
            });
        }
    }

    render(
        "builders.ts.j2",
        include_str!("../../templates/builders.ts.j2"),
        context! {
            builders => builders,
            types_import => config.types_import.clone(),
        },
    )
}

/// Body of a JavaScript regex literal for `path`, tolerant of a query string.
fn regex_literal_body(path: &str) -> String {
    query_tolerant(&path_to_regex_source(path)).replace('/', "\\/")
}
