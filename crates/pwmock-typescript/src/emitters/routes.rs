use minijinja::context;
use pwmock_core::GeneratorError;
use pwmock_core::config::MockConfig;
use pwmock_core::ir::OperationRecord;
use pwmock_core::transform::naming::{
    error_function_name, method_to_function_name, operation_to_fixture_name,
};
use pwmock_core::transform::path_to_glob;

use super::{NameRegistry, render};

/// Emit `routes.ts`: one `page.route` helper per operation, plus one per
/// error response when error mocks are enabled.
pub fn emit_routes(
    operations: &[OperationRecord],
    config: &MockConfig,
) -> Result<String, GeneratorError> {
    let mut names = NameRegistry::default();
    let handlers: Vec<minijinja::Value> = operations
        .iter()
        .flat_map(|op| build_handler_contexts(op, config))
        .filter(|(name, _)| names.claim(name, "route handler"))
        .map(|(_, ctx)| ctx)
        .collect();

    let uses_fixtures = handlers.iter().any(|h| {
        h.get_attr("kind")
            .ok()
            .is_some_and(|v| v.as_str() == Some("fixture"))
    });

    render(
        "routes.ts.j2",
        include_str!("../../templates/routes.ts.j2"),
        context! {
            handlers => handlers,
            uses_fixtures => uses_fixtures,
            types_import => config.types_import.clone(),
        },
    )
}

fn build_handler_contexts(
    op: &OperationRecord,
    config: &MockConfig,
) -> Vec<(String, minijinja::Value)> {
    let function_name = method_to_function_name(op.method, &op.operation_id);
    let glob = path_to_glob(&op.path, &config.base_url_pattern);
    let method = op.method.as_str();

    let primary = op.primary_success();
    let Some((status, schema_name)) =
        primary.and_then(|r| r.schema_name.as_deref().map(|name| (r.status_code, name)))
    else {
        let status = primary.map_or(200, |r| r.status_code);
        let ctx = context! {
            kind => "empty",
            function_name => function_name.clone(),
            method => method,
            glob => glob,
            status => status,
        };
        return vec![(function_name, ctx)];
    };

    let mut results = vec![(
        function_name.clone(),
        context! {
            kind => "fixture",
            function_name => function_name,
            method => method,
            glob => glob.clone(),
            status => status,
            schema_name => schema_name,
            fixture_name => operation_to_fixture_name(&op.operation_id, status),
        },
    )];

    if config.generate_error_mocks {
        for resp in op.error_responses() {
            let Some(ref schema_name) = resp.schema_name else {
                continue;
            };
            let name = error_function_name(&op.operation_id, resp.status_code);
            results.push((
                name.clone(),
                context! {
                    kind => "fixture",
                    function_name => name,
                    method => method,
                    glob => glob.clone(),
                    status => resp.status_code,
                    schema_name => schema_name,
                    fixture_name => operation_to_fixture_name(&op.operation_id, resp.status_code),
                },
            ));
        }
    }

    results
}
