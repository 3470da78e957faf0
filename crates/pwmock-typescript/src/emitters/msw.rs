use minijinja::context;
use pwmock_core::GeneratorError;
use pwmock_core::config::MockConfig;
use pwmock_core::ir::OperationRecord;
use pwmock_core::transform::naming::{msw_function_name, operation_to_fixture_name};
use pwmock_core::transform::path_to_glob;

use super::{NameRegistry, render};

const NO_CONTENT: u16 = 204;

/// Emit `msw.ts`: an `http.<method>` handler factory per operation with a
/// success response.
pub fn emit_msw(
    operations: &[OperationRecord],
    config: &MockConfig,
) -> Result<String, GeneratorError> {
    let mut names = NameRegistry::default();
    let mut handlers = Vec::new();
    let mut uses_fixtures = false;

    for op in operations {
        let Some(success) = op.primary_success() else {
            continue;
        };
        let function_name = msw_function_name(&op.operation_id);
        if !names.claim(&function_name, "msw handler") {
            continue;
        }
        let glob = path_to_glob(&op.path, &config.base_url_pattern);

        let schema_name = success
            .schema_name
            .as_deref()
            .filter(|_| success.status_code != NO_CONTENT);
        let handler = match schema_name {
            Some(schema_name) => {
                uses_fixtures = true;
                context! {
                    kind => "fixture",
                    function_name => function_name,
                    method => op.method.as_str(),
                    glob => glob,
                    status => success.status_code,
                    schema_name => schema_name,
                    fixture_name => operation_to_fixture_name(&op.operation_id, success.status_code),
                }
            }
            None => context! {
                kind => "empty",
                function_name => function_name,
                method => op.method.as_str(),
                glob => glob,
                status => success.status_code,
            },
        };
        handlers.push(handler);
    }

    render(
        "msw.ts.j2",
        include_str!("../../templates/msw.ts.j2"),
        context! {
            handlers => handlers,
            uses_fixtures => uses_fixtures,
            types_import => config.types_import.clone(),
        },
    )
}
