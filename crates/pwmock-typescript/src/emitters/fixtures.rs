use std::collections::BTreeSet;

use minijinja::context;
use pwmock_core::GeneratorError;
use pwmock_core::config::{MockConfig, MockStrategy};
use pwmock_core::ir::OperationRecord;
use pwmock_core::transform::naming::{
    operation_to_fixture_name, schema_builder_name, zod_schema_name,
};

use super::{NameRegistry, mocked_responses, render};

/// Emit `fixtures.ts`: the shared `fixtures` table and its `Fixtures` interface.
pub fn emit_fixtures(
    operations: &[OperationRecord],
    config: &MockConfig,
) -> Result<String, GeneratorError> {
    let mut names = NameRegistry::default();
    let mut builder_imports = BTreeSet::new();
    let mut entries = Vec::new();

    for op in operations {
        for (resp, schema_name) in mocked_responses(op, config) {
            let name = operation_to_fixture_name(&op.operation_id, resp.status_code);
            if !names.claim(&name, "fixture") {
                continue;
            }
            let value = match config.mock_strategy {
                MockStrategy::Static => {
                    let builder = schema_builder_name(schema_name);
                    let value = format!("new {builder}().build()");
                    builder_imports.insert(builder);
                    value
                }
                MockStrategy::Zod => {
                    format!("generateMock(schemas.{})", zod_schema_name(schema_name))
                }
            };
            entries.push(context! {
                name => name,
                value => value,
                schema_name => schema_name,
            });
        }
    }

    render(
        "fixtures.ts.j2",
        include_str!("../../templates/fixtures.ts.j2"),
        context! {
            entries => entries,
            strategy => config.mock_strategy.as_str(),
            builder_imports => builder_imports,
            types_import => config.types_import.clone(),
            builders_import => config.builders_import.clone(),
            zod_import => config.zod_import.clone(),
        },
    )
}
