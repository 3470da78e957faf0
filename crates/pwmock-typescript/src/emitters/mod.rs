pub mod builders;
pub mod fixtures;
pub mod index;
pub mod msw;
pub mod routes;

use std::collections::HashSet;

use log::warn;
use minijinja::Environment;
use pwmock_core::GeneratorError;
use pwmock_core::config::MockConfig;
use pwmock_core::ir::{OperationRecord, ResponseRecord};

/// Escape a value for use inside a single-quoted TypeScript string.
fn escape_quote(value: String) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render one template with the settings every emitter shares.
pub(crate) fn render(
    name: &'static str,
    source: &'static str,
    ctx: minijinja::Value,
) -> Result<String, GeneratorError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("escape_quote", escape_quote);
    env.add_template(name, source).map_err(template_error)?;
    let tmpl = env.get_template(name).map_err(template_error)?;
    tmpl.render(ctx).map_err(template_error)
}

fn template_error(e: minijinja::Error) -> GeneratorError {
    GeneratorError::Template(e.to_string())
}

/// Responses that get a fixture: those with a schema name, minus error
/// responses when error mocks are disabled.
pub(crate) fn mocked_responses<'a>(
    op: &'a OperationRecord,
    config: &MockConfig,
) -> impl Iterator<Item = (&'a ResponseRecord, &'a str)> {
    let include_errors = config.generate_error_mocks;
    op.responses.iter().filter_map(move |r| {
        if r.is_error() && !include_errors {
            return None;
        }
        r.schema_name.as_deref().map(|name| (r, name))
    })
}

/// Tracks generated identifiers so each is emitted once; later duplicates
/// (two 2xx responses, repeated operationIds) are dropped with a warning.
#[derive(Debug, Default)]
pub(crate) struct NameRegistry {
    seen: HashSet<String>,
}

impl NameRegistry {
    pub(crate) fn claim(&mut self, name: &str, kind: &str) -> bool {
        if self.seen.insert(name.to_string()) {
            true
        } else {
            warn!("duplicate {kind} {name}, keeping the first definition");
            false
        }
    }
}
