use minijinja::context;
use pwmock_core::GeneratorError;

use super::render;

/// Emit `index.ts` re-exporting each module name (without extension).
pub fn emit_index(modules: &[&str]) -> Result<String, GeneratorError> {
    render(
        "index.ts.j2",
        include_str!("../../templates/index.ts.j2"),
        context! { modules => modules },
    )
}
