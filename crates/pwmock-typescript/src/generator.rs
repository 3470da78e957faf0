use log::debug;
use pwmock_core::config::MockConfig;
use pwmock_core::ir::OperationRecord;
use pwmock_core::{CodeGenerator, GeneratedFile, GeneratorError};

use crate::emitters;

/// Playwright (and optionally MSW) mock generator for TypeScript test suites.
pub struct TypescriptMockGenerator;

impl CodeGenerator for TypescriptMockGenerator {
    fn generate(
        &self,
        operations: &[OperationRecord],
        config: &MockConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        config.ensure_valid()?;

        let mut modules = vec![
            ("fixtures", emitters::fixtures::emit_fixtures(operations, config)?),
            ("routes", emitters::routes::emit_routes(operations, config)?),
        ];
        if config.generate_builders {
            modules.push(("builders", emitters::builders::emit_builders(operations, config)?));
        }
        if config.generate_msw {
            modules.push(("msw", emitters::msw::emit_msw(operations, config)?));
        }

        let names: Vec<&str> = modules.iter().map(|(name, _)| *name).collect();
        let index = emitters::index::emit_index(&names)?;
        debug!("generated modules {names:?} for {} operations", operations.len());

        let mut files: Vec<GeneratedFile> = modules
            .into_iter()
            .map(|(name, content)| GeneratedFile {
                path: format!("{name}.ts"),
                content,
            })
            .collect();
        files.push(GeneratedFile {
            path: "index.ts".to_string(),
            content: index,
        });
        Ok(files)
    }
}
