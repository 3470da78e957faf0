pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

pub use error::GeneratorError;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from the canonical operation list.
pub trait CodeGenerator {
    fn generate(
        &self,
        operations: &[ir::OperationRecord],
        config: &config::MockConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError>;
}
