use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::transform::Dialect;

/// Project configuration loaded from `.pwmock.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub input: String,
    pub dialect: Dialect,
    pub output: String,
    pub generate_builders: bool,
    pub generate_error_mocks: bool,
    /// Prepended verbatim to every route glob.
    pub base_url_pattern: String,
    pub mock_strategy: MockStrategy,
    pub generate_msw: bool,
    /// Module specifier of the generated data-model types.
    pub types_import: String,
    /// Module specifier exporting `{Schema}Builder` classes (static strategy).
    pub builders_import: String,
    /// Module specifier exporting `z{Schema}` schemas (zod strategy).
    pub zod_import: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            dialect: Dialect::Openapi,
            output: "playwright-mocks".to_string(),
            generate_builders: true,
            generate_error_mocks: true,
            base_url_pattern: "**/api/**".to_string(),
            mock_strategy: MockStrategy::Static,
            generate_msw: false,
            types_import: "../types.gen".to_string(),
            builders_import: "../builders.gen".to_string(),
            zod_import: "../zod.gen".to_string(),
        }
    }
}

impl MockConfig {
    /// Collect every problem with the config; empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let required = [
            ("output", &self.output),
            ("base_url_pattern", &self.base_url_pattern),
            ("types_import", &self.types_import),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(format!("{field} must not be empty"));
            }
        }

        let strategy_import = match self.mock_strategy {
            MockStrategy::Static => ("builders_import", &self.builders_import),
            MockStrategy::Zod => ("zod_import", &self.zod_import),
        };
        if strategy_import.1.trim().is_empty() {
            errors.push(format!(
                "{} must not be empty for mock_strategy {}",
                strategy_import.0,
                self.mock_strategy.as_str()
            ));
        }

        errors
    }

    /// Validate and turn problems into a single error.
    pub fn ensure_valid(&self) -> Result<(), ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

/// How fixture data is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MockStrategy {
    /// `new {Schema}Builder().build()` from the data builders module.
    #[default]
    Static,
    /// `generateMock(z{Schema})` from zod schemas.
    Zod,
}

impl MockStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MockStrategy::Static => "static",
            MockStrategy::Zod => "zod",
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".pwmock.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<MockConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: MockConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# pwmock configuration
input: openapi.yaml
dialect: openapi            # openapi | openapi_ts
output: playwright-mocks

base_url_pattern: "**/api/**"
generate_builders: true
generate_error_mocks: true
generate_msw: false

mock_strategy: static       # static | zod
types_import: ../types.gen
builders_import: ../builders.gen
# zod_import: ../zod.gen
"#
}
