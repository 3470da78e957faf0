use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::debug;

use pwmock_core::config::{self, CONFIG_FILE_NAME, MockConfig};
use pwmock_core::ir::OperationRecord;
use pwmock_core::transform::{Dialect, DocumentFormat, PathPattern, SourceDocument};
use pwmock_core::{CodeGenerator, GeneratedFile};
use pwmock_typescript::TypescriptMockGenerator;

#[derive(Parser)]
#[command(
    name = "pwmock",
    about = "Playwright mock generator for OpenAPI 3.x",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate mock modules from an OpenAPI document
    Generate {
        /// Path to the input document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a document and report what would be mocked
    Validate {
        /// Path to the input document
        #[arg(short, long)]
        input: PathBuf,

        /// Input dialect (defaults to the config file, then `openapi`)
        #[arg(long)]
        dialect: Option<DialectArg>,
    },

    /// Print the canonical operation records of a document
    Inspect {
        /// Path to the input document
        #[arg(short, long)]
        input: PathBuf,

        /// Input dialect (defaults to the config file, then `openapi`)
        #[arg(long)]
        dialect: Option<DialectArg>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Show the glob, regex and parameters derived from a path template
    Pattern {
        /// OpenAPI path template, e.g. `/users/{id}`
        path: String,

        /// Glob prefix for the route pattern
        #[arg(long, default_value = "**/api/**")]
        base: String,

        /// Match this URL against the pattern and print the bindings
        #[arg(long)]
        url: Option<String>,
    },

    /// Initialize a new pwmock configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Openapi,
    OpenapiTs,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Openapi => Dialect::Openapi,
            DialectArg::OpenapiTs => Dialect::OpenapiTs,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => cmd_generate(input, output),

        Commands::Validate { input, dialect } => cmd_validate(input, dialect),

        Commands::Inspect {
            input,
            dialect,
            format,
        } => cmd_inspect(input, dialect, format),

        Commands::Pattern { path, base, url } => cmd_pattern(&path, &base, url.as_deref()),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "pwmock", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<MockConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let cfg = config::load_config(&config_path)?;
    if cfg.is_none() {
        debug!("no {CONFIG_FILE_NAME} in the current directory, using defaults");
    }
    Ok(cfg)
}

/// Read and parse `path`; the extension picks JSON or YAML.
fn load_document(path: &Path, dialect: Dialect) -> Result<SourceDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let format = DocumentFormat::from_extension(path.extension().and_then(|e| e.to_str()));
    SourceDocument::parse(dialect, format, &content)
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn resolve_dialect(flag: Option<DialectArg>) -> Result<Dialect> {
    match flag {
        Some(arg) => Ok(arg.into()),
        None => Ok(try_load_config()?.map(|c| c.dialect).unwrap_or_default()),
    }
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Generate the "do not edit" README.
fn readme_content() -> &'static str {
    r#"# Generated Mocks - Do Not Edit

This directory is **auto-generated** by pwmock.
Any manual changes will be overwritten the next time `pwmock generate` is run.

To regenerate, run:
```
pwmock generate
```

To customize the generated output, edit your `.pwmock.yaml` configuration file.
"#
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let operations = load_document(&input, cfg.dialect)?.collect();
    eprintln!(
        "Generating mocks for {} operations → {}",
        operations.len(),
        output_dir.display()
    );

    let files = TypescriptMockGenerator.generate(&operations, &cfg)?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    let readme_path = output_dir.join("README.md");
    fs::write(&readme_path, readme_content())
        .with_context(|| format!("failed to write {}", readme_path.display()))?;
    eprintln!("  wrote {}", readme_path.display());

    eprintln!(
        "Generated {} files in {}",
        files.len() + 1, // +1 for README
        output_dir.display()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf, dialect: Option<DialectArg>) -> Result<()> {
    let document = load_document(&input, resolve_dialect(dialect)?)?;

    match &document {
        SourceDocument::OpenApi(doc) => {
            let title = doc.info.as_ref().map_or("untitled", |i| i.title.as_str());
            eprintln!("Valid OpenAPI {} document: {}", doc.openapi, title);
            eprintln!("  Paths: {}", doc.paths.len());
            eprintln!("  Schemas: {}", doc.schemas().len());
        }
        SourceDocument::Direct(doc) => {
            eprintln!("Valid operation list");
            eprintln!("  Entries: {}", doc.operations.len());
            eprintln!("  Schemas: {}", doc.schemas.len());
        }
    }

    let operations = document.collect();
    let mocked = operations
        .iter()
        .flat_map(|op| &op.responses)
        .filter(|r| r.schema_name.is_some())
        .count();
    eprintln!("  Operations: {}", operations.len());
    eprintln!("  Responses with a schema: {mocked}");

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, dialect: Option<DialectArg>, format: InspectFormat) -> Result<()> {
    let operations = load_document(&input, resolve_dialect(dialect)?)?.collect();
    let summary = build_inspect_summary(&operations);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(operations: &[OperationRecord]) -> serde_json::Value {
    let operations: Vec<serde_json::Value> = operations
        .iter()
        .map(|op| {
            let responses: Vec<serde_json::Value> = op
                .responses
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "statusCode": r.status_code,
                        "description": r.description,
                        "schemaName": r.schema_name,
                        "schema": r.schema,
                        "isSuccess": r.is_success(),
                        "isError": r.is_error(),
                    })
                })
                .collect();
            serde_json::json!({
                "operationId": op.operation_id,
                "method": op.method.as_str(),
                "path": op.path,
                "summary": op.summary,
                "description": op.description,
                "tags": op.tags,
                "responses": responses,
            })
        })
        .collect();

    serde_json::json!({ "operations": operations })
}

fn cmd_pattern(path: &str, base: &str, url: Option<&str>) -> Result<()> {
    let pattern = PathPattern::new(path, base);
    println!("glob:   {}", pattern.glob);
    println!("regex:  {}", pattern.regex.as_str());
    println!("params: {}", pattern.params.join(", "));

    if let Some(url) = url {
        match pattern.extract(url) {
            Some(bindings) => {
                println!("match:  yes");
                for (name, value) in bindings {
                    println!("  {name} = {value}");
                }
            }
            None => println!("match:  no"),
        }
    }
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwmock_core::ir::{HttpMethod, ResponseRecord};

    #[test]
    fn test_write_files_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            GeneratedFile {
                path: "fixtures.ts".to_string(),
                content: "export const fixtures = {} as const;\n".to_string(),
            },
            GeneratedFile {
                path: "nested/index.ts".to_string(),
                content: "export * from './fixtures';\n".to_string(),
            },
        ];
        write_files(dir.path(), &files).unwrap();

        let fixtures = fs::read_to_string(dir.path().join("fixtures.ts")).unwrap();
        assert_eq!(fixtures, "export const fixtures = {} as const;\n");
        assert!(dir.path().join("nested/index.ts").exists());
    }

    #[test]
    fn test_load_document_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.json");
        fs::write(
            &path,
            r#"{"openapi":"3.0.3","paths":{"/ping":{"get":{"responses":{"204":{"description":"ok"}}}}}}"#,
        )
        .unwrap();

        let operations = load_document(&path, Dialect::Openapi).unwrap().collect();
        assert_eq!(operations.len(), 1);
        assert_eq!(operations[0].operation_id, "getPing");
        assert_eq!(operations[0].responses[0].status_code, 204);
    }

    #[test]
    fn test_load_document_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_document(&path, Dialect::Openapi).unwrap_err();
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_inspect_summary_flags() {
        let operations = vec![OperationRecord {
            operation_id: "getUsers".to_string(),
            method: HttpMethod::Get,
            path: "/users".to_string(),
            summary: None,
            description: None,
            tags: Some(vec!["users".to_string()]),
            responses: vec![
                ResponseRecord {
                    status_code: 200,
                    description: Some("ok".to_string()),
                    schema_name: Some("UserList".to_string()),
                    schema: None,
                },
                ResponseRecord {
                    status_code: 404,
                    description: None,
                    schema_name: None,
                    schema: None,
                },
            ],
        }];
        let summary = build_inspect_summary(&operations);
        let op = &summary["operations"][0];
        assert_eq!(op["operationId"], "getUsers");
        assert_eq!(op["method"], "get");
        assert_eq!(op["tags"][0], "users");
        assert_eq!(op["responses"][0]["isSuccess"], true);
        assert_eq!(op["responses"][0]["schemaName"], "UserList");
        assert_eq!(op["responses"][1]["isError"], true);
        assert_eq!(op["responses"][1]["isSuccess"], false);
    }
}
