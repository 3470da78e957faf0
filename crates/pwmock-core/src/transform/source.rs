use serde::Deserialize;

use super::adapter::adapt_document;
use super::collector::collect_document;
use crate::error::ParseError;
use crate::ir::OperationRecord;
use crate::parse::{self, direct::DirectDocument, spec::OpenApiDocument};

/// Which input shape a document uses. Chosen by the caller, never sniffed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// OpenAPI `paths` with content-type negotiated response schemas.
    #[default]
    Openapi,
    /// Flat operation list with a schema directly on each response.
    OpenapiTs,
}

/// Text encoding of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `json` extension means JSON, anything else is read as YAML.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some(e) if e.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// A parsed input document in one of the supported dialects.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceDocument {
    OpenApi(OpenApiDocument),
    Direct(DirectDocument),
}

impl SourceDocument {
    pub fn parse(dialect: Dialect, format: DocumentFormat, input: &str) -> Result<Self, ParseError> {
        Ok(match (dialect, format) {
            (Dialect::Openapi, DocumentFormat::Yaml) => Self::OpenApi(parse::from_yaml(input)?),
            (Dialect::Openapi, DocumentFormat::Json) => Self::OpenApi(parse::from_json(input)?),
            (Dialect::OpenapiTs, DocumentFormat::Yaml) => {
                Self::Direct(parse::direct_from_yaml(input)?)
            }
            (Dialect::OpenapiTs, DocumentFormat::Json) => {
                Self::Direct(parse::direct_from_json(input)?)
            }
        })
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Self::OpenApi(_) => Dialect::Openapi,
            Self::Direct(_) => Dialect::OpenapiTs,
        }
    }

    /// Canonical operation list for this document.
    pub fn collect(&self) -> Vec<OperationRecord> {
        match self {
            Self::OpenApi(doc) => collect_document(doc),
            Self::Direct(doc) => adapt_document(doc),
        }
    }
}
