pub mod components;
pub mod direct;
pub mod media_type;
pub mod operation;
pub mod response;
pub mod spec;

use crate::error::ParseError;
use direct::DirectDocument;
use spec::OpenApiDocument;

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiDocument, ParseError> {
    let doc: OpenApiDocument = serde_yaml_ng::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiDocument, ParseError> {
    let doc: OpenApiDocument = serde_json::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

/// Parse a flat operation list (inline-schema dialect) from YAML.
pub fn direct_from_yaml(input: &str) -> Result<DirectDocument, ParseError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Parse a flat operation list (inline-schema dialect) from JSON.
pub fn direct_from_json(input: &str) -> Result<DirectDocument, ParseError> {
    Ok(serde_json::from_str(input)?)
}

fn validate_version(doc: &OpenApiDocument) -> Result<(), ParseError> {
    if !doc.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(doc.openapi.clone()));
    }
    Ok(())
}
