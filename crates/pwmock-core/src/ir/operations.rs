use std::fmt;
use std::str::FromStr;

/// HTTP method recognized in a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Every method in the order operations are collected within a path.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a method token is not one of the seven recognized methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown HTTP method: {}", self.0)
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// One operation (method + path pair) in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub operation_id: String,
    pub method: HttpMethod,
    /// Raw path template, placeholders included.
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// `None` when the source declared no tags, `Some(vec![])` when it declared an empty list.
    pub tags: Option<Vec<String>>,
    /// Sorted ascending by status code, one entry per status.
    pub responses: Vec<ResponseRecord>,
}

impl OperationRecord {
    /// Responses in the 2xx range, in status order.
    pub fn success_responses(&self) -> impl Iterator<Item = &ResponseRecord> {
        self.responses.iter().filter(|r| r.is_success())
    }

    /// Responses with status 400 or above, in status order.
    pub fn error_responses(&self) -> impl Iterator<Item = &ResponseRecord> {
        self.responses.iter().filter(|r| r.is_error())
    }

    /// The lowest 2xx response, used as the default mock.
    pub fn primary_success(&self) -> Option<&ResponseRecord> {
        self.success_responses().next()
    }
}

/// One declared response status of an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRecord {
    pub status_code: u16,
    pub description: Option<String>,
    /// Bare name of the referenced schema (from `$ref` or inline `title`).
    pub schema_name: Option<String>,
    /// Resolved schema from the schema table, else the inline schema.
    pub schema: Option<serde_json::Value>,
}

impl ResponseRecord {
    pub fn is_success(&self) -> bool {
        is_success_status(self.status_code)
    }

    pub fn is_error(&self) -> bool {
        is_error_status(self.status_code)
    }
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

pub fn is_error_status(status: u16) -> bool {
    status >= 400
}
