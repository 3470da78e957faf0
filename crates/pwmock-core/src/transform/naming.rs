//! Identifier derivation shared by the collector and every generator.
//!
//! Generators never build names themselves, so a route handler, a builder
//! class and a fixture key for the same response always agree.

use crate::ir::{HttpMethod, is_success_status};

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leave the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive an operationId from method + path when the source has none.
///
/// Examples:
/// - `GET /users/{id}` → `getUsersById`
/// - `POST /users/{userId}/posts` → `postUsersByUserIdPosts`
/// - `GET /` → `get`
pub fn synthesize_operation_id(method: HttpMethod, path: &str) -> String {
    let mut name = String::from(method.as_str());
    for seg in path.split('/').filter(|s| !s.is_empty()) {
        match seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(param) => {
                name.push_str("By");
                name.push_str(&capitalize(param));
            }
            None => name.push_str(&capitalize(seg)),
        }
    }
    name
}

/// `mock` + operationId with the first character upper-cased.
///
/// The method does not take part in the name; it is accepted so call sites
/// read the same as the other per-operation helpers.
pub fn method_to_function_name(_method: HttpMethod, operation_id: &str) -> String {
    format!("mock{}", capitalize(operation_id))
}

/// Route handler name for a specific error status.
pub fn error_function_name(operation_id: &str, status_code: u16) -> String {
    format!("mock{}Error{status_code}", capitalize(operation_id))
}

/// Fixture table key: `{op}Response` for 2xx, `{op}Error{status}` otherwise.
pub fn operation_to_fixture_name(operation_id: &str, status_code: u16) -> String {
    let base = lower_first(operation_id);
    if is_success_status(status_code) {
        format!("{base}Response")
    } else {
        format!("{base}Error{status_code}")
    }
}

/// Fluent builder class: `{Op}Mock` for 2xx, `{Op}Error{status}Mock` otherwise.
pub fn builder_class_name(operation_id: &str, status_code: u16) -> String {
    let base = capitalize(operation_id);
    if is_success_status(status_code) {
        format!("{base}Mock")
    } else {
        format!("{base}Error{status_code}Mock")
    }
}

/// MSW handler factory name.
pub fn msw_function_name(operation_id: &str) -> String {
    format!("mswMock{}", capitalize(operation_id))
}

/// Data builder class that produces the static fixture for a schema.
pub fn schema_builder_name(schema_name: &str) -> String {
    format!("{schema_name}Builder")
}

/// Zod schema export for a schema, as emitted by zod plugins (`z` + name).
pub fn zod_schema_name(schema_name: &str) -> String {
    format!("z{schema_name}")
}
