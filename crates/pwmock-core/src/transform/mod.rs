pub mod adapter;
pub mod collector;
pub mod naming;
pub mod normalize;
pub mod path_pattern;
pub mod schema_name;
pub mod source;

pub use adapter::{adapt_document, adapt_operation, adapt_operations};
pub use collector::{collect_document, collect_operations};
pub use path_pattern::{
    PathPattern, build_path_pattern, extract_path_params, path_to_glob, path_to_regex,
    path_to_regex_source, query_tolerant,
};
pub use source::{Dialect, DocumentFormat, SourceDocument};
