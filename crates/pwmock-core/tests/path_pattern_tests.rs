use pwmock_core::transform::{
    PathPattern, build_path_pattern, extract_path_params, path_to_glob, path_to_regex,
    path_to_regex_source, query_tolerant,
};

const SHAPES: &[&str] = &[
    "/",
    "/api/users",
    "/api/users/{id}",
    "/api/users/{userId}/posts/{postId}",
    "/files/{name}.{ext}",
    "/items/{id}/{id}",
    "/v1.2/things+stuff/{thing_id}",
    "/broken/{unterminated",
    "/empty/{}",
    "/nested/{a{b}",
    "/reports/{reportId}.json",
];

fn glob_wildcards(glob: &str, base: &str) -> usize {
    glob[base.len()..].matches('*').count()
}

#[test]
fn params_glob_and_regex_agree_for_every_shape() {
    for base in ["**", "**/api/**", "https://api.example.com"] {
        for path in SHAPES {
            let pattern = build_path_pattern(path, base);
            let groups = pattern.regex.captures_len() - 1;
            assert_eq!(
                pattern.params.len(),
                glob_wildcards(&pattern.glob, base),
                "glob wildcards for {path} with base {base}"
            );
            assert_eq!(pattern.params.len(), groups, "capture groups for {path}");
            assert_eq!(pattern.params, extract_path_params(path));
        }
    }
}

#[test]
fn glob_converts_simple_path() {
    assert_eq!(path_to_glob("/api/users", "**"), "**/api/users");
}

#[test]
fn glob_converts_single_param() {
    assert_eq!(path_to_glob("/api/users/{id}", "**"), "**/api/users/*");
}

#[test]
fn glob_converts_multiple_params() {
    assert_eq!(
        path_to_glob("/api/users/{userId}/posts/{postId}", "**"),
        "**/api/users/*/posts/*"
    );
}

#[test]
fn glob_uses_custom_base() {
    assert_eq!(
        path_to_glob("/users", "https://api.example.com"),
        "https://api.example.com/users"
    );
    assert_eq!(path_to_glob("/users/{id}", "**/api/**"), "**/api/**/users/*");
}

#[test]
fn glob_handles_root_path() {
    assert_eq!(path_to_glob("/", "**"), "**/");
}

#[test]
fn glob_keeps_malformed_braces_literal() {
    assert_eq!(path_to_glob("/broken/{id", "**"), "**/broken/{id");
    assert_eq!(path_to_glob("/empty/{}", "**"), "**/empty/{}");
}

#[test]
fn regex_matches_simple_path_as_suffix() {
    let regex = path_to_regex("/api/users");
    assert!(regex.is_match("https://example.com/api/users"));
    assert!(regex.is_match("https://host/prefix/api/users"));
    assert!(!regex.is_match("https://example.com/api/posts"));
    assert!(!regex.is_match("https://example.com/api/users/extra"));
}

#[test]
fn regex_matches_path_with_params() {
    let regex = path_to_regex("/api/users/{id}");
    assert!(regex.is_match("https://example.com/api/users/123"));
    assert!(regex.is_match("https://example.com/api/users/abc-def"));
    assert!(!regex.is_match("https://example.com/api/users"));
    assert!(!regex.is_match("https://example.com/api/users/1/2"));
}

#[test]
fn regex_escapes_metacharacters() {
    let regex = path_to_regex("/api/items.json");
    assert!(regex.is_match("https://example.com/api/items.json"));
    assert!(!regex.is_match("https://example.com/api/itemsXjson"));

    let regex = path_to_regex("/v1.2/things+stuff/{id}");
    assert!(regex.is_match("http://h/v1.2/things+stuff/7"));
    assert!(!regex.is_match("http://h/v1x2/thingsssstuff/7"));
}

#[test]
fn regex_source_shape() {
    assert_eq!(
        path_to_regex_source("/users/{id}/posts"),
        r"/users/([^/]+)/posts$"
    );
    assert_eq!(path_to_regex_source("/a.b"), r"/a\.b$");
}

#[test]
fn regex_treats_unterminated_brace_literally() {
    let regex = path_to_regex("/broken/{id");
    assert!(regex.is_match("https://h/broken/{id"));
    assert!(!regex.is_match("https://h/broken/42"));
}

#[test]
fn query_tolerant_regex_accepts_query_string() {
    let source = query_tolerant(&path_to_regex_source("/api/users/{id}"));
    let regex = regex::Regex::new(&source).unwrap();
    assert!(regex.is_match("https://h/api/users/1"));
    assert!(regex.is_match("https://h/api/users/1?include=posts"));
    assert!(!regex.is_match("https://h/api/users/1/posts"));
}

#[test]
fn params_extracted_in_order_with_duplicates() {
    assert_eq!(extract_path_params("/users/{id}"), vec!["id"]);
    assert_eq!(
        extract_path_params("/users/{userId}/posts/{postId}"),
        vec!["userId", "postId"]
    );
    assert_eq!(extract_path_params("/items/{id}/{id}"), vec!["id", "id"]);
    assert!(extract_path_params("/users").is_empty());
}

#[test]
fn path_pattern_aggregate() {
    let result = PathPattern::new("/api/users/{id}", "**");
    assert_eq!(result.glob, "**/api/users/*");
    assert!(result.regex.is_match("/api/users/123"));
    assert_eq!(result.params, vec!["id"]);

    let result = PathPattern::new("/users", "https://api.example.com");
    assert_eq!(result.glob, "https://api.example.com/users");
}

#[test]
fn pattern_snapshot() {
    let pattern = build_path_pattern("/orgs/{org}/repos/{repo}.git", "**/api/**");
    let rendered = format!(
        "glob: {}\nregex: {}\nparams: {}",
        pattern.glob,
        pattern.regex.as_str(),
        pattern.params.join(", ")
    );
    insta::assert_snapshot!(rendered, @r"
    glob: **/api/**/orgs/*/repos/*.git
    regex: /orgs/([^/]+)/repos/([^/]+)\.git$
    params: org, repo
    ");
}
