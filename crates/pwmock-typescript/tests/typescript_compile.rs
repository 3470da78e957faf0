use std::fs;
use std::process::Command;

use pwmock_core::CodeGenerator;
use pwmock_core::config::MockConfig;
use pwmock_core::transform::{Dialect, DocumentFormat, SourceDocument};
use pwmock_typescript::TypescriptMockGenerator;

const PETSTORE: &str = include_str!("../../pwmock-core/tests/fixtures/petstore.yaml");

const TYPES_STUB: &str = r#"export type User = { id?: string; name?: string };
export type UserList = { items: User[] };
export type Error = { message?: string };
export type Report = Record<string, unknown>;
"#;

const BUILDERS_STUB: &str = r#"import type * as types from './types.gen';
export class UserBuilder { build(): types.User { return { id: '1', name: 'Ada' }; } }
export class UserListBuilder { build(): types.UserList { return { items: [] }; } }
export class ErrorBuilder { build(): types.Error { return { message: 'boom' }; } }
export class ReportBuilder { build(): types.Report { return {}; } }
"#;

const PLAYWRIGHT_STUB: &str = r#"declare module '@playwright/test' {
  export interface Request { method(): string }
  export interface Route {
    request(): Request;
    fallback(): Promise<void>;
    fulfill(options: { status?: number; json?: unknown }): Promise<void>;
  }
  export interface Page {
    route(url: string | RegExp, handler: (route: Route) => Promise<void>): Promise<void>;
  }
}
"#;

#[test]
#[ignore] // Requires Node.js + TypeScript installed
fn generated_mocks_compile() {
    let operations = SourceDocument::parse(Dialect::Openapi, DocumentFormat::Yaml, PETSTORE)
        .unwrap()
        .collect();
    let files = TypescriptMockGenerator
        .generate(&operations, &MockConfig::default())
        .unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let mocks = root.join("playwright-mocks");
    fs::create_dir_all(&mocks).unwrap();

    for file in &files {
        fs::write(mocks.join(&file.path), &file.content).unwrap();
    }
    fs::write(root.join("types.gen.ts"), TYPES_STUB).unwrap();
    fs::write(root.join("builders.gen.ts"), BUILDERS_STUB).unwrap();
    fs::write(root.join("playwright.d.ts"), PLAYWRIGHT_STUB).unwrap();

    let tsconfig = r#"{
  "compilerOptions": {
    "strict": true,
    "target": "ES2022",
    "module": "ES2022",
    "moduleResolution": "bundler",
    "lib": ["ES2022", "DOM"],
    "noEmit": true,
    "skipLibCheck": true
  },
  "include": ["*.ts", "playwright-mocks/*.ts"]
}"#;
    fs::write(root.join("tsconfig.json"), tsconfig).unwrap();

    let output = Command::new("npx")
        .args(["tsc", "--noEmit"])
        .current_dir(root)
        .output()
        .expect("failed to run tsc");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "TypeScript compilation failed:\nstdout: {}\nstderr: {}",
            stdout, stderr
        );
    }
}
