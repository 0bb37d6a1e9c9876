//! End-to-end scaffolds with the real adapters against a small template tree.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use trellis_adapters::{
    DotenvWriter, LocalFilesystem, LocalTemplateCopier, PackageJsonEditor, TemplateCatalog,
};
use trellis_core::application::{ComposeService, MissingTemplatePolicy, ScaffoldService};
use trellis_core::domain::{
    Api, Auth, Backend, Database, DbSetup, Example, Frontend, Orm, ProjectConfig, Runtime,
    ServerDeploy,
};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn template_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "base/package.json.hbs", r#"{"name": "{{projectName}}"}"#);
    write(root, "base/_gitignore", "node_modules\n");
    write(
        root,
        "frontend/react/web-base/src/index.ts.hbs",
        "// web for {{projectName}}{{#if (includes addons \"turborepo\")}} with turbo{{/if}}\n",
    );
    write(
        root,
        "backend/server/hono/package.json.hbs",
        r#"{"name": "server", "dependencies": {"hono": "^4.8.2"}}"#,
    );
    write(root, "backend/server/hono/src/index.ts", "export {};\n");
    write(root, "backend/server/server-base/src/shared.ts", "// base\n");
    write(root, "db/drizzle/sqlite/src/shared.ts", "// drizzle\n");
    write(root, "examples/todo/server/drizzle/sqlite/src/shared.ts", "// example\n");
    write(root, "examples/todo/server/drizzle/sqlite/src/todo.ts", "// todo\n");
    dir
}

fn service(templates: &Path, policy: MissingTemplatePolicy) -> ScaffoldService {
    let composer = ComposeService::new(
        Box::new(LocalTemplateCopier::new(templates)),
        Box::new(LocalFilesystem::new()),
    )
    .with_missing_policy(policy);
    ScaffoldService::new(
        composer,
        Box::new(DotenvWriter::new()),
        Box::new(PackageJsonEditor::new()),
    )
}

fn todo_app() -> ProjectConfig {
    ProjectConfig::builder()
        .project_name("todo-app")
        .frontend([Frontend::TanstackRouter])
        .backend(Backend::Hono)
        .database(Database::Sqlite)
        .orm(Orm::Drizzle)
        .auth(Auth::None)
        .api(Api::Trpc)
        .addons([trellis_core::domain::Addon::Turborepo])
        .examples([Example::Todo])
        .build()
        .unwrap()
}

#[test]
fn scaffolds_available_overlays_in_order() {
    let templates = template_root();
    let out = TempDir::new().unwrap();
    let project = out.path().join("todo-app");

    let report = service(templates.path(), MissingTemplatePolicy::Skip)
        .scaffold(todo_app(), &project)
        .unwrap();

    assert_eq!(
        fs::read_to_string(project.join("package.json")).unwrap(),
        r#"{"name": "todo-app"}"#
    );
    assert!(project.join(".gitignore").is_file());
    assert_eq!(
        fs::read_to_string(project.join("apps/web/src/index.ts")).unwrap(),
        "// web for todo-app with turbo\n"
    );
    // db overlay replaced the server base file; the example did not.
    assert_eq!(
        fs::read_to_string(project.join("apps/server/src/shared.ts")).unwrap(),
        "// drizzle\n"
    );
    assert!(project.join("apps/server/src/todo.ts").is_file());

    assert!(report.composition.applied.contains(&"base".to_string()));
    assert!(!report.composition.skipped.is_empty());
    assert_eq!(report.composition.files_preserved, 1);
}

#[test]
fn catalog_agrees_with_composition() {
    let templates = template_root();
    let out = TempDir::new().unwrap();

    let planned = ScaffoldService::plan(todo_app()).unwrap();
    let catalog = TemplateCatalog::scan(templates.path()).unwrap();
    let expected: Vec<String> = catalog
        .missing(&planned.plan)
        .into_iter()
        .map(|o| o.source_display())
        .collect();

    let report = service(templates.path(), MissingTemplatePolicy::Skip)
        .scaffold(todo_app(), out.path())
        .unwrap();
    assert_eq!(report.composition.skipped, expected);
}

#[test]
fn strict_policy_stops_at_first_missing_overlay() {
    let templates = template_root();
    let out = TempDir::new().unwrap();

    let err = service(templates.path(), MissingTemplatePolicy::Fail)
        .scaffold(todo_app(), out.path())
        .unwrap_err();
    assert!(err.to_string().starts_with("Template source not found:"));
}

#[test]
fn d1_prisma_setup_updates_env_and_manifest() {
    let templates = template_root();
    write(
        templates.path(),
        "backend/server/hono/package.json.hbs",
        r#"{"name": "server", "dependencies": {}}"#,
    );
    let out = TempDir::new().unwrap();
    let config = ProjectConfig::builder()
        .frontend([Frontend::TanstackRouter])
        .backend(Backend::Hono)
        .runtime(Runtime::Workers)
        .database(Database::Sqlite)
        .orm(Orm::Prisma)
        .db_setup(DbSetup::D1)
        .server_deploy(ServerDeploy::Wrangler)
        .build()
        .unwrap();

    service(templates.path(), MissingTemplatePolicy::Skip)
        .scaffold(config, out.path())
        .unwrap();

    let env = fs::read_to_string(out.path().join("apps/server/.env")).unwrap();
    assert!(env.contains("CLOUDFLARE_ACCOUNT_ID=\n"));
    assert!(env.contains("DATABASE_URL=file:./local.db\n"));

    let manifest: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out.path().join("apps/server/package.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["dependencies"]["@prisma/adapter-d1"], "^6.15.0");
}

#[test]
fn incompatible_selection_creates_nothing() {
    let templates = template_root();
    let out = TempDir::new().unwrap();
    let project = out.path().join("bad");
    let config = ProjectConfig::builder()
        .frontend([Frontend::Solid])
        .backend(Backend::Convex)
        .auth(Auth::Clerk)
        .build()
        .unwrap();

    assert!(
        service(templates.path(), MissingTemplatePolicy::Skip)
            .scaffold(config, &project)
            .is_err()
    );
    assert!(!project.exists());
}
