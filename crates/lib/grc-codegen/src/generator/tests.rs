use super::*;
use crate::error::TemplateError;
use crate::generator::config::STYLESHEET_FILE;
use crate::source::directory::DirectoryTemplates;
use crate::source::embedded::EmbeddedTemplates;
use std::fs;
use tempfile::TempDir;

// Helper function to create a template directory with the given files
fn create_template_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).expect("Failed to write template");
    }
    temp_dir
}

// Helper function to create an empty component directory named `name`
fn create_target_dir(root: &TempDir, name: &str) -> PathBuf {
    let target = root.path().join(name);
    fs::create_dir(&target).expect("Failed to create target dir");
    target
}

#[test]
fn test_component_name_from_base_name() {
    let name = ComponentName::try_from_path(Path::new("/work/src/UserCard"))
        .expect("Name should be derived");
    assert_eq!(name.as_str(), "UserCard");

    let name = ComponentName::try_from_path(Path::new("components/UserCard/"))
        .expect("Name should be derived");
    assert_eq!(name.to_string(), "UserCard");
}

#[test]
fn test_component_name_without_segment_fails() {
    for path in ["/", "..", ""] {
        let error = ComponentName::try_from_path(Path::new(path)).unwrap_err();
        assert!(matches!(error, GeneratorError::InvalidComponentName(_)));
    }
}

#[test]
fn test_generator_rejects_unnamed_target() {
    let config = GeneratorConfig::default();
    let result = ComponentGenerator::try_new("/", &EmbeddedTemplates, &config);
    assert!(matches!(result, Err(GeneratorError::InvalidComponentName(_))));
}

#[tokio::test]
async fn test_generate_user_card() {
    let templates = create_template_dir(&[
        ("basic-comp.tsx", "export const ${Name} = () => {...}"),
        ("stateless.tsx", "unused ${Name}"),
    ]);
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let target = create_target_dir(&workspace, "UserCard");

    let source = DirectoryTemplates::new(templates.path());
    let config = GeneratorConfig::default();
    let generator =
        ComponentGenerator::try_new(&target, &source, &config).expect("Generator should build");

    let report = generator.generate(Variant::Basic).await;
    assert!(report.is_success());
    assert_eq!(report.component_name.as_str(), "UserCard");

    let component = fs::read_to_string(target.join("index.tsx")).expect("Component written");
    assert_eq!(component, "export const UserCard = () => {...}");

    let stylesheet = fs::read_to_string(target.join("index.scss")).expect("Stylesheet written");
    assert!(stylesheet.is_empty());

    let entries = fs::read_dir(&target).expect("Target readable").count();
    assert_eq!(entries, 2);
}

#[tokio::test]
async fn test_generate_with_embedded_templates() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let target = create_target_dir(&workspace, "UserCard");
    let config = GeneratorConfig::default();

    for variant in Variant::ALL {
        let generator = ComponentGenerator::try_new(&target, &EmbeddedTemplates, &config)
            .expect("Generator should build");
        let report = generator.generate(variant).await;
        assert!(report.is_success(), "{variant} failed: {report:?}");

        let component = fs::read_to_string(target.join("index.tsx")).expect("Component written");
        assert!(component.contains("UserCard"));
        assert!(!component.contains("${"));
    }

    let component = fs::read_to_string(target.join("index.tsx")).expect("Component written");
    assert!(component.contains("export const UserCard = (props: UserCardProps) => {"));
}

#[tokio::test]
async fn test_stylesheet_written_without_matching_template() {
    let templates = create_template_dir(&[("stateless-old.tsx", "old ${Name}")]);
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let target = create_target_dir(&workspace, "Widget");

    let source = DirectoryTemplates::new(templates.path());
    let config = GeneratorConfig::default();
    let generator =
        ComponentGenerator::try_new(&target, &source, &config).expect("Generator should build");

    let report = generator.generate(Variant::Stateless).await;
    assert!(!report.is_success());
    assert!(matches!(
        report.component,
        Err(GeneratorError::Template(TemplateError::TemplateNotFound { .. }))
    ));
    assert!(report.stylesheet.is_ok());

    assert!(!target.join("index.tsx").exists());
    assert!(target.join("index.scss").exists());
}

#[tokio::test]
async fn test_stylesheet_written_when_listing_fails() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let target = create_target_dir(&workspace, "Widget");

    let source = DirectoryTemplates::new(workspace.path().join("missing-templates"));
    let config = GeneratorConfig::default();
    let generator =
        ComponentGenerator::try_new(&target, &source, &config).expect("Generator should build");

    let report = generator.generate(Variant::Basic).await;
    assert!(matches!(
        report.component,
        Err(GeneratorError::Template(TemplateError::DirectoryList { .. }))
    ));
    assert!(report.stylesheet.is_ok());
    assert_eq!(report.errors().count(), 1);
}

#[tokio::test]
async fn test_ambiguous_templates_write_no_component() {
    let templates = create_template_dir(&[
        ("stateless.tsx", "tsx ${Name}"),
        ("stateless.jsx", "jsx ${Name}"),
    ]);
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let target = create_target_dir(&workspace, "Widget");

    let source = DirectoryTemplates::new(templates.path());
    let config = GeneratorConfig::default();
    let generator =
        ComponentGenerator::try_new(&target, &source, &config).expect("Generator should build");

    let report = generator.generate(Variant::Stateless).await;
    assert!(matches!(
        report.component,
        Err(GeneratorError::Template(TemplateError::AmbiguousTemplate { .. }))
    ));
    assert!(!target.join("index.tsx").exists());
    assert!(target.join("index.scss").exists());
}

#[tokio::test]
async fn test_existing_files_are_overwritten() {
    let templates = create_template_dir(&[("redux-comp.tsx", "connect(${Name})")]);
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let target = create_target_dir(&workspace, "Store");
    fs::write(target.join("index.tsx"), "old component").expect("Failed to write file");
    fs::write(target.join("index.scss"), ".old {}").expect("Failed to write file");

    let source = DirectoryTemplates::new(templates.path());
    let config = GeneratorConfig::default();
    let generator =
        ComponentGenerator::try_new(&target, &source, &config).expect("Generator should build");

    let report = generator.generate(Variant::Redux).await;
    assert!(report.is_success());
    assert_eq!(
        report.component.as_ref().ok(),
        Some(&OutputFile {
            path: target.join("index.tsx")
        })
    );

    let component = fs::read_to_string(target.join("index.tsx")).expect("Component written");
    assert_eq!(component, "connect(Store)");
    let stylesheet = fs::read_to_string(target.join("index.scss")).expect("Stylesheet written");
    assert!(stylesheet.is_empty());
}

#[tokio::test]
async fn test_write_failures_are_reported_per_file() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let target = workspace.path().join("Ghost");

    let config = GeneratorConfig::default();
    let generator = ComponentGenerator::try_new(&target, &EmbeddedTemplates, &config)
        .expect("Generator should build");

    let report = generator.generate(Variant::Basic).await;
    assert_eq!(report.errors().count(), 2);
    for error in report.errors() {
        assert!(matches!(error, GeneratorError::Write { .. }));
    }
}

#[tokio::test]
async fn test_custom_component_name() {
    let workspace = TempDir::new().expect("Failed to create temp dir");
    let target = create_target_dir(&workspace, "Avatar");
    let config = GeneratorConfig {
        component_file: "Avatar.tsx".to_string(),
    };

    let generator = ComponentGenerator::try_new(&target, &EmbeddedTemplates, &config)
        .expect("Generator should build");
    let report = generator.generate(Variant::Stateless).await;

    assert!(report.is_success());
    assert!(target.join("Avatar.tsx").exists());
    assert!(target.join(STYLESHEET_FILE).exists());
    assert!(!target.join("index.tsx").exists());
}

#[tokio::test]
async fn test_embedded_templates_import_stylesheet() {
    let templates = EmbeddedTemplates.list().await.expect("Listing never fails");
    let import = format!("import './{STYLESHEET_FILE}';");

    for template in &templates {
        let content = EmbeddedTemplates
            .read(template)
            .await
            .expect("Embedded template should be readable");
        assert!(content.contains(&import), "{} misses {import}", template.file_name);
    }
}
