//! End-to-end tests for `trellis new`
//!
//! Commands run against a temporary workspace with an in-memory working
//! directory and mock installers.

mod common;

use common::*;
use tokio_test::{assert_err, assert_ok};
use trellis_projects::language::classifier::{MSG_FOOTER, MSG_HEADER};
use trellis_projects::{EmbeddedBlueprintInstaller, Error, NewProjectOptions};

fn with_lang(lang: &str) -> NewProjectOptions {
    NewProjectOptions {
        language: Some(lang.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_valid_language_reaches_installer() {
    let ws = Workspace::new();
    let installer = MockInstaller::new();

    let report = assert_ok!(
        ws.creator(installer.clone())
            .execute("my-app", with_lang("en-US"))
            .await
    );

    let request = installer.last_request();
    assert_eq!(request.language, "en-US");
    assert_eq!(request.project_name, "my-app");
    assert_eq!(request.target_dir, ws.root.join("my-app"));
    assert_eq!(report.target_dir, ws.root.join("my-app"));
}

#[tokio::test]
async fn test_invalid_region_is_rejected_with_structured_message() {
    let ws = Workspace::new();
    let installer = MockInstaller::new();

    let err = assert_err!(
        ws.creator(installer.clone())
            .execute("my-app", with_lang("en-UK"))
            .await
    );

    assert!(matches!(err, Error::InvalidLanguageTag { .. }));
    let message = err.to_string();
    assert!(message.starts_with(MSG_HEADER));
    assert!(message.ends_with(MSG_FOOTER));
    assert!(message.contains("will NOT be set to `en-UK`"));
    assert!(!message.contains("set the app programming language"));
    assert_eq!(installer.call_count(), 0);
    assert!(is_empty_dir(&ws.root));
}

#[tokio::test]
async fn test_technology_name_is_rejected_as_misuse() {
    let ws = Workspace::new();
    let installer = MockInstaller::new();

    let err = assert_err!(
        ws.creator(installer.clone())
            .execute("my-app", with_lang("typescript"))
            .await
    );

    assert!(matches!(err, Error::InvalidLanguageTag { .. }));
    assert!(err
        .to_string()
        .contains("Trying to set the app programming language to `typescript`?"));
    assert_eq!(installer.call_count(), 0);
}

#[tokio::test]
async fn test_absorbed_flag_is_rejected_as_parser_artifact() {
    let ws = Workspace::new();
    let installer = MockInstaller::new();

    let err = assert_err!(
        ws.creator(installer.clone())
            .execute("my-app", with_lang("--skip-npm"))
            .await
    );

    assert!(err
        .to_string()
        .contains("Is `--skip-npm` meant to be a trellis command option?"));
}

#[tokio::test]
async fn test_ambiguous_language_is_accepted_with_advisory() {
    let ws = Workspace::new();
    let installer = MockInstaller::new();

    assert_ok!(
        ws.creator(installer.clone())
            .execute("my-app", with_lang("ts"))
            .await
    );

    assert_eq!(installer.last_request().language, "ts");
    assert_eq!(ws.reporter.warnings().len(), 1);
    assert!(ws.reporter.infos()[0].contains("will be set to `ts`"));
}

#[tokio::test]
async fn test_absent_language_uses_default() {
    let ws = Workspace::new();
    let installer = MockInstaller::new();

    assert_ok!(
        ws.creator(installer.clone())
            .execute("my-app", NewProjectOptions::default())
            .await
    );

    assert_eq!(installer.last_request().language, "");
    assert!(ws.reporter.is_empty());
}

#[tokio::test]
async fn test_dot_is_reserved_and_touches_nothing() {
    let ws = Workspace::new();
    let installer = MockInstaller::new();

    let err = assert_err!(
        ws.creator(installer.clone())
            .execute(".", NewProjectOptions::default())
            .await
    );

    assert!(matches!(err, Error::ReservedName { .. }));
    assert_eq!(
        err.to_string(),
        "Trying to generate an application structure in this directory? Use `trellis init` instead."
    );
    assert!(is_empty_dir(&ws.root));
    assert_eq!(ws.current_dir(), ws.root);
    assert_eq!(installer.call_count(), 0);
}

#[tokio::test]
async fn test_missing_name_is_reported_first() {
    let ws = Workspace::new();
    let err = assert_err!(
        ws.creator(MockInstaller::new())
            .execute("", with_lang("typescript"))
            .await
    );
    assert_eq!(
        err.to_string(),
        "The `trellis new` command requires a name to be specified. For more details, use `trellis help`."
    );
}

#[tokio::test]
async fn test_invalid_names_are_rejected_before_language() {
    let ws = Workspace::new();
    for name in ["1app", "my.app", "test", "Vendor", "my app"] {
        let err = assert_err!(
            ws.creator(MockInstaller::new())
                .execute(name, with_lang("typescript"))
                .await
        );
        assert_eq!(
            err.to_string(),
            format!("We currently do not support a name of `{}`.", name)
        );
    }
    assert!(is_empty_dir(&ws.root));
}

#[tokio::test]
async fn test_failed_install_rolls_back() {
    let ws = Workspace::new();
    let installer = FailingInstaller::new("npm install exploded");

    let err = assert_err!(
        ws.creator(installer.clone())
            .execute("my-app", with_lang("en-US"))
            .await
    );

    assert!(err.is_install_failure());
    assert_eq!(err.to_string(), "npm install exploded");
    assert_eq!(installer.call_count(), 1);
    assert!(!ws.root.join("my-app").exists());
    assert_eq!(ws.current_dir(), ws.root);
    assert_eq!(
        ws.reporter.warnings(),
        vec!["Error creating new application. Removing generated directory `./my-app`"]
    );
}

#[tokio::test]
async fn test_successful_install_stays_in_project() {
    let ws = Workspace::new();

    assert_ok!(
        ws.creator(MockInstaller::new())
            .execute("my-app", NewProjectOptions::default())
            .await
    );

    assert!(ws.root.join("my-app/package.json").is_file());
    assert_eq!(ws.current_dir(), ws.root.join("my-app"));
}

#[tokio::test]
async fn test_existing_project_directory_conflicts() {
    let ws = Workspace::new();
    std::fs::create_dir(ws.root.join("my-app")).unwrap();
    std::fs::write(ws.root.join("my-app/keep.txt"), "mine").unwrap();
    let installer = MockInstaller::new();

    let err = assert_err!(
        ws.creator(installer.clone())
            .execute("my-app", NewProjectOptions::default())
            .await
    );

    assert_eq!(err.to_string(), "Directory 'my-app' already exists.");
    assert!(ws.root.join("my-app/keep.txt").is_file());
    assert_eq!(installer.call_count(), 0);
}

#[tokio::test]
async fn test_relative_blueprint_is_normalized() {
    let ws = Workspace::new();
    let installer = MockInstaller::new();
    let options = NewProjectOptions {
        blueprint: Some("./blueprints/web.yaml".to_string()),
        ..Default::default()
    };

    assert_ok!(ws.creator(installer.clone()).execute("my-app", options).await);

    assert_eq!(
        installer.last_request().blueprint,
        ws.root.join("./blueprints/web.yaml").to_string()
    );
}

#[tokio::test]
async fn test_extra_options_pass_through() {
    let ws = Workspace::new();
    let installer = MockInstaller::new();
    let mut options = NewProjectOptions {
        skip_npm: true,
        skip_bower: true,
        yarn: Some(true),
        welcome: false,
        ..Default::default()
    };
    options
        .extra
        .insert("ci-provider".to_string(), "github".to_string());

    assert_ok!(ws.creator(installer.clone()).execute("my-app", options).await);

    let request = installer.last_request();
    assert!(request.skip_npm);
    assert!(request.skip_bower);
    assert!(!request.skip_git);
    assert_eq!(request.yarn, Some(true));
    assert!(!request.welcome);
    assert_eq!(request.extra.get("ci-provider").map(String::as_str), Some("github"));
}

#[tokio::test]
async fn test_embedded_installer_writes_lang_attribute() {
    let ws = Workspace::new();

    let report = assert_ok!(
        ws.creator(std::sync::Arc::new(EmbeddedBlueprintInstaller::new()))
            .execute("my-app", with_lang("fr-CA"))
            .await
    );

    assert!(!report.files.is_empty());
    let html = std::fs::read_to_string(ws.root.join("my-app/app/index.html")).unwrap();
    assert!(html.contains(r#"lang="fr-CA""#));
}
