use std::path::Path;

use tempfile::TempDir;

use nuvscan_core::ScanError;
use nuvscan_core::commands::{ScanCommand, ScanOptions};
use nuvscan_core::config::ScanConfig;
use nuvscan_core::fs::MemoryFileSystem;

const HELLO_SCRIPT: &str = "version: 3\n\ntasks:\n  default:\n    cmds:\n      - nuv wsk action update hello packages/hello.js --kind nodejs:default\n      - nuv wsk package update subf1\n      - nuv pack -r packages/subf1/mfa/mfa.zip packages/subf1/mfa/*\n      - nuv wsk action update subf1/mfa packages/subf1/mfa/mfa.zip --kind nodejs:default\n";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn hello_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    write(&project, "packages/hello.js", "function main() {}");
    write(&project, "packages/subf1/mfa/package.json", "{}");
    temp
}

#[test]
fn scan_writes_expected_script() {
    let temp = hello_project();
    let project = temp.path().join("project");
    let output = temp.path().join("out");

    let report = ScanCommand::new(ScanConfig::default())
        .run(&ScanOptions::new(&project, &output))
        .unwrap();

    let script_path = output.join("nuvolaris.yml");
    assert_eq!(report.script_path.as_deref(), Some(script_path.as_path()));
    assert_eq!(std::fs::read_to_string(&script_path).unwrap(), HELLO_SCRIPT);
    assert_eq!(report.script, HELLO_SCRIPT);
    assert_eq!(report.packages, 1);
    assert_eq!(report.single_file_actions, 1);
    assert_eq!(report.multi_file_actions, 1);
    assert_eq!(report.commands.len(), 4);
}

#[test]
fn rescanning_replaces_script_byte_for_byte() {
    let temp = hello_project();
    let project = temp.path().join("project");
    let output = temp.path().join("out");
    let command = ScanCommand::new(ScanConfig::default());
    let options = ScanOptions::new(&project, &output);

    command.run(&options).unwrap();
    let first = std::fs::read(output.join("nuvolaris.yml")).unwrap();
    command.run(&options).unwrap();
    let second = std::fs::read(output.join("nuvolaris.yml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unsupported_file_fails_without_writing() {
    let temp = hello_project();
    let project = temp.path().join("project");
    let output = temp.path().join("out");
    write(&project, "packages/subf1/legacy.rb", "puts 1");

    let err = ScanCommand::new(ScanConfig::default())
        .run(&ScanOptions::new(&project, &output))
        .unwrap_err();

    assert!(matches!(err, ScanError::UnsupportedFile { .. }));
    assert!(!output.exists());
}

#[test]
fn missing_scan_folder_is_reported() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    std::fs::create_dir_all(&project).unwrap();
    let output = temp.path().join("out");

    let err = ScanCommand::new(ScanConfig::default())
        .run(&ScanOptions::new(&project, &output))
        .unwrap_err();

    match &err {
        ScanError::MissingScanFolder { folder, project_dir } => {
            assert_eq!(folder, "packages");
            assert_eq!(project_dir, &project);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("folder 'packages' not found"));
    assert!(!output.exists());
}

#[test]
fn empty_scan_folder_writes_header_only() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    std::fs::create_dir_all(project.join("packages")).unwrap();
    let output = temp.path().join("out");

    let report = ScanCommand::new(ScanConfig::default())
        .run(&ScanOptions::new(&project, &output))
        .unwrap();

    assert!(report.commands.is_empty());
    assert_eq!(
        std::fs::read_to_string(output.join("nuvolaris.yml")).unwrap(),
        "version: 3\n\ntasks:\n  default:\n    cmds:\n"
    );
}

#[test]
fn dry_run_renders_without_writing() {
    let temp = hello_project();
    let project = temp.path().join("project");
    let output = temp.path().join("out");

    let report = ScanCommand::new(ScanConfig::default())
        .run(&ScanOptions::new(&project, &output).with_dry_run(true))
        .unwrap();

    assert!(report.script_path.is_none());
    assert_eq!(report.script, HELLO_SCRIPT);
    assert!(!output.exists());
}

#[test]
fn config_controls_folder_tools_and_script_name() {
    let fs = MemoryFileSystem::new();
    fs.add_file("functions/ping.go", "package main");
    let config = ScanConfig {
        scan_folder: "functions".to_string(),
        tool: "wsk".to_string(),
        script_name: "deploy.yml".to_string(),
        ..ScanConfig::default()
    };

    let report = ScanCommand::new(config)
        .execute(&fs, &ScanOptions::new("/project", "build"))
        .unwrap();

    assert_eq!(
        report.commands,
        vec!["wsk action update ping functions/ping.go --kind go:default"]
    );
    assert_eq!(
        fs.read_to_string("build/deploy.yml").as_deref(),
        Some(report.script.as_str())
    );
}

#[test]
fn report_serializes_to_json() {
    let fs = MemoryFileSystem::new();
    fs.add_file("packages/hello.js", "");
    fs.add_file("packages/subf1/mfa/package.json", "{}");

    let report = ScanCommand::new(ScanConfig::default())
        .execute(&fs, &ScanOptions::new("project", "out").with_dry_run(true))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["packages"], 1);
    assert_eq!(json["commands"].as_array().unwrap().len(), 4);
    assert_eq!(json["tree"]["actions"][0]["runtime"], "nodejs");
    assert_eq!(json["tree"]["packages"][0]["name"], "subf1");
    assert!(json["script_path"].is_null());
    assert!(json.get("script").is_none());
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_file_name_fails_with_invalid_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let packages = project.join("packages");
    std::fs::create_dir_all(&packages).unwrap();
    let raw = OsStr::from_bytes(b"bad\xff.js");
    std::fs::write(packages.join(raw), "function main() {}").unwrap();
    let output = temp.path().join("out");

    let err = ScanCommand::new(ScanConfig::default())
        .run(&ScanOptions::new(&project, &output))
        .unwrap_err();

    match err {
        ScanError::InvalidPath { path } => {
            assert_eq!(path, Path::new("packages").join(raw));
            assert!(project.join(&path).exists());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!output.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_action_folder_fails_with_invalid_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let action = project
        .join("packages/subf")
        .join(OsStr::from_bytes(b"mfa\xfe"));
    std::fs::create_dir_all(&action).unwrap();
    std::fs::write(action.join("package.json"), "{}").unwrap();

    let err = ScanCommand::new(ScanConfig::default())
        .run(&ScanOptions::new(&project, temp.path().join("out")).with_dry_run(true))
        .unwrap_err();

    assert!(matches!(err, ScanError::InvalidPath { .. }));
}
