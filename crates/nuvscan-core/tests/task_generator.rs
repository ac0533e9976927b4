use nuvscan_core::fs::MemoryFileSystem;
use nuvscan_core::runtime::Runtime;
use nuvscan_core::scanner::Scanner;
use nuvscan_core::tasks::TaskGenerator;
use nuvscan_core::tree::{MultiFileAction, Package, RootScan, SingleFileAction};

fn generate(fs: &MemoryFileSystem) -> Vec<String> {
    let root = Scanner::new(fs, "packages").build_tree().unwrap();
    TaskGenerator::default().generate(&root).unwrap()
}

#[test]
fn empty_root_generates_nothing() {
    let root = RootScan::new("packages", "packages");
    assert!(TaskGenerator::default().generate(&root).unwrap().is_empty());
}

#[test]
fn root_actions_use_their_runtime_kind() {
    let fs = MemoryFileSystem::new();
    fs.add_file("packages/a.js", "");
    fs.add_file("packages/b.py", "");
    fs.add_file("packages/c.java", "");
    fs.add_file("packages/d.go", "");

    assert_eq!(
        generate(&fs),
        vec![
            "nuv wsk action update a packages/a.js --kind nodejs:default",
            "nuv wsk action update b packages/b.py --kind python:default",
            "nuv wsk action update c packages/c.java --kind java:default",
            "nuv wsk action update d packages/d.go --kind go:default",
        ]
    );
}

#[test]
fn package_is_registered_before_its_actions() {
    let fs = MemoryFileSystem::new();
    fs.add_file("packages/subf/a.js", "");
    fs.add_file("packages/subf/b.py", "");

    assert_eq!(
        generate(&fs),
        vec![
            "nuv wsk package update subf",
            "nuv wsk action update subf/a packages/subf/a.js --kind nodejs:default",
            "nuv wsk action update subf/b packages/subf/b.py --kind python:default",
        ]
    );
}

#[test]
fn multi_file_action_is_zipped_then_updated() {
    let fs = MemoryFileSystem::new();
    fs.add_file("packages/subf/mfa/requirements.txt", "requests");
    fs.add_file("packages/subf/mfa/__main__.py", "");

    assert_eq!(
        generate(&fs),
        vec![
            "nuv wsk package update subf",
            "nuv pack -r packages/subf/mfa/mfa.zip packages/subf/mfa/*",
            "nuv wsk action update subf/mfa packages/subf/mfa/mfa.zip --kind python:default",
        ]
    );
}

#[test]
fn hello_and_subf1_project() {
    let fs = MemoryFileSystem::new();
    fs.add_file("packages/hello.js", "");
    fs.add_file("packages/subf1/mfa/package.json", "{}");

    assert_eq!(
        generate(&fs),
        vec![
            "nuv wsk action update hello packages/hello.js --kind nodejs:default",
            "nuv wsk package update subf1",
            "nuv pack -r packages/subf1/mfa/mfa.zip packages/subf1/mfa/*",
            "nuv wsk action update subf1/mfa packages/subf1/mfa/mfa.zip --kind nodejs:default",
        ]
    );
}

#[test]
fn single_file_commands_precede_multi_file_commands() {
    let fs = MemoryFileSystem::new();
    fs.add_file("packages/pkg/aaa/package.json", "{}");
    fs.add_file("packages/pkg/bbb/go.mod", "module bbb");
    fs.add_file("packages/pkg/zzz.py", "");
    fs.add_file("packages/pkg/yyy.go", "");

    let tasks = generate(&fs);

    assert_eq!(
        tasks,
        vec![
            "nuv wsk package update pkg",
            "nuv wsk action update pkg/yyy packages/pkg/yyy.go --kind go:default",
            "nuv wsk action update pkg/zzz packages/pkg/zzz.py --kind python:default",
            "nuv pack -r packages/pkg/aaa/aaa.zip packages/pkg/aaa/*",
            "nuv wsk action update pkg/aaa packages/pkg/aaa/aaa.zip --kind nodejs:default",
            "nuv pack -r packages/pkg/bbb/bbb.zip packages/pkg/bbb/*",
            "nuv wsk action update pkg/bbb packages/pkg/bbb/bbb.zip --kind go:default",
        ]
    );
}

#[test]
fn every_action_produces_its_commands() {
    let fs = MemoryFileSystem::new();
    fs.add_file("packages/root.js", "");
    for pkg in ["p1", "p2", "p3"] {
        for i in 0..5 {
            fs.add_file(format!("packages/{pkg}/s{i}.py"), "");
            fs.add_file(format!("packages/{pkg}/m{i}/pom.xml"), "");
        }
    }

    let root = Scanner::new(&fs, "packages").build_tree().unwrap();
    let tasks = TaskGenerator::default().generate(&root).unwrap();

    let expected = root.packages.len()
        + root.single_file_action_count()
        + 2 * root.multi_file_action_count();
    assert_eq!(expected, 1 + 3 + 15 + 30);
    assert_eq!(tasks.len(), expected);
}

#[test]
fn generation_is_deterministic() {
    let fs = MemoryFileSystem::new();
    for i in 0..20 {
        fs.add_file(format!("packages/pkg/single{i:02}.js"), "");
        fs.add_file(format!("packages/pkg/multi{i:02}/main.go"), "");
    }
    let root = Scanner::new(&fs, "packages").build_tree().unwrap();
    let generator = TaskGenerator::default();

    let first = generator.generate(&root).unwrap();
    for _ in 0..10 {
        assert_eq!(generator.generate(&root).unwrap(), first);
    }
}

#[test]
fn custom_tools_prefix_commands() {
    let mut package = Package::new("pkg", "packages/pkg");
    package.single_file_actions.push(SingleFileAction {
        name: "one".to_string(),
        path: "packages/pkg/one.js".into(),
        runtime: Runtime::NodeJs,
    });
    package.multi_file_actions.push(MultiFileAction {
        name: "two".to_string(),
        path: "packages/pkg/two".into(),
        runtime: Runtime::Java,
    });
    let mut root = RootScan::new("packages", "packages");
    root.packages.push(package);

    let tasks = TaskGenerator::new("wsk -i", "zip").generate(&root).unwrap();

    assert_eq!(
        tasks,
        vec![
            "wsk -i package update pkg",
            "wsk -i action update pkg/one packages/pkg/one.js --kind nodejs:default",
            "zip -r packages/pkg/two/two.zip packages/pkg/two/*",
            "wsk -i action update pkg/two packages/pkg/two/two.zip --kind java:default",
        ]
    );
}
