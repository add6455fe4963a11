use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn depsolve_cmd() -> Command {
    Command::cargo_bin("depsolve").unwrap()
}

/// Committed manifests under tests/fixtures:
/// - manifest.json: nine packages, three sources (D, F, H), D/H tied on count
/// - shared.json: diamond, A -> {B, C} -> D
/// - cyclic.json: E -> A closes a loop through A's subtree, B's stays clean
fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn write_manifest(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("packages.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_list_shows_all_packages() {
    depsolve_cmd()
        .args(["list", "--no-color", "-m"])
        .arg(fixture("shared.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("  A\n  B\n  C\n  D"))
        .stdout(predicate::str::contains("4 package(s), 4 dependency edge(s)"));
}

#[test]
fn test_list_verbose_shows_dependencies_and_sources() {
    depsolve_cmd()
        .args(["list", "--verbose", "-m"])
        .arg(fixture("manifest.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> G, I"))
        .stdout(predicate::str::contains("D -> B, C"))
        .stdout(predicate::str::contains(
            "Source packages (nothing depends on them): D, F, H",
        ));
}

#[test]
fn test_list_json_output() {
    let output = depsolve_cmd()
        .args(["list", "--format", "json", "-m"])
        .arg(fixture("shared.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["package_count"], 4);
    assert_eq!(json["dependency_count"], 4);
    assert_eq!(json["packages"][0]["name"], "A");
    assert_eq!(
        json["packages"][0]["dependencies"],
        serde_json::json!(["B", "C"])
    );
    // Leaf packages omit the dependencies key entirely.
    assert!(json["packages"][3]["dependencies"].is_null());
}

#[test]
fn test_order_for_single_package() {
    depsolve_cmd()
        .args(["order", "A", "-m"])
        .arg(fixture("manifest.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. E\n  2. G\n  3. I\n  4. A"));
}

#[test]
fn test_order_json_output() {
    let output = depsolve_cmd()
        .args(["order", "A", "--format", "json", "-m"])
        .arg(fixture("manifest.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["package"], "A");
    assert_eq!(json["count"], 4);
    assert_eq!(json["order"], serde_json::json!(["E", "G", "I", "A"]));
}

#[test]
fn test_order_all_covers_every_package() {
    depsolve_cmd()
        .args(["order", "--all", "-m"])
        .arg(fixture("manifest.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. E\n  2. G\n  3. I\n  4. A\n  5. B\n  6. C\n  7. H\n  8. F\n  9. D",
        ));
}

#[test]
fn test_order_requires_package_or_all() {
    depsolve_cmd()
        .args(["order", "-m"])
        .arg(fixture("shared.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("provide a package name or use --all"));
}

#[test]
fn test_order_unknown_package_fails() {
    depsolve_cmd()
        .args(["order", "Zeta", "-m"])
        .arg(fixture("shared.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "package 'Zeta' was not found in the dependency graph",
        ));
}

#[test]
fn test_order_reports_cycle_path() {
    depsolve_cmd()
        .args(["order", "A", "-m"])
        .arg(fixture("cyclic.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "circular dependency detected: A -> D -> E -> A",
        ));
}

#[test]
fn test_order_is_scoped_to_reachable_packages() {
    // B's subtree avoids the loop, so the same manifest still resolves.
    depsolve_cmd()
        .args(["order", "B", "-m"])
        .arg(fixture("cyclic.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. C\n  2. B"));
}

#[test]
fn test_delta_lists_remaining_packages() {
    depsolve_cmd()
        .args(["delta", "A", "--installed", "C", "-m"])
        .arg(fixture("shared.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. B\n  2. A"));
}

#[test]
fn test_delta_already_satisfied() {
    depsolve_cmd()
        .args(["delta", "D", "-i", "A", "-m"])
        .arg(fixture("shared.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to install"));
}

#[test]
fn test_rank_reports_max() {
    depsolve_cmd()
        .args(["rank", "-m"])
        .arg(fixture("manifest.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("D pulls in the most packages: 7"));
}

#[test]
fn test_rank_verbose_prints_ranked_counts() {
    depsolve_cmd()
        .args(["rank", "--verbose", "-m"])
        .arg(fixture("manifest.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("7  D\n     7  H"))
        .stdout(predicate::str::contains("1  E"));
}

#[test]
fn test_check_passes_on_acyclic_manifest() {
    depsolve_cmd()
        .args(["check", "-m"])
        .arg(fixture("manifest.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Source package(s): D, F, H"))
        .stdout(predicate::str::contains("No circular dependencies"))
        .stdout(predicate::str::contains("Check passed"));
}

#[test]
fn test_check_fails_on_cycle() {
    depsolve_cmd()
        .args(["check", "-m"])
        .arg(fixture("cyclic.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("circular dependency detected"))
        .stdout(predicate::str::contains("Check failed"));
}

#[test]
fn test_check_warns_on_undeclared_dependency() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(
        tmp.path(),
        r#"{ "packages": [{ "name": "app", "dependencies": ["mystery"] }] }"#,
    );

    depsolve_cmd()
        .args(["check", "-m"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mystery is only referenced as a dependency",
        ))
        .stdout(predicate::str::contains("1 warning(s)"));
}

#[test]
fn test_missing_manifest_file() {
    let tmp = TempDir::new().unwrap();

    depsolve_cmd()
        .args(["order", "--all", "-m"])
        .arg(tmp.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest not found"));
}

#[test]
fn test_malformed_manifest() {
    let tmp = TempDir::new().unwrap();
    let manifest = write_manifest(tmp.path(), "{ not json");

    depsolve_cmd()
        .args(["list", "-m"])
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse manifest"));
}

#[test]
fn test_default_manifest_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    fs::copy(fixture("shared.json"), tmp.path().join("packages.json")).unwrap();

    depsolve_cmd()
        .current_dir(tmp.path())
        .args(["order", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. D\n  2. B\n  3. C\n  4. A"));
}

#[test]
fn test_manifest_from_environment() {
    depsolve_cmd()
        .env("DEPSOLVE_MANIFEST", fixture("shared.json"))
        .args(["rank"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A pulls in the most packages: 4"));
}
