/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Create a test project directory with poetry.lock and pyproject.toml.
fn create_test_project(dir: &Path) {
    let sample = fixtures_path().join("sample-project");
    fs::copy(sample.join("poetry.lock"), dir.join("poetry.lock")).unwrap();
    fs::copy(sample.join("pyproject.toml"), dir.join("pyproject.toml")).unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn run(args: &[&str]) -> std::process::Output {
    cargo_bin_cmd!("poetry-sbom").args(args).output().unwrap()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("poetry-sbom.config.yml"),
            r#"
format: markdown
"#,
        );

        let output = run(&["-p", dir.path().to_str().unwrap()]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("# Software Bill of Materials (SBOM)"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config file"));
    }

    #[test]
    fn test_auto_discovery_applies_purl_bom_ref_and_skip_pyproject() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("poetry-sbom.config.yml"),
            r#"
purl_bom_ref: true
include_pyproject: false
"#,
        );

        let output = run(&["-p", dir.path().to_str().unwrap()]);

        assert!(output.status.success());
        let bom: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(bom["components"][1]["bom-ref"], "pkg:pypi/requests@2.31.0");
        assert!(bom["metadata"].get("component").is_none());
    }

    #[test]
    fn test_auto_discovery_applies_quiet() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(&dir.path().join("poetry-sbom.config.yml"), "quiet: true\n");

        let output = run(&["-p", dir.path().to_str().unwrap()]);

        assert!(output.status.success());
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());

        let output = run(&["-p", dir.path().to_str().unwrap()]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Default format is JSON
        assert!(stdout.contains("\"bomFormat\": \"CycloneDX\""));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Loaded config file"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let project = TempDir::new().unwrap();
        create_test_project(project.path());
        let config_dir = TempDir::new().unwrap();
        let config_path = config_dir.path().join("custom.yml");
        write_config(&config_path, "format: md\n");

        let output = run(&[
            "-p",
            project.path().to_str().unwrap(),
            "-c",
            config_path.to_str().unwrap(),
        ]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("## Component Inventory"));
    }

    #[test]
    fn test_explicit_config_missing_file() {
        let project = TempDir::new().unwrap();
        create_test_project(project.path());

        let output = run(&[
            "-p",
            project.path().to_str().unwrap(),
            "--config",
            "/nonexistent/poetry-sbom.config.yml",
        ]);

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to read file"));
    }

    #[test]
    fn test_explicit_config_wins_over_discovered() {
        let project = TempDir::new().unwrap();
        create_test_project(project.path());
        write_config(
            &project.path().join("poetry-sbom.config.yml"),
            "format: markdown\n",
        );
        let config_dir = TempDir::new().unwrap();
        let config_path = config_dir.path().join("custom.yml");
        write_config(&config_path, "format: json\n");

        let output = run(&[
            "-p",
            project.path().to_str().unwrap(),
            "-c",
            config_path.to_str().unwrap(),
        ]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("\"bomFormat\": \"CycloneDX\""));
    }
}

// ============================================================================
// CLI / Config Merging Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("poetry-sbom.config.yml"),
            "format: markdown\n",
        );

        let output = run(&["-p", dir.path().to_str().unwrap(), "-f", "json"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("\"bomFormat\": \"CycloneDX\""));
    }

    #[test]
    fn test_cli_pyproject_overrides_config_skip() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("poetry-sbom.config.yml"),
            "include_pyproject: false\n",
        );
        let pyproject = dir.path().join("pyproject.toml");

        let output = run(&[
            "-p",
            dir.path().to_str().unwrap(),
            "--pyproject",
            pyproject.to_str().unwrap(),
        ]);

        assert!(output.status.success());
        let bom: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(bom["metadata"]["component"]["name"], "sample-service");
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_invalid_format_in_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(&dir.path().join("poetry-sbom.config.yml"), "format: spdx\n");

        let output = run(&["-p", dir.path().to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Validation error"));
        assert!(stderr.contains("spdx"));
    }

    #[test]
    fn test_invalid_yaml_in_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("poetry-sbom.config.yml"),
            "format: [unclosed\n",
        );

        let output = run(&["-p", dir.path().to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        write_config(
            &dir.path().join("poetry-sbom.config.yml"),
            "check_cve: true\n",
        );

        let output = run(&["-p", dir.path().to_str().unwrap()]);

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'check_cve'"));
    }
}
