/// End-to-end tests for config file loading across the supported formats.
///
/// These tests exercise the full flow from a config file on disk through CLI
/// invocation, using `assert_cmd` and `tempfile` for isolated environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a single-module Maven project for testing.
fn create_test_project(dir: &Path) {
    let pom = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <dependencies>
        <dependency>
            <groupId>org.apache.commons</groupId>
            <artifactId>commons-lang3</artifactId>
            <version>3.12.0</version>
        </dependency>
    </dependencies>
</project>
"#;
    fs::write(dir.join("pom.xml"), pom).unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Runs the CLI without rendering and returns the written diagram text.
fn run_and_read_diagram(config_path: &Path, out_dir: &Path) -> String {
    cargo_bin_cmd!("pom-visualizer")
        .arg(config_path)
        .arg("--no-render")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dependency graph successfully created:",
        ));

    fs::read_to_string(out_dir.join("graph.puml")).unwrap()
}

const EXPECTED_EDGE: &str = r#""org.apache.commons\ncommons-lang3\n3.12.0" --> "commons-lang3""#;

// ============================================================================
// Format Tests
// ============================================================================

mod format_tests {
    use super::*;

    #[test]
    fn test_xml_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        let config_path = dir.path().join("visualizer.xml");
        write_config(
            &config_path,
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<config>
    <visualizer_path>/opt/plantuml.jar</visualizer_path>
    <package_path>{0}</package_path>
    <output_path>{0}/graph.png</output_path>
    <repository_url>https://repo.maven.apache.org/maven2</repository_url>
</config>
"#,
                dir.path().display()
            ),
        );

        let content = run_and_read_diagram(&config_path, dir.path());
        assert!(content.contains(EXPECTED_EDGE));
    }

    #[test]
    fn test_yaml_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        let config_path = dir.path().join("visualizer.yml");
        write_config(
            &config_path,
            &format!(
                r#"
visualizer_path: /opt/plantuml.jar
package_path: "{0}"
output_path: "{0}/graph.png"
repository_url: https://repo.maven.apache.org/maven2
"#,
                dir.path().display()
            ),
        );

        let content = run_and_read_diagram(&config_path, dir.path());
        assert!(content.contains(EXPECTED_EDGE));
    }

    #[test]
    fn test_toml_config() {
        let dir = TempDir::new().unwrap();
        create_test_project(dir.path());
        let config_path = dir.path().join("visualizer.toml");
        write_config(
            &config_path,
            &format!(
                r#"
visualizer_path = "/opt/plantuml.jar"
package_path = "{0}"
output_path = "{0}/graph.png"
repository_url = "https://repo.maven.apache.org/maven2"
"#,
                dir.path().display()
            ),
        );

        let content = run_and_read_diagram(&config_path, dir.path());
        assert!(content.contains(EXPECTED_EDGE));
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_missing_field_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.xml");
        write_config(
            &config_path,
            r#"<config>
    <visualizer_path>/opt/plantuml.jar</visualizer_path>
    <output_path>/tmp/graph.png</output_path>
    <repository_url>https://repo.maven.apache.org/maven2</repository_url>
</config>"#,
        );

        cargo_bin_cmd!("pom-visualizer")
            .arg(&config_path)
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Missing required config field 'package_path'",
            ));
    }

    #[test]
    fn test_invalid_yaml_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "invalid: yaml: [[[broken");

        cargo_bin_cmd!("pom-visualizer")
            .arg(&config_path)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        write_config(&config_path, "visualizer_path = ");

        cargo_bin_cmd!("pom-visualizer")
            .arg(&config_path)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_fixture_config_points_at_missing_package() {
        cargo_bin_cmd!("pom-visualizer")
            .arg(fixtures_path().join("config.xml"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid package path"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real.xml");
        write_config(&target, "<config/>");
        let link = dir.path().join("link.xml");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        cargo_bin_cmd!("pom-visualizer")
            .arg(&link)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}
