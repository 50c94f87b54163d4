//! Integration tests for the spylog commands (show, get, keys)

use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const SLF4J: &str = "net.sf.log4jdbc.log.slf4j.Slf4jSpyLogDelegator";
const LOG4J2: &str = "net.sf.log4jdbc.log.log4j2.Log4j2SpyLogDelegator";

/// Run spylog from an empty directory with no inherited log4jdbc settings
fn spylog(cwd: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("spylog");
    cmd.current_dir(cwd)
        .env_remove("log4jdbc.spylogdelegator.name")
        .env_remove("LOG4JDBC_SPYLOGDELEGATOR_NAME")
        .env_remove("spylogdelegator.name")
        .env_remove("SPYLOGDELEGATOR_NAME")
        .env_remove("log4jdbc.log4j2.properties.file")
        .env_remove("LOG4JDBC_LOG4J2_PROPERTIES_FILE")
        .env_remove("SPYLOG_RESOURCE_PATH")
        .env("SPYLOG_LOG", "error");
    cmd
}

fn write_properties(dir: &TempDir, name: &str, body: &str) {
    std::fs::write(dir.path().join(name), body).unwrap();
}

#[test]
fn test_get_default_delegator() {
    let temp_dir = TempDir::new().unwrap();

    spylog(temp_dir.path())
        .args(["get", "log4jdbc.spylogdelegator.name"])
        .assert()
        .success()
        .stdout(format!("{LOG4J2}\n"));
}

#[test]
fn test_get_from_properties_file_in_resource_dir() {
    let temp_dir = TempDir::new().unwrap();
    let resources = TempDir::new().unwrap();
    write_properties(
        &resources,
        "test.properties",
        &format!("log4jdbc.spylogdelegator.name={SLF4J}\n"),
    );

    spylog(temp_dir.path())
        .arg("--properties-file")
        .arg("/test.properties")
        .arg("--resource-dir")
        .arg(resources.path())
        .args(["get", "spylogdelegator.name", "--source"])
        .assert()
        .success()
        .stdout(format!("{SLF4J} (from properties file)\n"));
}

#[test]
fn test_default_properties_file_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_properties(
        &temp_dir,
        "log4jdbc.log4j2.properties",
        "log4jdbc.dump.sql.maxlinelength=0\n",
    );

    spylog(temp_dir.path())
        .args(["get", "log4jdbc.dump.sql.maxlinelength"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_env_fallback_when_properties_file_missing() {
    let temp_dir = TempDir::new().unwrap();

    spylog(temp_dir.path())
        .env("log4jdbc.log4j2.properties.file", "/none")
        .env("LOG4JDBC_SPYLOGDELEGATOR_NAME", SLF4J)
        .args(["get", "log4jdbc.spylogdelegator.name", "--source"])
        .assert()
        .success()
        .stdout(format!("{SLF4J} (from environment)\n"));
}

#[test]
fn test_set_override_wins() {
    let temp_dir = TempDir::new().unwrap();

    spylog(temp_dir.path())
        .env("LOG4JDBC_SPYLOGDELEGATOR_NAME", SLF4J)
        .args(["get", "log4jdbc.spylogdelegator.name"])
        .args(["--set", "log4jdbc.spylogdelegator.name=custom.Delegator"])
        .assert()
        .success()
        .stdout("custom.Delegator\n");
}

#[test]
fn test_get_unknown_key_fails() {
    let temp_dir = TempDir::new().unwrap();

    spylog(temp_dir.path())
        .args(["get", "log4jdbc.no.such.key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_show_text() {
    let temp_dir = TempDir::new().unwrap();

    spylog(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "log4jdbc.spylogdelegator.name = {LOG4J2} (from default)"
        )))
        .stdout(predicate::str::contains("log4jdbc.debug.stack.prefix (not set)"))
        .stdout(predicate::str::contains("loaded: (not found)"));
}

#[test]
fn test_show_json() {
    let temp_dir = TempDir::new().unwrap();
    write_properties(
        &temp_dir,
        "log4jdbc.log4j2.properties",
        "log4jdbc.trim.sql=false\nnot a pair\n",
    );

    let output = spylog(temp_dir.path())
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["spyLogDelegatorName"], LOG4J2);
    assert_eq!(json["settings"]["log4jdbc.trim.sql"]["value"], "false");
    assert_eq!(json["settings"]["log4jdbc.trim.sql"]["source"], "properties_file");
    assert_eq!(json["propertiesFile"]["entries"], 1);
    assert_eq!(json["propertiesFile"]["requestedFrom"], "default");
}

#[test]
fn test_keys_lists_catalogue() {
    let temp_dir = TempDir::new().unwrap();

    spylog(temp_dir.path())
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("log4jdbc.spylogdelegator.name"))
        .stdout(predicate::str::contains("log4jdbc.drivers"));
}

#[test]
fn test_malformed_set_argument_rejected() {
    let temp_dir = TempDir::new().unwrap();

    spylog(temp_dir.path())
        .args(["show", "--set", "no-equals-sign"])
        .assert()
        .failure();
}
