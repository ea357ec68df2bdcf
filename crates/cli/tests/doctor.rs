use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn doctor_json(workdir: &std::path::Path, config: &str) -> (bool, Value) {
    let output = Command::cargo_bin("refnet")
        .expect("binary")
        .current_dir(workdir)
        .args(["doctor", "--json", "--config", config])
        .output()
        .expect("command run");

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    (output.status.success(), body)
}

#[test]
fn reports_missing_graphviz() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("refnet.toml"),
        "[layout]\nprogram = \"refnet-no-such-layout-program\"\n\n[[clusters]]\nname = \"X\"\naliases = [\"x\"]\n",
    )
    .unwrap();

    let (ok, body) = doctor_json(temp.path(), "refnet.toml");

    assert!(!ok);
    assert_eq!(body["config_ok"], true);
    assert_eq!(body["clusters"], 1);
    assert_eq!(body["graphviz_ok"], false);
    assert!(body["graphviz_error"].as_str().unwrap().contains("not available"));
}

#[test]
fn reports_invalid_config() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("refnet.toml"),
        "[weights]\nmin_width = 4.0\nmax_width = 1.0\n",
    )
    .unwrap();

    let (ok, body) = doctor_json(temp.path(), "refnet.toml");

    assert!(!ok);
    assert_eq!(body["config_ok"], false);
    assert!(body["config_error"].as_str().unwrap().contains("min_width"));
}
