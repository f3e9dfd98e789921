use std::process::Command;

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_zoom-api-cli"));
    command
        .env("RUST_LOG", "error")
        .env_remove("ZOOM_API_KEY")
        .env_remove("ZOOM_API_SECRET")
        .env_remove("ZOOM_BASE_URL");
    command
}

#[test]
fn check_with_example_config_succeeds() {
    let config_path = format!("{}/examples/config.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = cli()
        .arg("--config")
        .arg(config_path)
        .arg("--log-level")
        .arg("error")
        .arg("check")
        .output()
        .expect("Failed to start zoom-api-cli binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(result["api_key"], "example-key");
    assert_eq!(result["base_url"], "https://api.zoom.us/v2");
}

#[test]
fn check_uses_env_credentials_without_config_file() {
    let output = cli()
        .env("ZOOM_API_KEY", "env-key")
        .env("ZOOM_API_SECRET", "env-secret")
        .arg("check")
        .output()
        .expect("Failed to start zoom-api-cli binary");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(result["api_key"], "env-key");
}

#[test]
fn check_without_credentials_fails() {
    let output = cli()
        .arg("check")
        .output()
        .expect("Failed to start zoom-api-cli binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("api_key"), "stderr: {stderr}");
}
