mod common;

use common::MockGcs;
use serde_json::json;
use std::process::Output;
use tokio::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_compile-versions");

fn compile_versions(args: &[&str]) -> Command {
    let mut command = Command::new(BIN);
    command
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL")
        .env_remove("COMPILE_VERSIONS_BUCKET")
        .env_remove("COMPILE_VERSIONS_MATCH_GLOB")
        .env_remove("COMPILE_VERSIONS_ENDPOINT")
        .env_remove("COMPILE_VERSIONS_COMPONENTS_URL")
        .env_remove("COMPILE_VERSIONS_MIRROR_DIR");
    command
}

async fn run(args: &[&str]) -> Output {
    compile_versions(args)
        .output()
        .await
        .expect("failed to run compile-versions")
}

#[tokio::test(flavor = "multi_thread")]
async fn prints_sorted_unique_versions() {
    let mock = MockGcs::new("cloud-sdk-release")
        .with_page(&[
            "google-cloud-sdk-10.0.0-linux-x86_64.tar.gz",
            "google-cloud-sdk-9.0.0-linux-x86_64.tar.gz",
            "README.txt",
        ])
        .with_page(&["google-cloud-sdk-9.0.0-linux-x86_64.tar.gz"]);
    let endpoint = mock.spawn().await;

    let output = run(&["--endpoint", &endpoint]).await;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[\n  \"9.0.0\",\n  \"10.0.0\"\n]\n"
    );
    assert!(output.stderr.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_listing_prints_empty_array() {
    let mock = MockGcs::new("cloud-sdk-release");
    let endpoint = mock.spawn().await;

    let output = run(&["--endpoint", &endpoint, "list"]).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"[]\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn request_failure_exits_with_status_two() {
    let output = run(&["--endpoint", "http://127.0.0.1:1"]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("failed to list objects"), "stderr: {stderr}");
    assert_eq!(stderr.trim_end().lines().count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_exits_with_status_two() {
    let mock = MockGcs::new("cloud-sdk-release").failing_with(500);
    let endpoint = mock.spawn().await;

    let output = run(&["--endpoint", &endpoint]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("mock failure"));
}

#[tokio::test]
async fn lists_a_local_mirror() {
    let mirror = tempfile::tempdir().unwrap();
    for name in [
        "google-cloud-sdk-400.10.0-linux-x86_64.tar.gz",
        "google-cloud-sdk-400.2.0-linux-x86_64.tar.gz",
        "google-cloud-sdk-400.2.0-darwin-arm.tar.gz",
    ] {
        std::fs::write(mirror.path().join(name), b"tarball").unwrap();
    }

    let output = run(&["--mirror-dir", mirror.path().to_str().unwrap()]).await;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[\n  \"400.2.0\",\n  \"400.10.0\"\n]\n"
    );
}

#[tokio::test]
async fn missing_mirror_exits_with_status_two() {
    let output = run(&["--mirror-dir", "/nonexistent/compile-versions-mirror"]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn latest_prints_manifest_version() {
    let mock = MockGcs::new("cloud-sdk-release").with_manifest(json!({"version": "401.0.0"}));
    let endpoint = mock.spawn().await;
    let manifest = format!("{}/components-2.json", endpoint);

    let output = run(&["--components-url", &manifest, "latest"]).await;

    assert!(output.status.success());
    assert_eq!(output.stdout, b"401.0.0\n");
}

#[tokio::test]
async fn release_url_is_printed() {
    let output = run(&[
        "release-url",
        "--version",
        "400.1.2",
        "--os",
        "win32",
        "--arch",
        "x64",
    ])
    .await;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "https://dl.google.com/dl/cloudsdk/channels/rapid/downloads/google-cloud-sdk-400.1.2-windows-x86_64.zip\n"
    );
}

#[tokio::test]
async fn release_url_rejects_unknown_os() {
    let output = run(&["release-url", "--version", "400.1.2", "--os", "temple"]).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unexpected OS 'temple'"));
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread")]
async fn sigterm_cancels_in_flight_listing() {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;
    use std::process::Stdio;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    // accepts the listing request and never answers it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    let (connected_tx, connected_rx) = oneshot::channel();
    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let _ = connected_tx.send(());
        let _socket = socket;
        std::future::pending::<()>().await;
    });

    let child = compile_versions(&["--endpoint", &endpoint])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    tokio::time::timeout(Duration::from_secs(10), connected_rx)
        .await
        .expect("listing request never arrived")
        .unwrap();
    // give the signal listener time to install its handler
    tokio::time::sleep(Duration::from_millis(200)).await;

    let pid = Pid::from_raw(child.id().unwrap() as i32);
    kill(pid, Signal::SIGTERM).unwrap();

    let output = tokio::time::timeout(Duration::from_secs(10), child.wait_with_output())
        .await
        .expect("compile-versions did not exit after SIGTERM")
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "failed to list objects: Operation cancelled\n"
    );
}
