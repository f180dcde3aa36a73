//! Fatal setup failures of `run_report`.

use hats_domains::{run_report, Config, LogFormat, LogLevel};
use std::path::PathBuf;
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> Config {
    Config {
        path: dir.path().join("index.html"),
        largest: 3,
        driver_path: dir.path().join("no-such-geckodriver"),
        timeout_seconds: 2,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_missing_driver_is_fatal_but_file_is_created() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let output = config.path.clone();

    let err = run_report(config).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to start browser driver"), "{message}");
    assert!(message.contains("no-such-geckodriver"), "{message}");
    assert!(output.exists(), "output file is created before the pipeline runs");
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        path: PathBuf::from(dir.path()).join("missing-dir").join("index.html"),
        ..test_config(&dir)
    };

    let err = run_report(config).await.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to create"));
}

#[tokio::test]
async fn test_serve_port_in_use_is_fatal() {
    let dir = TempDir::new().unwrap();
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let config = Config {
        serve: true,
        port: taken.local_addr().unwrap().port(),
        ..test_config(&dir)
    };

    let err = run_report(config).await.unwrap_err();
    assert!(err.to_string().contains("Failed to bind report server"));
}

#[tokio::test]
async fn test_zero_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        timeout_seconds: 0,
        ..test_config(&dir)
    };
    let output = config.path.clone();

    assert!(run_report(config).await.is_err());
    assert!(!output.exists());
}
