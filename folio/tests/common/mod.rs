//! Shared integration-test harness: runs the `folio` binary against the
//! fixture sites and talks to `folio serve` over HTTP.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};

/// Path to the binary under test.
pub const BIN: &str = env!("CARGO_BIN_EXE_folio");

/// Absolute path of a fixture file or directory.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Runs `folio` to completion with the given arguments.
///
/// `FOLIO_*` variables from the outer environment are cleared so flag
/// defaults apply.
#[allow(clippy::missing_panics_doc)]
pub fn run_folio(args: &[&str]) -> Output {
    let mut cmd = std::process::Command::new(BIN);
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("FOLIO_") {
            cmd.env_remove(key);
        }
    }
    cmd.args(args).output().expect("failed to run folio")
}

/// A running `folio serve` on an ephemeral port.
///
/// The child process is killed on drop.
pub struct FolioServer {
    child: Child,
    /// `http://127.0.0.1:PORT`
    pub base_url: String,
    /// Client for requests against `base_url`.
    pub client: reqwest::Client,
}

impl FolioServer {
    /// Starts the server for the site at `root`.
    ///
    /// Reads stderr until the "HTTP server listening" line to learn the
    /// bound port.
    #[allow(clippy::missing_panics_doc)]
    pub async fn start(root: &Path) -> Self {
        let mut child = Command::new(BIN)
            .args([
                "serve",
                "--bind",
                "127.0.0.1:0",
                "--root",
                root.to_str().expect("non-UTF-8 fixture path"),
                "--color",
                "never",
                "-v",
            ])
            .env_remove("FOLIO_LOG_LEVEL")
            .env_remove("FOLIO_LOG_FORMAT")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .expect("failed to spawn folio");

        let stderr = child.stderr.take().expect("stderr not captured");
        let mut reader = BufReader::new(stderr);
        let mut line = String::new();
        let mut port: Option<u16> = None;

        let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
        while tokio::time::Instant::now() < deadline {
            line.clear();
            let n = tokio::time::timeout(Duration::from_secs(5), reader.read_line(&mut line))
                .await
                .expect("timed out waiting for server startup")
                .expect("failed to read stderr");
            assert!(n > 0, "server exited before printing listening address");

            if line.contains("HTTP server listening") {
                if let Some(start) = line.find("127.0.0.1:") {
                    let digits: String = line[start + "127.0.0.1:".len()..]
                        .chars()
                        .take_while(char::is_ascii_digit)
                        .collect();
                    port = digits.parse().ok();
                }
                break;
            }
        }

        // Keep draining stderr so the child never blocks on a full pipe.
        tokio::spawn(async move {
            let mut sink = String::new();
            while matches!(reader.read_line(&mut sink).await, Ok(n) if n > 0) {
                sink.clear();
            }
        });

        let port = port.expect("failed to discover server port from stderr");
        Self {
            child,
            base_url: format!("http://127.0.0.1:{port}"),
            client: reqwest::Client::new(),
        }
    }

    /// Issues a GET for `path`.
    #[allow(clippy::missing_panics_doc)]
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("request failed")
    }

    /// Sends SIGTERM and waits for the process to exit.
    #[cfg(unix)]
    #[allow(clippy::missing_panics_doc)]
    pub async fn terminate(self) -> std::process::ExitStatus {
        // Close pooled keep-alive connections so shutdown does not wait on them.
        let Self { mut child, client, .. } = self;
        drop(client);

        let pid = child.id().expect("server already exited");
        let kill = std::process::Command::new("kill")
            .args(["-TERM", &pid.to_string()])
            .status()
            .expect("failed to run kill");
        assert!(kill.success(), "kill -TERM {pid} failed");

        tokio::time::timeout(Duration::from_secs(10), child.wait())
            .await
            .expect("server did not stop after SIGTERM")
            .expect("failed to wait for server")
    }

    /// Stops the server.
    pub async fn shutdown(mut self) {
        let _ = self.child.kill().await;
    }
}
