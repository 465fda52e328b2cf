use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Output of one CLI invocation.
pub struct Run {
    pub output: Output,
}

impl Run {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Panic with the captured streams unless the command succeeded.
    pub fn assert_success(&self) -> &Self {
        if !self.success() {
            panic!(
                "CLI command failed\nstdout: {}\nstderr: {}",
                self.stdout(),
                self.stderr()
            );
        }
        self
    }

    pub fn assert_failure(&self) -> &Self {
        if self.success() {
            panic!("CLI command should have failed\nstdout: {}", self.stdout());
        }
        self
    }
}

/// Run the CLI with an isolated HOME so each test gets its own session.
///
/// The process is spawned on the blocking pool so the mock server keeps
/// answering while we wait.
pub async fn run_cli(args: &[&str], home: &Path, api_url: &str) -> Run {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    let home = home.to_path_buf();
    let api_url = api_url.to_string();

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_eventia"));
        cmd.args(&args);
        cmd.env("HOME", &home);
        cmd.env("XDG_DATA_HOME", home.join("data"));
        cmd.env("EVENTIA_API_URL", &api_url);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        Run {
            output: cmd.output().expect("Failed to execute CLI"),
        }
    })
    .await
    .expect("CLI task panicked")
}

/// Where the session files land on Linux with the env set by [`run_cli`].
#[allow(dead_code)]
pub fn session_dir(home: &Path) -> PathBuf {
    home.join("data").join("eventia").join("session")
}
