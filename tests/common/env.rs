//! Test environment builder for isolated wjs-deploy testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a wjs-deploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Fake server layout used by every profile in the generated config.
///
/// ```text
/// <tmp>/janeway/                Janeway root
/// <tmp>/venv/bin/{pip,python,git}  recording tools (venv/bin is first on PATH)
/// <tmp>/vassals/janeway.ini     reload marker
/// <tmp>/calls.log               one line per tool invocation
/// <tmp>/config.toml
/// ```
pub struct TestEnv {
    pub dir: TempDir,
    bin: PathBuf,
}

const RECORDING_TOOL: &str = r#"#!/bin/sh
echo "$(basename "$0") $*" >> "$WJS_TEST_LOG"
if [ -n "$WJS_TEST_FAIL" ]; then
  case "$*" in
    *"$WJS_TEST_FAIL"*) echo "simulated failure" >&2; exit 3 ;;
  esac
fi
exit 0
"#;

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let env = Self {
            dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_wjs-deploy")),
        };

        std::fs::create_dir_all(env.root()).unwrap();
        std::fs::create_dir_all(env.path("vassals")).unwrap();
        std::fs::create_dir_all(env.path("venv/bin")).unwrap();
        for tool in ["pip", "python", "git"] {
            env.write_tool(tool);
        }
        env.write_config("");
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn root(&self) -> PathBuf {
        self.path("janeway")
    }

    pub fn marker(&self) -> PathBuf {
        self.path("vassals/janeway.ini")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("config.toml")
    }

    /// Write config.toml: every wjs profile points at the fake tree, then
    /// `extra` is appended verbatim.
    pub fn write_config(&self, extra: &str) {
        self.write_profiles(&["prod-wjs", "pp-wjs", "dev-wjs", "test-wjs"], extra);
    }

    /// Like `write_config`, but the janeway profiles use the fake tree too
    pub fn write_config_with_janeway(&self, extra: &str) {
        self.write_profiles(
            &[
                "prod-janeway",
                "pp-janeway",
                "dev-janeway",
                "prod-wjs",
                "pp-wjs",
                "dev-wjs",
                "test-wjs",
            ],
            extra,
        );
    }

    fn write_profiles(&self, profiles: &[&str], extra: &str) {
        let mut content = String::new();
        for profile in profiles {
            content.push_str(&format!(
                "[profiles.{}]\nroot = {:?}\nvenv_bin = {:?}\nreload_marker = {:?}\n\n",
                profile,
                self.root().display().to_string(),
                self.path("venv/bin").display().to_string(),
                self.marker().display().to_string(),
            ));
        }
        content.push_str(extra);
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Tool invocations recorded so far
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let config = self.config_path();
        let mut search_path = vec![self.path("venv/bin")];
        if let Some(path) = std::env::var_os("PATH") {
            search_path.extend(std::env::split_paths(&path));
        }
        let search_path = std::env::join_paths(search_path).expect("Failed to build PATH");

        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.dir.path())
            .arg("--config")
            .arg(&config)
            .args(args)
            .env_remove("SSH_ORIGINAL_COMMAND")
            .env_remove("WJS_DEPLOY_CONFIG")
            .env_remove("WJS_DEPLOY_PACKAGE_INDEX")
            .env_remove("WJS_DEPLOY_PACKAGE_NAME")
            .env_remove("RUST_LOG")
            .env("WJS_TEST_LOG", self.path("calls.log"))
            .env("WJS_TEST_FAIL", "")
            .env("PATH", search_path);

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute wjs-deploy");
        output_to_result(output)
    }

    fn write_tool(&self, name: &str) {
        let path = self.path(&format!("venv/bin/{}", name));
        std::fs::write(&path, RECORDING_TOOL).unwrap();
        make_executable(&path);
    }
}

/// Run the binary without any fake environment (no `--config`)
pub fn run_bare(args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wjs-deploy"));
    cmd.args(args)
        .env_remove("SSH_ORIGINAL_COMMAND")
        .env_remove("WJS_DEPLOY_CONFIG")
        .env_remove("RUST_LOG");
    for (key, value) in env_vars {
        cmd.env(key, value);
    }
    output_to_result(cmd.output().expect("Failed to execute wjs-deploy"))
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
