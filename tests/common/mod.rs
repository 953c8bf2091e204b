//! Common test utilities for Skiff CLI tests.
//!
//! `TestEnv` gives each test an isolated temp directory with fake
//! platform binaries on PATH. The fakes append every invocation to a
//! log file, so tests can assert on the exact command sequence the
//! pipeline issued.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub struct TestEnv {
    dir: TempDir,
    bin_dir: PathBuf,
    log_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let bin_dir = dir.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let log_path = dir.path().join("commands.log");
        Self {
            dir,
            bin_dir,
            log_path,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.dir.path().join("skiff.toml"), contents).unwrap();
    }

    /// Install a fake CLI on PATH. Every invocation is logged; an
    /// invocation whose argument line contains one of `fail_on` exits 1.
    pub fn fake_cli(&self, name: &str, fail_on: &[&str]) {
        use std::os::unix::fs::PermissionsExt;

        let mut arms = String::new();
        for marker in fail_on {
            arms.push_str(&format!("  *\"{}\"*) exit 1 ;;\n", marker));
        }
        let script = format!(
            concat!(
                "#!/bin/sh\n",
                "echo \"$(basename \"$0\") $*\" >> \"{log}\"\n",
                "case \"$*\" in\n",
                "{arms}",
                "esac\n",
                "exit 0\n"
            ),
            log = self.log_path.display(),
            arms = arms,
        );

        let path = self.bin_dir.join(name);
        fs::write(&path, script).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }

    /// Run the skiff binary with stdin detached (no tty, no operator).
    pub fn skiff(&self, args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_skiff");
        let path_env = format!(
            "{}:{}",
            self.bin_dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        Command::new(bin)
            .args(args)
            .current_dir(self.dir.path())
            .env("PATH", path_env)
            .stdin(Stdio::null())
            .output()
            .unwrap()
    }

    /// Every fake-CLI invocation so far, in order.
    pub fn logged(&self) -> Vec<String> {
        match fs::read_to_string(&self.log_path) {
            Ok(contents) => contents.lines().map(String::from).collect(),
            Err(_) => Vec::new(),
        }
    }
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
