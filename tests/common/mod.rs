//! Test environment for running the objview binary in isolation.
//!
//! Each `TestEnv` owns a temp directory used as the working directory and as
//! the user config home, so no real configuration leaks into a test.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running an objview command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    dir: TempDir,
    envs: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            envs: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the working directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the user-level config file.
    pub fn write_user_config(&self, content: &str) {
        self.write("config-home/objview/config.toml", content);
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_objview"));
        cmd.args(args)
            .current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config-home"))
            .env("NO_COLOR", "1")
            .env("TERM", "xterm-256color")
            .env("LC_ALL", "en_US.UTF-8")
            .env_remove("RUST_LOG");
        for key in [
            "OBJVIEW_EXPAND_LEVEL",
            "OBJVIEW_EXPAND_PATHS",
            "OBJVIEW_SHOW_NONENUMERABLE",
            "OBJVIEW_SORT_KEYS",
            "OBJVIEW_COLOR",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run objview");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// A small document with every kind of JSON value.
pub const SAMPLE_JSON: &str = r#"{
  "name": "objview",
  "tags": ["tree", "cli"],
  "nested": { "deep": { "x": 1 } },
  "empty": {},
  "none": null
}"#;
