use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::{json, Value};

/// A taskhint command isolated from the user's config and environment
#[allow(dead_code)]
pub fn taskhint(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("taskhint");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("TASKHINT_CONFIG")
        .env_remove("TASKHINT_SERVER")
        .env_remove("TASKHINT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[allow(dead_code)]
pub fn sample_tasks() -> Value {
    json!([
        {"id": 1, "title": "Buy milk and eggs", "category": "shopping"},
        {"id": 2, "title": "Read a book", "category": "personal"},
        {"id": 3, "task": "Morning run", "description": "5k around the park"}
    ])
}

#[allow(dead_code)]
pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
