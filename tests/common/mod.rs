#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub data: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let data = tmp.path().join("data");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&data).expect("create data dir");
        Self {
            _tmp: tmp,
            home,
            data,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("orgcheck");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn write_csv(&self, name: &str, body: &str) -> PathBuf {
        let path = self.data.join(name);
        fs::write(&path, body).expect("write csv fixture");
        path
    }

    pub fn write_config(&self, body: &str) -> PathBuf {
        let path = self.home.join(".config/orgcheck/config.toml");
        fs::create_dir_all(path.parent().expect("config dir")).expect("create config dir");
        fs::write(&path, body).expect("write config");
        path
    }

    pub fn run_json(&self, csv: &PathBuf, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .arg(csv)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_text(&self, csv: &PathBuf, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .arg(csv)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }
}

/// Repo table as exported from the hosting service: clone URL, branch, then
/// the org chain from team up to company.
pub const REPOS_CSV: &str = "\
cloneUrl,branch,org1,org2,org3
git@git.example.com:web/site.git,main,web,platform,acme
git@git.example.com:web/api.git,main,web,platform,acme
git@git.example.com:ops/infra.git,main,ops,platform,acme
git@git.example.com:web/cdn.git,main,web,edge,acme
git@git.example.com:mobile/app.git,develop,mobile,,acme
";
