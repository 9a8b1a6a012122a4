#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Answers `-list` from `listing.tsv` beside itself and `-entry all -db X`
/// from `X.ids`; a database without an ids file fails like a broken one.
const FAKE_BLASTDBCMD: &str = r#"#!/bin/sh
here=$(dirname "$0")
if [ "$1" = "-recursive" ]; then
  cat "$here/listing.tsv"
  exit 0
fi
echo "$4" >> "$here/calls.log"
if [ -f "$4.ids" ]; then
  cat "$4.ids"
else
  echo "BLAST Database error: No alias or index file found" >&2
  exit 2
fi
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub db_dir: PathBuf,
    pub bin: PathBuf,
    pub config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let db_dir = tmp.path().join("db");
        let bin = tmp.path().join("bin");
        for dir in [&home, &db_dir, &bin] {
            fs::create_dir_all(dir).expect("create fixture dir");
        }

        let tool = bin.join("blastdbcmd");
        fs::write(&tool, FAKE_BLASTDBCMD).expect("write fake blastdbcmd");
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).expect("chmod tool");
        fs::write(bin.join("listing.tsv"), "").expect("write listing");

        let config = home.join("seqdoctor.toml");
        fs::write(&config, format!("database_dir = \"{}\"\n", db_dir.display()))
            .expect("write config");

        Self {
            _tmp: tmp,
            home,
            db_dir,
            bin,
            config,
        }
    }

    /// Isolated HOME, no config or bin flags.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("seqdoctor");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--config")
            .arg(&self.config)
            .arg("--bin")
            .arg(&self.bin);
        cmd
    }

    pub fn diagnose(&self) -> String {
        let out = self
            .cmd()
            .arg("diagnose")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    /// Adds a database to the fake listing; `sidecar` is `nsd`, `psd` or none.
    pub fn add_db(&self, stem: &str, kind: &str, sidecar: Option<&str>, ids: &[&str]) -> PathBuf {
        let name = self.db_dir.join(stem);
        if let Some(ext) = sidecar {
            fs::write(sidecar_path(&name, ext), b"").expect("write sidecar");
        }
        fs::write(sidecar_path(&name, "ids"), ids.join("\n")).expect("write ids");

        let listing = self.bin.join("listing.tsv");
        let mut rows = fs::read_to_string(&listing).expect("read listing");
        rows.push_str(&format!("{}\t{} title\t{}\n", name.display(), stem, kind));
        fs::write(listing, rows).expect("write listing");
        name
    }

    pub fn tool_calls(&self) -> Vec<String> {
        fs::read_to_string(self.bin.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn sidecar_path(name: &Path, ext: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", name.display(), ext))
}

/// Number of steps in a `diagnose` run, as printed in `[n/STEPS]` headers.
pub const DIAGNOSE_STEPS: usize = 6;

/// Text of step `n` up to the next step header.
pub fn section(out: &str, step: usize) -> String {
    let header = format!("[{}/{}]", step, DIAGNOSE_STEPS);
    let start = out.find(&header).expect("step header present");
    let rest = &out[start..];
    match rest[1..].find("\n[") {
        Some(end) => rest[..end + 1].to_string(),
        None => rest.to_string(),
    }
}
