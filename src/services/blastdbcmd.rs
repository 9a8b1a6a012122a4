use crate::domain::constants::BLASTDBCMD;
use crate::domain::models::Database;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Lists the sequence identifiers stored in a database.
///
/// Implementations never fail: a missing tool or a broken database yields
/// an empty list.
pub trait IdentifierSource {
    fn list_identifiers(&self, db: &Database) -> Vec<String>;
}

pub struct BlastDbCmd {
    program: PathBuf,
}

impl BlastDbCmd {
    pub fn new(bin_dir: Option<&Path>) -> Self {
        let program = match bin_dir {
            Some(dir) => dir.join(BLASTDBCMD),
            None => PathBuf::from(BLASTDBCMD),
        };
        Self { program }
    }

    /// Raw `path<TAB>title<TAB>type` listing of every database under `dir`.
    pub fn list_databases(&self, dir: &Path) -> Option<String> {
        let dir = dir.to_string_lossy().into_owned();
        self.run(&[
            "-recursive",
            "-list",
            dir.as_str(),
            "-list_outfmt",
            "%f\t%t\t%p",
        ])
    }

    fn run(&self, args: &[&str]) -> Option<String> {
        tracing::debug!(program = %self.program.display(), ?args, "running blastdbcmd");
        let output = match Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(o) => o,
            Err(e) => {
                tracing::warn!(program = %self.program.display(), error = %e, "could not run blastdbcmd");
                return None;
            }
        };
        if !output.status.success() {
            tracing::warn!(?args, status = %output.status, "blastdbcmd exited unsuccessfully");
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl IdentifierSource for BlastDbCmd {
    fn list_identifiers(&self, db: &Database) -> Vec<String> {
        match self.run(&["-entry", "all", "-db", db.name.as_str(), "-outfmt", "%a"]) {
            Some(out) => split_identifiers(&out),
            None => Vec::new(),
        }
    }
}

pub fn split_identifiers(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
