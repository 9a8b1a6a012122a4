use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Nucleotide,
    Protein,
}

impl DatabaseKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "nucleotide" => Some(DatabaseKind::Nucleotide),
            "protein" => Some(DatabaseKind::Protein),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Nucleotide => "nucleotide",
            DatabaseKind::Protein => "protein",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pre-built database as enumerated by the catalog.
///
/// `name` is the path stem handed to `blastdbcmd -db`; sidecar files live
/// next to it as `<name>.nsd` / `<name>.psd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    pub name: String,
    pub title: String,
    pub kind: DatabaseKind,
}

#[derive(Debug, Clone)]
pub struct IdentifierSet {
    pub database: Database,
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    ImproperIndex,
    NumericIds,
    DuplicateIds,
    ProblematicIds,
}

impl FindingKind {
    pub fn describe(&self) -> &'static str {
        match self {
            FindingKind::ImproperIndex => "improperly formatted database index",
            FindingKind::NumericIds => "numeric sequence ids",
            FindingKind::DuplicateIds => "duplicate sequence ids",
            FindingKind::ProblematicIds => "problematic sequence id format",
        }
    }
}

/// Rendered as soon as it is found; never collected into a report.
#[derive(Debug)]
pub struct Finding<'a> {
    pub kind: FindingKind,
    pub database: &'a Database,
    pub sample: Vec<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionStatus {
    pub database_dir_readable: bool,
    pub config_file_writable: bool,
    pub database_dir_writable: bool,
}

impl PermissionStatus {
    pub fn consistent(&self) -> bool {
        self.database_dir_readable && self.config_file_writable && self.database_dir_writable
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub database_dir: Option<PathBuf>,
    /// Directory holding the BLAST+ binaries; `PATH` lookup when unset.
    #[serde(default)]
    pub bin: Option<PathBuf>,
    #[serde(default)]
    pub databases: Vec<DatabaseEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseEntry {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: DatabaseKind,
}

/// Configuration after merging the config file with command line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub database_dir: PathBuf,
    pub bin: Option<PathBuf>,
    pub databases: Vec<DatabaseEntry>,
}
