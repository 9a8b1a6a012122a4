use crate::domain::models::{Database, DatabaseEntry, DatabaseKind, Settings};
use crate::services::blastdbcmd::BlastDbCmd;
use std::path::Path;

/// Databases to inspect, in catalog order.
///
/// Entries declared in the config file take precedence; otherwise the
/// database directory is scanned with `blastdbcmd -list`.
pub fn resolve_catalog(settings: &Settings, tool: &BlastDbCmd) -> Vec<Database> {
    if !settings.databases.is_empty() {
        return settings
            .databases
            .iter()
            .map(|e| from_entry(&settings.database_dir, e))
            .collect();
    }
    match tool.list_databases(&settings.database_dir) {
        Some(raw) => {
            let dbs = parse_listing(&raw);
            tracing::info!(count = dbs.len(), dir = %settings.database_dir.display(), "scanned database directory");
            dbs
        }
        None => {
            tracing::warn!(dir = %settings.database_dir.display(), "could not list databases; catalog is empty");
            Vec::new()
        }
    }
}

fn from_entry(database_dir: &Path, entry: &DatabaseEntry) -> Database {
    let path = Path::new(&entry.name);
    let name = if path.is_absolute() {
        entry.name.clone()
    } else {
        database_dir.join(path).to_string_lossy().into_owned()
    };
    Database {
        title: entry
            .title
            .clone()
            .unwrap_or_else(|| default_title(&name)),
        name,
        kind: entry.kind,
    }
}

fn default_title(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

/// Parses `path<TAB>title<TAB>type` lines.
pub fn parse_listing(raw: &str) -> Vec<Database> {
    let mut out = Vec::new();
    for line in raw.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
        let Some((name, rest)) = line.split_once('\t') else {
            tracing::debug!(line, "skipping malformed listing line");
            continue;
        };
        let Some((title, kind)) = rest.rsplit_once('\t') else {
            tracing::debug!(line, "skipping malformed listing line");
            continue;
        };
        let Some(kind) = DatabaseKind::parse(kind) else {
            tracing::debug!(line, "skipping database of unknown type");
            continue;
        };
        if is_volume_name(name) {
            tracing::debug!(name, "skipping volume of a multi-volume database");
            continue;
        }
        let title = title.trim();
        out.push(Database {
            name: name.to_string(),
            title: if title.is_empty() {
                default_title(name)
            } else {
                title.to_string()
            },
            kind,
        });
    }
    out
}

/// `nt.00`, `nt.012`: members of a multi-volume database, listed via their alias.
fn is_volume_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, suffix)) => {
            !stem.is_empty()
                && (2..=3).contains(&suffix.len())
                && suffix.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
