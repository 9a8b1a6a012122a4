//! The six-step consistency run.
//!
//! `Doctor::diagnose` builds a fresh [`RunContext`] and then runs the checks
//! in a fixed order (index format, numeric ids, duplicate ids, id format,
//! permissions). Findings are written as soon as they are found; within a
//! check nucleotide databases come before protein ones, each in catalog
//! order. A database may show up under several checks.

use crate::domain::constants::{NUCLEOTIDE_SIDECAR_EXT, PROTEIN_SIDECAR_EXT};
use crate::domain::models::{Database, DatabaseKind, Finding, FindingKind, IdentifierSet};
use crate::services::blastdbcmd::IdentifierSource;
use crate::services::{checks, output, permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const HINT_INDEX: &str =
    "rebuild these databases with `makeblastdb -parse_seqids` so sequences can be fetched by id";
const HINT_NUMERIC: &str =
    "BLAST+ reads numeric ids as GI numbers; give them a non-numeric prefix and rebuild";
const HINT_DUPLICATE: &str =
    "sequence retrieval by id is ambiguous; make the ids unique and rebuild";
const HINT_FORMAT: &str =
    "BLAST+ rewrites `>prefix|id` style ids; rename them (gi| and bbs| are fine) and rebuild";
const HINT_PERMISSIONS: &str =
    "the database directory must be readable and writable, and the config file writable, by this user";

/// Per-run state. Rebuilt on every `diagnose`, never shared between runs.
#[derive(Debug)]
pub struct RunContext {
    pub invalid: Vec<Database>,
    pub nucleotide: Vec<IdentifierSet>,
    pub protein: Vec<IdentifierSet>,
}

impl RunContext {
    /// Databases without a sidecar index are set aside and never queried
    /// for identifiers.
    pub fn init(catalog: &[Database], source: &dyn IdentifierSource) -> Self {
        let (valid, invalid): (Vec<&Database>, Vec<&Database>) =
            catalog.iter().partition(|db| has_sidecar_index(db));
        let invalid: Vec<Database> = invalid.into_iter().cloned().collect();
        let nucleotide = collect_identifier_sets(&valid, DatabaseKind::Nucleotide, source);
        let protein = collect_identifier_sets(&valid, DatabaseKind::Protein, source);
        tracing::info!(
            invalid = invalid.len(),
            nucleotide = nucleotide.len(),
            protein = protein.len(),
            "database index built"
        );
        Self {
            invalid,
            nucleotide,
            protein,
        }
    }

    fn identifier_sets(&self) -> impl Iterator<Item = &IdentifierSet> {
        self.nucleotide.iter().chain(self.protein.iter())
    }
}

fn collect_identifier_sets(
    valid: &[&Database],
    kind: DatabaseKind,
    source: &dyn IdentifierSource,
) -> Vec<IdentifierSet> {
    valid
        .iter()
        .filter(|db| db.kind == kind)
        .map(|db| {
            let ids = source.list_identifiers(db);
            tracing::debug!(db = %db.name, count = ids.len(), "listed identifiers");
            IdentifierSet {
                database: (*db).clone(),
                ids,
            }
        })
        .collect()
}

fn sidecar_path(db: &Database, ext: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", db.name, ext))
}

pub fn has_sidecar_index(db: &Database) -> bool {
    sidecar_path(db, NUCLEOTIDE_SIDECAR_EXT).exists()
        || sidecar_path(db, PROTEIN_SIDECAR_EXT).exists()
}

pub struct Doctor<'a> {
    catalog: &'a [Database],
    source: &'a dyn IdentifierSource,
    database_dir: &'a Path,
    config_file: &'a Path,
}

impl<'a> Doctor<'a> {
    pub fn new(
        catalog: &'a [Database],
        source: &'a dyn IdentifierSource,
        database_dir: &'a Path,
        config_file: &'a Path,
    ) -> Self {
        Self {
            catalog,
            source,
            database_dir,
            config_file,
        }
    }

    /// Runs all six steps and returns the number of findings printed.
    ///
    /// Only a failing `out` ends the run early.
    pub fn diagnose(&self, out: &mut impl Write) -> io::Result<usize> {
        output::progress(out, 1, "Indexing databases..")?;
        let ctx = RunContext::init(self.catalog, self.source);
        output::line(out, &catalog_summary(self.catalog.len(), &ctx))?;

        let mut total = 0;

        output::progress(
            out,
            2,
            "Inspecting databases for proper sequence id indexing..",
        )?;
        total += self.check_index_format(out, &ctx)?;

        output::progress(out, 3, "Inspecting databases for numeric sequence ids..")?;
        total += self.check_identifier_sets(
            out,
            &ctx,
            FindingKind::NumericIds,
            checks::numeric_ids,
            HINT_NUMERIC,
        )?;

        output::progress(out, 4, "Inspecting databases for duplicate sequence ids..")?;
        total += self.check_identifier_sets(
            out,
            &ctx,
            FindingKind::DuplicateIds,
            duplicate_offenders,
            HINT_DUPLICATE,
        )?;

        output::progress(out, 5, "Inspecting databases for problematic sequence ids..")?;
        total += self.check_identifier_sets(
            out,
            &ctx,
            FindingKind::ProblematicIds,
            checks::problematic_ids,
            HINT_FORMAT,
        )?;

        output::progress(out, 6, "Checking file permissions..")?;
        total += self.check_permissions(out)?;

        writeln!(out)?;
        match total {
            0 => writeln!(out, "No problems found.")?,
            1 => writeln!(out, "1 problem found.")?,
            n => writeln!(out, "{} problems found.", n)?,
        }
        Ok(total)
    }

    fn check_index_format(&self, out: &mut impl Write, ctx: &RunContext) -> io::Result<usize> {
        for db in &ctx.invalid {
            output::finding(
                out,
                &Finding {
                    kind: FindingKind::ImproperIndex,
                    database: db,
                    sample: Vec::new(),
                },
            )?;
        }
        output::conclude(out, ctx.invalid.len(), HINT_INDEX)?;
        Ok(ctx.invalid.len())
    }

    fn check_identifier_sets(
        &self,
        out: &mut impl Write,
        ctx: &RunContext,
        kind: FindingKind,
        offenders: for<'s> fn(&'s [String]) -> Vec<&'s str>,
        hint: &str,
    ) -> io::Result<usize> {
        let mut found = 0;
        for set in ctx.identifier_sets() {
            let sample = offenders(&set.ids);
            if sample.is_empty() {
                continue;
            }
            output::finding(
                out,
                &Finding {
                    kind,
                    database: &set.database,
                    sample,
                },
            )?;
            found += 1;
        }
        output::conclude(out, found, hint)?;
        Ok(found)
    }

    fn check_permissions(&self, out: &mut impl Write) -> io::Result<usize> {
        let status = permissions::query(self.database_dir, self.config_file);
        let found = usize::from(!status.consistent());
        if found > 0 {
            writeln!(out, "  - inconsistent file permissions")?;
        }
        output::conclude(out, found, HINT_PERMISSIONS)?;
        Ok(found)
    }
}

fn catalog_summary(total: usize, ctx: &RunContext) -> String {
    format!(
        "{} {} ({} nucleotide, {} protein, {} without sequence id index)",
        total,
        if total == 1 { "database" } else { "databases" },
        ctx.nucleotide.len(),
        ctx.protein.len(),
        ctx.invalid.len()
    )
}

fn duplicate_offenders(ids: &[String]) -> Vec<&str> {
    if checks::has_duplicates(ids) {
        checks::duplicate_ids(ids)
    } else {
        Vec::new()
    }
}
