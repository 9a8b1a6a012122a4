use crate::domain::constants::{DIAGNOSE_STEPS, MAX_SAMPLE_IDS};
use crate::domain::models::Finding;
use std::io::{self, Write};

pub fn progress(out: &mut impl Write, step: usize, label: &str) -> io::Result<()> {
    writeln!(out, "\n[{}/{}] {}", step, DIAGNOSE_STEPS, label)
}

pub fn finding(out: &mut impl Write, f: &Finding<'_>) -> io::Result<()> {
    write!(
        out,
        "  - {} ({}): {}",
        f.database.title,
        f.database.name,
        f.kind.describe()
    )?;
    if !f.sample.is_empty() {
        write!(out, " [{}]", sample_line(&f.sample))?;
    }
    writeln!(out)
}

fn sample_line(ids: &[&str]) -> String {
    let shown = ids
        .iter()
        .take(MAX_SAMPLE_IDS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if ids.len() > MAX_SAMPLE_IDS {
        format!("{} (+{} more)", shown, ids.len() - MAX_SAMPLE_IDS)
    } else {
        shown
    }
}

pub fn line(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "  {}", text)
}

/// Closes a check: `ok` when it found nothing, otherwise the advice line.
pub fn conclude(out: &mut impl Write, found: usize, hint: &str) -> io::Result<()> {
    if found == 0 {
        line(out, "ok")
    } else {
        line(out, &format!("hint: {}", hint))
    }
}
