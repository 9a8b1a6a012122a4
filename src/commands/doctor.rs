use crate::cli::{Cli, Commands};
use crate::domain::models::Settings;
use crate::services::blastdbcmd::BlastDbCmd;
use crate::services::catalog::resolve_catalog;
use crate::services::doctor::Doctor;
use anyhow::Context;
use std::io::Write;

pub fn handle_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let tool = BlastDbCmd::new(settings.bin.as_deref());
    let catalog = resolve_catalog(settings, &tool);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Diagnose => {
            let doctor = Doctor::new(
                &catalog,
                &tool,
                &settings.database_dir,
                &settings.config_path,
            );
            let found = doctor.diagnose(&mut out).context("writing diagnosis")?;
            tracing::info!(found, "diagnosis complete");
        }
        Commands::Databases => {
            for db in &catalog {
                writeln!(out, "{}\t{}\t{}", db.kind, db.title, db.name)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
