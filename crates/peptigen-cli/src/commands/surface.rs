use crate::cli::{SurfaceArgs, TableFormat};
use crate::error::{CliError, Result};
use indicatif::ProgressBar;
use peptigen::analysis::sasa::{CsvAreaFile, SasaSource};
use peptigen::analysis::surface::{
    self, EXPOSED_THRESHOLD, ExposedResidue, SURFACE_THRESHOLD, SurfaceResidue, SurfaceSummary,
};
use std::fmt::Write as _;
use std::time::Duration;
use tracing::info;

const DEFAULT_CHAIN: char = 'A';

pub fn run(args: SurfaceArgs) -> Result<()> {
    let chain = args.chain.unwrap_or(DEFAULT_CHAIN);

    info!("Loading per-residue surface areas from {:?}", &args.sasa);
    let raw_areas = CsvAreaFile.residue_areas(&args.sasa)?;

    let spinner = ProgressBar::new_spinner().with_message("Analyzing surface residues...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let rendered = if args.exposed {
        let threshold = args.threshold.unwrap_or(EXPOSED_THRESHOLD);
        let exposed = surface::exposed_residues(&raw_areas, chain, threshold);
        info!(residues = exposed.len(), "exposed-residue export complete");
        render_exposed(&exposed, args.format)?
    } else {
        let threshold = args.threshold.unwrap_or(SURFACE_THRESHOLD);
        let (table, summary) = surface::classify_surface(&raw_areas, chain, threshold);
        info!(residues = table.len(), "surface classification complete");
        render_classified(&table, &summary, args.format)?
    };
    spinner.finish_and_clear();

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("✓ Surface table written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn render_classified(
    table: &[SurfaceResidue],
    summary: &SurfaceSummary,
    format: TableFormat,
) -> Result<String> {
    match format {
        TableFormat::Json => {
            let value = serde_json::json!({ "table": table, "summary": summary });
            serde_json::to_string_pretty(&value).map_err(|e| CliError::Other(e.into()))
        }
        TableFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer
                .write_record(["chain", "residue_number", "residue_name", "sasa", "property"])
                .map_err(|e| CliError::Other(e.into()))?;
            for residue in table {
                writer
                    .write_record([
                        residue.chain.to_string(),
                        residue.residue_number.to_string(),
                        residue.residue_name.clone(),
                        residue.sasa.to_string(),
                        residue.property.to_string(),
                    ])
                    .map_err(|e| CliError::Other(e.into()))?;
            }
            let bytes = writer.into_inner().map_err(|e| CliError::Other(e.into()))?;
            String::from_utf8(bytes).map_err(|e| CliError::Other(e.into()))
        }
        TableFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{:<6} {:<8} {:<8} {:>10}  {}",
                "Chain", "Residue", "Name", "SASA (Å²)", "Property"
            );
            for residue in table {
                let _ = writeln!(
                    out,
                    "{:<6} {:<8} {:<8} {:>10.2}  {}",
                    residue.chain,
                    residue.residue_number,
                    residue.residue_name,
                    residue.sasa,
                    residue.property
                );
            }
            let _ = writeln!(
                out,
                "\n{} surface residues ({} hydrophobic, {} charged, {} polar/other); \
                 average SASA {} Å², max {} Å²",
                summary.total_surface_residues,
                summary.hydrophobic_count,
                summary.charged_count,
                summary.polar_count,
                summary.avg_sasa,
                summary.max_sasa
            );
            Ok(out)
        }
    }
}

fn render_exposed(exposed: &[ExposedResidue], format: TableFormat) -> Result<String> {
    match format {
        TableFormat::Json => {
            serde_json::to_string_pretty(exposed).map_err(|e| CliError::Other(e.into()))
        }
        TableFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for residue in exposed {
                writer
                    .serialize(residue)
                    .map_err(|e| CliError::Other(e.into()))?;
            }
            let bytes = writer.into_inner().map_err(|e| CliError::Other(e.into()))?;
            String::from_utf8(bytes).map_err(|e| CliError::Other(e.into()))
        }
        TableFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{:<6} {:<8} {:<8} {:>10}",
                "Chain", "Residue", "Name", "SASA (Å²)"
            );
            for residue in exposed {
                let _ = writeln!(
                    out,
                    "{:<6} {:<8} {:<8} {:>10.2}",
                    residue.chain, residue.residue_number, residue.residue_name, residue.sasa
                );
            }
            Ok(out)
        }
    }
}
