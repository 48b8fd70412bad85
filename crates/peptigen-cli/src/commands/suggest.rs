use crate::cli::{ReportFormat, SuggestArgs};
use crate::config::PartialAnalysisConfig;
use crate::error::{CliError, Result};
use indicatif::ProgressBar;
use peptigen::core::io::pdb::has_pdb_extension;
use peptigen::workflows::analyze::{self, AnalysisReport};
use std::fmt::Write as _;
use std::time::Duration;
use tracing::info;

pub fn run(args: SuggestArgs) -> Result<()> {
    if !has_pdb_extension(&args.input) {
        return Err(CliError::Argument(format!(
            "'{}' is not a .pdb file",
            args.input.display()
        )));
    }

    let partial = match &args.config {
        Some(path) => PartialAnalysisConfig::from_file(path)?,
        None => PartialAnalysisConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial.merge_with_cli(&args)?;

    info!("Loading input structure from {:?}", &args.input);
    let pdb_text = std::fs::read_to_string(&args.input)?;

    let spinner = ProgressBar::new_spinner().with_message("Analyzing structure...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let report = analyze::run(&pdb_text, &config);
    spinner.finish_and_clear();
    let report = report?;

    let rendered = match args.format {
        ReportFormat::Text => render_text(&report),
        ReportFormat::Json => {
            serde_json::to_string_pretty(&report).map_err(|e| CliError::Other(e.into()))?
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("✓ Report written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Primary sequence (chain {}, {} residues):",
        report.structure.chain,
        report.structure.len()
    );
    let _ = writeln!(out, "{}", report.structure.sequence);

    if let Some(surface) = &report.surface {
        let summary = &surface.summary;
        let _ = writeln!(out, "\nSurface analysis:");
        let _ = writeln!(
            out,
            "  Total surface residues: {}",
            summary.total_surface_residues
        );
        let _ = writeln!(out, "  Hydrophobic: {}", summary.hydrophobic_count);
        let _ = writeln!(out, "  Charged: {}", summary.charged_count);
        let _ = writeln!(out, "  Polar/Other: {}", summary.polar_count);
        let _ = writeln!(out, "  Average SASA: {} Å²", summary.avg_sasa);
        let _ = writeln!(out, "  Max SASA: {} Å²", summary.max_sasa);
    } else {
        let _ = writeln!(out, "\nSurface analysis: not available");
    }

    for (i, candidate) in report.candidates.iter().enumerate() {
        let _ = writeln!(out, "\nPeptide {}: {}", i + 1, candidate.sequence);
        for (key, value) in candidate.properties.iter() {
            let _ = writeln!(out, "  {}: {}", key, value);
        }
        let _ = writeln!(out, "  {}", candidate.explanation);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use peptigen::design::candidates::suggest_peptides;
    use peptigen::workflows::analyze::{AnalysisConfigBuilder, run as run_analysis};

    fn fixture_pdb() -> String {
        let names = ["MET", "LYS", "THR", "ALA", "TYR", "ILE", "ALA", "LYS", "GLN", "ARG"];
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                format!(
                    "ATOM  {:>5}  CA  {:<3} A{:>4}       0.000   0.000   0.000  1.00  0.00",
                    i + 1,
                    name,
                    i + 1
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn render_text_includes_sequence_and_candidates() {
        let config = AnalysisConfigBuilder::new()
            .chain('A')
            .strategy_name("OpenAI")
            .num_candidates(2)
            .build()
            .unwrap();
        let report = run_analysis(&fixture_pdb(), &config).unwrap();
        let rendered = render_text(&report);
        assert!(rendered.contains("MKTAYIAKQR"));
        assert!(rendered.contains("Peptide 1:"));
        assert!(rendered.contains("Peptide 2:"));
        assert!(rendered.contains("Surface analysis: not available"));
    }

    #[test]
    fn report_serializes_to_json_with_property_maps() {
        let candidates = suggest_peptides("MKTAYIAKQRQISF", &[], "Groq", 1, None);
        let json = serde_json::to_value(&candidates).unwrap();
        assert!(json[0]["properties"]["Surface Target"].is_string());
        assert_eq!(json[0]["properties"]["SASA"], "N/A");
    }
}
