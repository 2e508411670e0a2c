use super::{read_inputs, write_pairs};
use crate::cli::ConcentrationsArgs;
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use tracing::info;
use trnapair::core::pairing::category::PairingCategory;
use trnapair::engine::progress::ProgressReporter;
use trnapair::workflows;

pub fn run(args: ConcentrationsArgs) -> Result<()> {
    let partial_config = PartialConfig::load(args.input.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let (input, aggregation) = partial_config.merge_for_concentrations(&args)?;

    let (codon_table, trna_table) = read_inputs(&input)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Computing tRNA concentrations from column \"{}\" ({} µM total pool)...",
        aggregation.abundance_column, aggregation.total_trna
    );
    info!("Invoking the core concentration workflow...");
    let result = workflows::concentrations::run(&codon_table, &trna_table, &aggregation, &reporter)?;

    let table = &result.concentrations;
    println!("Conversion factor: {:.6e}", table.conversion_factor());
    for category in PairingCategory::ALL {
        println!("  {:<16} {:.6e} M", category.label(), table.total(category));
    }

    info!(
        "Writing {} concentration record(s) to {:?}",
        table.records().len(),
        &args.output
    );
    input
        .file_format(&args.output)
        .write_records_to_path(table.records(), &args.output)
        .map_err(|e| CliError::FileParsing {
            path: args.output.clone(),
            source: e.into(),
        })?;
    println!("✓ Concentration table written to: {}", args.output.display());

    if let Some(path) = &args.pairs {
        write_pairs(&input, &result.classification, path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn parse(argv: &[String]) -> ConcentrationsArgs {
        match Cli::parse_from(argv).command {
            Commands::Concentrations(args) => args,
            _ => panic!("Expected 'concentrations' subcommand"),
        }
    }

    #[test]
    fn concentrations_are_written_per_codon() {
        let dir = tempdir().unwrap();
        let codons = dir.path().join("codons.csv");
        let trnas = dir.path().join("trnas.csv");
        let output = dir.path().join("out.tsv");
        let config = dir.path().join("trnapair.toml");
        fs::write(&codons, "codon,three.letter\nAAA,Lys\nAAG,Lys\n").unwrap();
        fs::write(
            &trnas,
            "anticodon,three.letter,copies\nUUU,Lys,3\nCUU,Lys,1\n",
        )
        .unwrap();
        fs::write(
            &config,
            format!(
                "[input]\ncodons = {:?}\ntrnas = {:?}\n\n[aggregation]\nabundance-column = \"copies\"\ntotal-trna = 4e6\n",
                codons.display().to_string(),
                trnas.display().to_string()
            ),
        )
        .unwrap();

        let argv: Vec<String> = vec![
            "trnapair".into(),
            "concentrations".into(),
            "-c".into(),
            config.display().to_string(),
            "-o".into(),
            output.display().to_string(),
        ];
        run(parse(&argv)).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines[0],
            "codon\tthree.letter\tWCcognate.conc\twobblecognate.conc\tnearcognate.conc"
        );
        assert_eq!(lines[1], "AAA\tLys\t3.0\t0.0\t0.0");
        assert_eq!(lines[2], "AAG\tLys\t1.0\t3.0\t0.0");
    }

    #[test]
    fn missing_abundance_column_fails_the_command() {
        let dir = tempdir().unwrap();
        let codons = dir.path().join("codons.csv");
        let trnas = dir.path().join("trnas.csv");
        fs::write(&codons, "codon,three.letter\nAAA,Lys\n").unwrap();
        fs::write(&trnas, "anticodon,three.letter\nUUU,Lys\n").unwrap();

        let argv: Vec<String> = vec![
            "trnapair".into(),
            "concentrations".into(),
            "--codons".into(),
            codons.display().to_string(),
            "--trnas".into(),
            trnas.display().to_string(),
            "-o".into(),
            dir.path().join("out.csv").display().to_string(),
        ];
        let err = run(parse(&argv)).unwrap_err();
        assert!(err.to_string().contains("gene.copy.number"));
        assert!(!dir.path().join("out.csv").exists());
    }
}
