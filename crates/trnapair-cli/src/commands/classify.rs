use super::{read_inputs, write_pairs};
use crate::cli::ClassifyArgs;
use crate::config::{InputConfig, PartialConfig};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::info;
use trnapair::core::io::delimited::Delimiter;
use trnapair::core::pairing::category::PairingCategory;
use trnapair::engine::progress::ProgressReporter;
use trnapair::workflows::{self, classify::ClassificationResult};

pub fn run(args: ClassifyArgs) -> Result<()> {
    let partial_config = PartialConfig::load(args.input.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let input = partial_config.merge_for_classify(&args)?;

    let (codon_table, trna_table) = read_inputs(&input)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Classifying codon-anticodon pairs...");
    info!("Invoking the core classification workflow...");
    let result = workflows::classify::run(&codon_table, &trna_table, &reporter)?;

    let (trnas, codons) = result.matrices.shape();
    println!("Classified {} tRNA(s) against {} codon(s):", trnas, codons);
    for category in PairingCategory::ALL {
        println!(
            "  {:<16} {}",
            category.label(),
            result.matrices.count(category)
        );
    }

    if let Some(path) = &args.pairs {
        write_pairs(&input, &result, path)?;
    }
    if let Some(dir) = &args.matrix_dir {
        write_matrix_grids(&input, &result, dir)?;
    }

    Ok(())
}

fn write_matrix_grids(input: &InputConfig, result: &ClassificationResult, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let delimiter = input.delimiter.unwrap_or_default();
    let extension = match delimiter {
        Delimiter::Comma => "csv",
        Delimiter::Tab => "tsv",
    };

    for category in PairingCategory::ALL {
        let path = dir.join(format!("{}.{}", category.label(), extension));
        let grid = result.matrix_grid(category);
        info!("Writing {} matrix to {:?}", category, path);

        let writer = BufWriter::new(File::create(&path)?);
        input
            .file_format(&path)
            .write_rows(&grid.header, grid.rows.iter().map(Vec::as_slice), writer)
            .map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })?;
    }
    println!("✓ Pairing matrices written to: {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
        let codons = dir.join("codons.csv");
        let trnas = dir.join("trnas.tsv");
        fs::write(&codons, "codon,three.letter\nAAA,Lys\nAAG,Lys\nAAU,Asn\n").unwrap();
        fs::write(&trnas, "anticodon\tthree.letter\nUUU\tLys\nCUU\tLys\n").unwrap();
        (codons, trnas)
    }

    fn parse(argv: Vec<String>) -> ClassifyArgs {
        match Cli::parse_from(argv).command {
            Commands::Classify(args) => args,
            _ => panic!("Expected 'classify' subcommand"),
        }
    }

    #[test]
    fn classify_writes_pairs_and_matrix_grids() {
        let dir = tempdir().unwrap();
        let (codons, trnas) = write_inputs(dir.path());
        let pairs = dir.path().join("pairs.csv");
        let matrices = dir.path().join("matrices");

        let args = parse(vec![
            "trnapair".into(),
            "classify".into(),
            "--codons".into(),
            codons.display().to_string(),
            "--trnas".into(),
            trnas.display().to_string(),
            "--pairs".into(),
            pairs.display().to_string(),
            "--matrix-dir".into(),
            matrices.display().to_string(),
        ]);
        run(args).unwrap();

        let written = fs::read_to_string(&pairs).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next(),
            Some("category,trna.row,codon.col,anticodon,trna.three.letter,codon,codon.three.letter")
        );
        assert!(written.contains("cognate.wc,1,1,UUU,Lys,AAA,Lys"));
        assert!(written.contains("cognate.wobble,1,2,UUU,Lys,AAG,Lys"));
        assert!(written.contains("cognate.wc,2,2,CUU,Lys,AAG,Lys"));

        let wc = fs::read_to_string(matrices.join("cognate.wc.csv")).unwrap();
        assert_eq!(wc, "anticodon,AAA,AAG,AAU\nUUU,1,0,0\nCUU,0,1,0\n");
        assert!(matrices.join("cognate.wobble.csv").exists());
        assert!(matrices.join("nearcognate.csv").exists());
    }

    #[test]
    fn classify_reports_missing_anticodon_column() {
        let dir = tempdir().unwrap();
        let codons = dir.path().join("codons.csv");
        let trnas = dir.path().join("trnas.csv");
        fs::write(&codons, "codon,three.letter\nAAA,Lys\n").unwrap();
        fs::write(&trnas, "trna,three.letter\nUUU,Lys\n").unwrap();

        let args = parse(vec![
            "trnapair".into(),
            "classify".into(),
            "--codons".into(),
            codons.display().to_string(),
            "--trnas".into(),
            trnas.display().to_string(),
        ]);
        let err = run(args).unwrap_err();
        assert!(matches!(err, CliError::Trnapair(_)));
        assert!(err.to_string().contains("anticodon"));
    }

    #[test]
    fn classify_reports_unreadable_input_with_its_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.csv");
        let args = parse(vec![
            "trnapair".into(),
            "classify".into(),
            "--codons".into(),
            missing.display().to_string(),
            "--trnas".into(),
            missing.display().to_string(),
        ]);
        match run(args).unwrap_err() {
            CliError::FileParsing { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected file parsing error, got {:?}", other),
        }
    }
}
