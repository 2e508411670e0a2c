mod defaults;

use crate::cli::{ClassifyArgs, ConcentrationsArgs, InputArgs};
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use trnapair::core::io::delimited::{DelimitedFile, Delimiter};
use trnapair::engine::config::{AggregationConfig, AggregationConfigBuilder};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialInputConfig {
    codons: Option<PathBuf>,
    trnas: Option<PathBuf>,
    delimiter: Option<Delimiter>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialAggregationConfig {
    abundance_column: Option<String>,
    total_trna: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    input: Option<PartialInputConfig>,
    aggregation: Option<PartialAggregationConfig>,
}

/// Resolved input locations and the delimiter override, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    pub codons: PathBuf,
    pub trnas: PathBuf,
    pub delimiter: Option<Delimiter>,
}

impl InputConfig {
    /// The configured delimiter, or the one implied by the file extension.
    pub fn file_format(&self, path: &Path) -> DelimitedFile {
        match self.delimiter {
            Some(delimiter) => DelimitedFile::new(delimiter),
            None => DelimitedFile::for_path(path),
        }
    }
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the config file when one is given, otherwise starts empty.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_for_classify(mut self, args: &ClassifyArgs) -> Result<InputConfig> {
        self.apply_set_values(&args.input.set_values)?;
        self.merge_input(&args.input)
    }

    pub fn merge_for_concentrations(
        mut self,
        args: &ConcentrationsArgs,
    ) -> Result<(InputConfig, AggregationConfig)> {
        self.apply_set_values(&args.input.set_values)?;
        let input = self.merge_input(&args.input)?;

        let defaults = DefaultsConfig::default();
        let file_config = self.aggregation.take().unwrap_or_default();
        let aggregation = AggregationConfigBuilder::new()
            .abundance_column(
                args.abundance_column
                    .clone()
                    .or(file_config.abundance_column)
                    .unwrap_or(defaults.abundance_column),
            )
            .total_trna(
                args.total_trna
                    .or(file_config.total_trna)
                    .unwrap_or(defaults.total_trna),
            )
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok((input, aggregation))
    }

    fn merge_input(&mut self, args: &InputArgs) -> Result<InputConfig> {
        let file_config = self.input.take().unwrap_or_default();

        let require = |cli: Option<&PathBuf>, file: Option<PathBuf>, kind: &str| {
            cli.cloned().or(file).ok_or_else(|| {
                CliError::Config(format!(
                    "A path for the {} table is required either in the config file (`input.{}`) or via --{}.",
                    kind, kind, kind
                ))
            })
        };

        Ok(InputConfig {
            codons: require(args.codons.as_ref(), file_config.codons, "codons")?,
            trnas: require(args.trnas.as_ref(), file_config.trnas, "trnas")?,
            delimiter: args.delimiter.map(Into::into).or(file_config.delimiter),
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "input.codons" => {
                    self.input.get_or_insert_with(Default::default).codons =
                        Some(PathBuf::from(value_str));
                }
                "input.trnas" => {
                    self.input.get_or_insert_with(Default::default).trnas =
                        Some(PathBuf::from(value_str));
                }
                "input.delimiter" => {
                    let delimiter = match value_str {
                        "comma" => Delimiter::Comma,
                        "tab" => Delimiter::Tab,
                        _ => {
                            return Err(CliError::Config(format!(
                                "Invalid delimiter for {}: {} (expected 'comma' or 'tab')",
                                key, value_str
                            )));
                        }
                    };
                    self.input.get_or_insert_with(Default::default).delimiter = Some(delimiter);
                }
                "aggregation.abundance-column" => {
                    self.aggregation
                        .get_or_insert_with(Default::default)
                        .abundance_column = Some(value_str.to_string());
                }
                "aggregation.total-trna" => {
                    self.aggregation
                        .get_or_insert_with(Default::default)
                        .total_trna = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
