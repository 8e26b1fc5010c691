use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "column-unifier")]
#[command(about = "Unify delivery address columns of an order spreadsheet")]
pub struct CliConfig {
    /// Input spreadsheet (CSV or XLSX); prompts when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output .xlsx file; prompts with a suggested name when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Print the built-in column rules as JSON and exit")]
    pub print_rules: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        let config =
            CliConfig::try_parse_from(["column-unifier", "-i", "pedidos.csv", "--output", "out.xlsx"])
                .unwrap();

        assert_eq!(config.input, Some(PathBuf::from("pedidos.csv")));
        assert_eq!(config.output, Some(PathBuf::from("out.xlsx")));
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_paths_are_optional() {
        let config = CliConfig::try_parse_from(["column-unifier", "--print-rules"]).unwrap();

        assert!(config.input.is_none());
        assert!(config.print_rules);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        // clap 已拒絕空字串參數
        assert!(CliConfig::try_parse_from(["column-unifier", "--input", ""]).is_err());

        let config = CliConfig {
            input: None,
            output: Some(PathBuf::new()),
            print_rules: false,
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
