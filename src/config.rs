//! Command line configuration.

use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for gitdex.
#[derive(Debug, Clone, Parser)]
#[command(name = "gitdex", version, about, long_about = None)]
pub struct Config {
    /// Repository directories, listed in page order
    #[arg(required = true)]
    pub repodirs: Vec<PathBuf>,

    /// Prefix for the favicon and stylesheet links
    #[arg(long, default_value = "")]
    pub relpath: String,

    /// Page title, and fallback description for repositories without one
    #[arg(long, default_value = "Repositories")]
    pub description: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_positional_args() {
        // Arrange & Act
        let config = Config::try_parse_from(["gitdex", "a", "b.git"]).expect("parse");

        // Assert
        assert_eq!(
            config.repodirs,
            vec![PathBuf::from("a"), PathBuf::from("b.git")]
        );
        assert_eq!(config.relpath, "");
        assert_eq!(config.description, "Repositories");
    }

    #[test]
    fn test_config_requires_at_least_one_repository() {
        // Arrange & Act
        let result = Config::try_parse_from(["gitdex"]);

        // Assert
        assert!(result.is_err(), "no repository arguments should be rejected");
    }

    #[test]
    fn test_config_flags() {
        // Arrange & Act
        let config = Config::try_parse_from([
            "gitdex",
            "--relpath",
            "../",
            "--description",
            "My repos",
            "repo",
        ])
        .expect("parse");

        // Assert
        assert_eq!(config.relpath, "../");
        assert_eq!(config.description, "My repos");
        assert_eq!(config.repodirs, vec![PathBuf::from("repo")]);
    }
}
