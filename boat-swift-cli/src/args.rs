//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// BOAT Swift 5 model post-processor.
#[derive(Parser, Debug)]
#[command(name = "boat-swift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Flatten allOf inheritance in a model graph document
    Flatten {
        /// Model graph document (JSON)
        input: PathBuf,

        /// Write the flattened graph here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on dangling ancestors and unknown model references
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        generator: GeneratorArgs,
    },
    /// Print the Swift declaration of every field after flattening
    Types {
        /// Model graph document (JSON)
        input: PathBuf,
    },
    /// Print generator metadata, template variables and supporting files
    Info {
        #[command(flatten)]
        generator: GeneratorArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct GeneratorArgs {
    /// HTTP client library
    #[arg(short, long)]
    pub library: Option<String>,

    /// Project name
    #[arg(long)]
    pub project_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flatten() {
        let cli = Cli::try_parse_from([
            "boat-swift",
            "-v",
            "flatten",
            "models.json",
            "--output",
            "flat.json",
            "--strict",
            "--library",
            "urlsession",
        ])
        .expect("Failed to parse args");

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Flatten {
                input,
                output,
                strict,
                generator,
            } => {
                assert_eq!(input, PathBuf::from("models.json"));
                assert_eq!(output, Some(PathBuf::from("flat.json")));
                assert!(strict);
                assert_eq!(generator.library.as_deref(), Some("urlsession"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_info_defaults() {
        let cli = Cli::try_parse_from(["boat-swift", "info"]).expect("Failed to parse args");
        match cli.command {
            Command::Info { generator } => {
                assert!(generator.library.is_none());
                assert!(generator.project_name.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_types_requires_input() {
        assert!(Cli::try_parse_from(["boat-swift", "types"]).is_err());
    }
}
