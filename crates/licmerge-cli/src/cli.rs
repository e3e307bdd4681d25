use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "licmerge",
    about = "Merge the non-standard license catalogs of several SBOM documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge license catalogs; the first document is the master
    Merge(MergeArgs),
    /// Check whether two license texts are equivalent
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// Document files (JSON), master first
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,
    /// TOML merge configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Skip secondary documents that cannot be read instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,
    /// Compare license texts byte for byte
    #[arg(long)]
    pub exact: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    pub first: PathBuf,
    pub second: PathBuf,
    #[arg(long)]
    pub exact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_merge() {
        let cli = Cli::try_parse_from(["licmerge", "merge", "a.json", "b.json"]).unwrap();
        if let Command::Merge(args) = cli.command {
            assert_eq!(args.documents, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
            assert!(!args.skip_unreadable);
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_merge_requires_documents() {
        assert!(Cli::try_parse_from(["licmerge", "merge"]).is_err());
    }

    #[test]
    fn parse_merge_options() {
        let cli = Cli::try_parse_from([
            "licmerge", "merge", "--config", "m.toml", "--skip-unreadable", "--exact", "a.json",
        ])
        .unwrap();
        if let Command::Merge(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("m.toml")));
            assert!(args.skip_unreadable);
            assert!(args.exact);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_compare() {
        let cli = Cli::try_parse_from(["licmerge", "compare", "a.txt", "b.txt"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.first, PathBuf::from("a.txt"));
            assert!(!args.exact);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["licmerge", "--verbose", "merge", "a.json"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["licmerge", "--format", "json", "merge", "a.json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
