use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use licmerge_compare::{
    diff_license_texts, DiffLine, EquivalenceConfig, EquivalenceMode, EquivalencePredicate,
};
use licmerge_merge::{
    CatalogMerger, Document, InputReadError, JsonDocument, MergeConfig, MergeOutcome,
    ReadErrorPolicy, RemapKind,
};
use licmerge_types::{Catalog, CatalogEntry, DocumentId};
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => cmd_merge(args, &cli.format),
        Command::Compare(args) => cmd_compare(args, &cli.format),
    }
}

/// A document whose file could not be read. Reported through the merge so
/// the configured read-error policy applies to it.
struct UnreadableDocument {
    id: DocumentId,
    reason: String,
}

impl Document for UnreadableDocument {
    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn license_catalog(&self) -> Result<Catalog, InputReadError> {
        Err(InputReadError::Unavailable(self.reason.clone()))
    }
}

fn load_documents(paths: &[PathBuf]) -> Vec<Box<dyn Document>> {
    paths
        .iter()
        .map(|path| {
            let id = DocumentId::new(path.display().to_string());
            match fs::read_to_string(path) {
                Ok(source) => Box::new(JsonDocument::new(id, source)) as Box<dyn Document>,
                Err(e) => Box::new(UnreadableDocument {
                    id,
                    reason: e.to_string(),
                }),
            }
        })
        .collect()
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MergeConfig> {
    let Some(path) = path else {
        return Ok(MergeConfig::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    MergeConfig::from_toml_str(&source).with_context(|| format!("loading config {}", path.display()))
}

pub fn merge_files(args: &MergeArgs) -> anyhow::Result<MergeOutcome> {
    let mut config = load_config(args.config.as_deref())?;
    if args.skip_unreadable {
        config.on_read_error = ReadErrorPolicy::Skip;
    }
    if args.exact {
        config.equivalence.mode = EquivalenceMode::Exact;
    }
    debug!(?config, "merge configuration");

    let documents = load_documents(&args.documents);
    // An unreadable master is reported by the merge itself.
    let master = documents
        .first()
        .and_then(|d| d.license_catalog().ok())
        .unwrap_or_default();
    let mut allocator = config.allocator.build(&master)?;

    let merger = CatalogMerger::with_config(config.equivalence.build(), config);
    let outcome = merger.merge(&documents, &mut allocator)?;
    Ok(outcome)
}

fn cmd_merge(args: MergeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let outcome = merge_files(&args)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => print_outcome(&outcome),
    }
    Ok(())
}

fn print_outcome(outcome: &MergeOutcome) {
    println!(
        "{} Merged {} documents into {} licenses",
        "✓".green().bold(),
        outcome.stats.documents.to_string().bold(),
        outcome.catalog.len().to_string().bold()
    );
    for entry in outcome.catalog.iter() {
        match entry {
            CatalogEntry::Concrete(license) => println!(
                "  {}  {}  {}",
                license.id().to_string().yellow(),
                license.digest().short_hex().dimmed(),
                license.name().unwrap_or("")
            ),
            CatalogEntry::NoAssertion => println!("  {}", entry.id().to_string().dimmed()),
        }
    }

    for remap in &outcome.remaps {
        println!("\n{} {}", "Remap".bold(), remap.document.to_string().cyan());
        if remap.table.is_empty() {
            println!("  (no licenses)");
        }
        for row in remap.table.iter() {
            let kind = match row.kind {
                RemapKind::Deduplicated => "duplicate".blue(),
                RemapKind::Renamed => "added".green(),
            };
            println!(
                "  {} → {}  ({})",
                row.original_id(),
                row.target.to_string().yellow(),
                kind
            );
        }
    }

    for skipped in &outcome.skipped {
        println!(
            "\n{} skipped {}: {}",
            "!".red().bold(),
            skipped.document.to_string().bold(),
            skipped.reason
        );
    }
}

fn cmd_compare(args: CompareArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let first = fs::read_to_string(&args.first)
        .with_context(|| format!("reading {}", args.first.display()))?;
    let second = fs::read_to_string(&args.second)
        .with_context(|| format!("reading {}", args.second.display()))?;

    let mut config = EquivalenceConfig::default();
    if args.exact {
        config.mode = EquivalenceMode::Exact;
    }
    let equivalent = config.build().is_equivalent(&first, &second)?;
    let diff = diff_license_texts(&first, &second);

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "equivalent": equivalent,
                "similarity": diff.similarity,
                "additions": diff.additions(),
                "deletions": diff.deletions(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if equivalent {
                println!("{} Licenses are equivalent", "✓".green().bold());
            } else {
                println!("{} Licenses differ", "✗".red().bold());
            }
            println!("  Similarity: {:.1}%", diff.similarity * 100.0);
            for hunk in &diff.hunks {
                println!("{}", format!("@@ -{} +{} @@", hunk.old_start, hunk.new_start).cyan());
                for line in &hunk.lines {
                    match line {
                        DiffLine::Context(l) => println!(" {l}"),
                        DiffLine::Removed(l) => println!("{}", format!("-{l}").red()),
                        DiffLine::Added(l) => println!("{}", format!("+{l}").green()),
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn args(documents: Vec<PathBuf>) -> MergeArgs {
        MergeArgs {
            documents,
            config: None,
            skip_unreadable: false,
            exact: false,
        }
    }

    #[test]
    fn merge_two_files() {
        let dir = tempfile::tempdir().unwrap();
        let master = write(
            &dir,
            "master.json",
            r#"{"licenses": [{"id": "LicenseRef-4", "text": "Copy freely."}]}"#,
        );
        let child = write(
            &dir,
            "child.json",
            r#"{"licenses": [
                {"id": "LicenseRef-1", "text": "copy  FREELY."},
                {"id": "LicenseRef-2", "text": "Do not copy."}
            ]}"#,
        );

        let outcome = merge_files(&args(vec![master, child.clone()])).unwrap();
        let ids: Vec<String> = outcome.catalog.identifiers().map(String::from).collect();
        assert_eq!(ids, vec!["LicenseRef-4", "LicenseRef-5"]);

        let table = outcome
            .remap_for(&DocumentId::new(child.display().to_string()))
            .unwrap();
        let map = table.to_id_map();
        assert_eq!(map["LicenseRef-1"], "LicenseRef-4");
        assert_eq!(map["LicenseRef-2"], "LicenseRef-5");
    }

    #[test]
    fn exact_flag_disables_normalization() {
        let dir = tempfile::tempdir().unwrap();
        let master = write(&dir, "m.json", r#"{"licenses": [{"id": "A", "text": "X y"}]}"#);
        let child = write(&dir, "c.json", r#"{"licenses": [{"id": "B", "text": "x Y"}]}"#);
        let mut a = args(vec![master, child]);
        a.exact = true;
        let outcome = merge_files(&a).unwrap();
        assert_eq!(outcome.catalog.len(), 2);
    }

    #[test]
    fn missing_secondary_fails_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let master = write(&dir, "m.json", r#"{"licenses": []}"#);
        let missing = dir.path().join("missing.json");
        assert!(merge_files(&args(vec![master, missing])).is_err());
    }

    #[test]
    fn missing_secondary_skipped_on_request() {
        let dir = tempfile::tempdir().unwrap();
        let master = write(&dir, "m.json", r#"{"licenses": [{"id": "A", "text": "X"}]}"#);
        let missing = dir.path().join("missing.json");
        let child = write(&dir, "c.json", r#"{"licenses": [{"id": "B", "text": "Y"}]}"#);
        let mut a = args(vec![master, missing, child]);
        a.skip_unreadable = true;

        let outcome = merge_files(&a).unwrap();
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.catalog.len(), 2);
    }

    #[test]
    fn config_file_applies() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(&dir, "merge.toml", "[allocator]\nprefix = \"LicenseRef-merged-\"\n");
        let master = write(&dir, "m.json", r#"{"licenses": []}"#);
        let child = write(&dir, "c.json", r#"{"licenses": [{"id": "B", "text": "Y"}]}"#);
        let mut a = args(vec![master, child]);
        a.config = Some(config);

        let outcome = merge_files(&a).unwrap();
        let ids: Vec<String> = outcome.catalog.identifiers().map(String::from).collect();
        assert_eq!(ids, vec!["LicenseRef-merged-1"]);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(&dir, "merge.toml", "on_read_error = 3\n");
        let master = write(&dir, "m.json", r#"{"licenses": []}"#);
        let mut a = args(vec![master]);
        a.config = Some(config);
        assert!(merge_files(&a).is_err());
    }
}
