use clap::{Parser, ValueEnum};
use colored::Colorize;

use crate::{cli::{STYLES, Source, load_targets}, makefile::Target};

/// Print makefile help
///
/// One line per target: its name, its description and its dependencies.
/// Descriptions are taken from the comment at the end of the target line,
/// e.g. `build: clean # Build the project`.
#[derive(Parser, Debug)]
#[clap(name = "make-help", version, styles = STYLES, verbatim_doc_comment)]
pub struct Help {
    /// Parse root makefile only
    #[clap(short, long)]
    root: bool,

    /// Don't print targets without comment
    #[clap(short, long)]
    mute: bool,

    /// Output format
    #[clap(long, value_enum)]
    format: Option<OutputFormat>,

    #[clap(flatten)]
    source: Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(ValueEnum)]
pub enum OutputFormat {
    Json,
}

pub fn main(args: &Help) -> anyhow::Result<()> {
    let targets = load_targets(&args.source, !args.root)?;

    match args.format {
        Some(OutputFormat::Json) => {
            let entries = targets
                .iter()
                .filter(|t| !(args.mute && t.description.is_empty()))
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string(&entries)?);
        }
        None => println!("{}", format_help(&targets, args.mute)),
    }

    Ok(())
}

/// Formats targets as aligned help lines
///
/// Names are padded to the longest name, muted targets included, so that
/// descriptions line up.
pub fn format_help(targets: &[Target], mute: bool) -> String {
    let indent = targets
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0);

    targets
        .iter()
        .filter(|t| !(mute && t.description.is_empty()))
        .map(|t| {
            let padding = " ".repeat(indent - t.name.chars().count());
            let mut line = format!("{}{padding}", t.name.bright_yellow());
            if !t.description.is_empty() {
                line.push(' ');
                line.push_str(&t.description);
            }
            if !t.dependencies.is_empty() {
                line.push_str(&format!(" [{}]", t.dependencies.join(", ")));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
