use clap::Parser;

use crate::{cli::{STYLES, Source, load_targets}, makefile::Target};

/// Print makefile target list
///
/// Targets of included makefiles are listed too.
#[derive(Parser, Debug)]
#[clap(name = "make-targets", version, styles = STYLES, verbatim_doc_comment)]
pub struct Targets {
    #[clap(flatten)]
    source: Source,
}

pub fn main(args: &Targets) -> anyhow::Result<()> {
    let targets = load_targets(&args.source, true)?;
    println!("{}", format_targets(&targets));
    Ok(())
}

/// Space separated target names, sorted
pub fn format_targets(targets: &[Target]) -> String {
    let mut names = targets.iter().map(|t| t.name.as_str()).collect::<Vec<_>>();
    names.sort();
    names.join(" ")
}
