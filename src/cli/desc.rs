use clap::Parser;

use crate::{cli::{STYLES, Source, load_targets}, makefile::Target};

/// Print the description of a makefile target
///
/// An empty line is printed if the target is unknown or has no description.
#[derive(Parser, Debug)]
#[clap(name = "make-desc", version, styles = STYLES, verbatim_doc_comment)]
pub struct Desc {
    /// Name of the target to describe
    #[clap(value_name = "TARGET")]
    targets: Vec<String>,

    #[clap(flatten)]
    source: Source,
}

pub fn main(args: &Desc) -> anyhow::Result<()> {
    let [target] = args.targets.as_slice() else {
        anyhow::bail!("You must pass target on command line");
    };

    let targets = load_targets(&args.source, true)?;
    println!("{}", describe(&targets, target));
    Ok(())
}

/// Description of the first target named `name`, empty if not found
pub fn describe<'a>(targets: &'a [Target], name: &str) -> &'a str {
    targets
        .iter()
        .find(|t| t.name == name)
        .map(|t| t.description.as_str())
        .unwrap_or_default()
}
