use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, builder::styling::{AnsiColor, Styles}};
use colored::Colorize;

use crate::makefile::{Target, find_makefile, parse_file};

pub mod desc;
pub mod help;
pub mod targets;

pub const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().bold())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::Cyan.on_default().bold())
    .placeholder(AnsiColor::Cyan.on_default());

/// Where to read the makefile from
#[derive(Args, Debug, Clone, Default)]
pub struct Source {
    /// Read this makefile instead of looking for GNUmakefile, makefile or
    /// Makefile in the current directory
    #[clap(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

impl Source {
    pub fn makefile(&self) -> anyhow::Result<PathBuf> {
        match &self.file {
            Some(file) => Ok(file.clone()),
            None => find_makefile().context("No makefile found"),
        }
    }
}

pub fn load_targets(source: &Source, recursive: bool) -> anyhow::Result<Vec<Target>> {
    let makefile = source.makefile()?;
    log::debug!("using makefile {}", makefile.display());
    Ok(parse_file(&makefile, recursive)?)
}

/// Prints the error and exits with status 1
pub fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        eprintln!("{} {e:#}", "ERROR:".red().bold());
        std::process::exit(1);
    }
}
