use clap::Parser;
use maketools::cli::{exit_on_error, targets::{self, Targets}};

fn main() {
    env_logger::init();

    let args = Targets::parse();
    exit_on_error(targets::main(&args));
}
