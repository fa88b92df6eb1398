use clap::Parser;
use maketools::cli::{exit_on_error, help::{self, Help}};

fn main() {
    env_logger::init();

    let args = Help::parse();
    exit_on_error(help::main(&args));
}
