use clap::Parser;
use maketools::cli::{exit_on_error, desc::{self, Desc}};

fn main() {
    env_logger::init();

    let args = Desc::parse();
    exit_on_error(desc::main(&args));
}
