pub mod cli;
pub mod makefile;
