//! # TRS-80 Level I BASIC
//!
//! Start with a program file to load and run it, or with no arguments for
//! the `READY` prompt.

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trs80", version, about = "TRS-80 Level I BASIC")]
struct Args {
    /// Program to load and run
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Write a log to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        if let Err(error) = trs80::term::init_log(args.log_level, path) {
            eprintln!("{}: {}", path.display(), error);
        }
    }
    trs80::term::main(args.file.as_deref());
}
