use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "kartoteka")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Reads one personal record from stdin and appends it to <surname>.txt",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the per-surname record files (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Record file extension, overrides kartoteka.json (e.g. txt, .csv)
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
