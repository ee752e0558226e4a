use clap::Parser;
use colored::*;
use kartoteka::api::RecordApi;
use kartoteka::commands::{CmdMessage, MessageLevel};
use kartoteka::config::RecordConfig;
use kartoteka::store::fs::FileStore;
use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

const PROMPT: &str = "Введите фамилию, имя, отчество, дату рождения (формат dd.mm.yyyy), номер телефона и пол (м/ж или m/f): ";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let builder = tracing_subscriber::fmt().with_writer(io::stderr);
    if verbose {
        builder.with_max_level(LevelFilter::DEBUG).init();
    } else {
        builder.with_env_filter(EnvFilter::from_default_env()).init();
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let mut config = RecordConfig::load(&dir)?;
    if let Some(ext) = cli.ext.as_deref() {
        config.set_file_ext(ext);
    }
    debug!(dir = %dir.display(), file_ext = config.get_file_ext(), "configured store");

    let store = FileStore::new(dir).with_file_ext(config.get_file_ext());
    let mut api = RecordApi::new(store);

    println!("{}", PROMPT);
    let line = read_input_line(io::stdin().lock())?;

    let result = api.ingest(&line)?;
    print_messages(&result.messages);
    Ok(())
}

/// Reads a single line without its terminator (`\n`, `\r\n` or a lone `\r`).
/// EOF reads as an empty line.
fn read_input_line<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}
