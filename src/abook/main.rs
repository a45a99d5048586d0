use abook::api::AbookApi;
use abook::config::AbookConfig;
use abook::error::Result;
use abook::logging;
use abook::session::Session;
use abook::store::fs_backend::FsBackend;
use clap::Parser;
use std::io;
use tracing::debug;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(&cli)?;
    let book_path = cli.book.clone().unwrap_or_else(|| config.book_file.clone());
    let color = config.color && !cli.no_color;
    debug!(book = %book_path.display(), color, "starting session");

    println!("address book\n");

    let api = AbookApi::open(FsBackend::new(book_path), config.corrupt_book_policy())?;
    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(api, stdin.lock(), stdout.lock()).with_color(color);
        session.run()?;
    }

    println!("bye.");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AbookConfig> {
    match cli.config.as_ref() {
        Some(path) => AbookConfig::load(path),
        None => match AbookConfig::default_path() {
            Some(path) => AbookConfig::load(path),
            None => Ok(AbookConfig::default()),
        },
    }
}
