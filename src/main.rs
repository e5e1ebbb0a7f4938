use clap::Parser;
use folio::cli::commands::Cli;
use folio::cli::handlers;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        // No subcommand: launch the TUI
        None => folio::tui::run(cli.dir.as_deref()),
        Some(command) => handlers::dispatch(command, cli.json, cli.dir.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
