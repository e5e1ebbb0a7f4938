use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio", about = concat!("folio v", env!("CARGO_PKG_VERSION"), " - your portfolio in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different portfolio directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter portfolio.toml in the current directory
    Init(InitArgs),
    /// List the project catalog
    Projects,
    /// Show full details for one project
    Show(ShowArgs),
    /// List blog posts
    Posts,
}

#[derive(Args)]
pub struct InitArgs {
    /// Profile name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Overwrite an existing portfolio.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project id
    pub id: u32,
}
