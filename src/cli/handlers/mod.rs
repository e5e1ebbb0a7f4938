pub mod init;

pub use init::cmd_init;

use std::path::Path;

use crate::cli::commands::Commands;
use crate::cli::output;
use crate::io::portfolio_io::{discover_portfolio, load_portfolio};
use crate::model::Portfolio;

/// Dispatch a subcommand. Init writes a fresh portfolio.toml; every
/// other command loads the discovered portfolio first.
pub fn dispatch(
    command: Commands,
    json: bool,
    dir: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Init(args) => cmd_init(args, dir),
        Commands::Projects => {
            let portfolio = load(dir)?;
            output::print_projects(portfolio.projects(), json)?;
            Ok(())
        }
        Commands::Show(args) => {
            let portfolio = load(dir)?;
            let project = portfolio
                .project_by_id(args.id)
                .ok_or_else(|| format!("no project with id {}", args.id))?;
            output::print_project(project, json)?;
            Ok(())
        }
        Commands::Posts => {
            let portfolio = load(dir)?;
            output::print_posts(portfolio.posts(), json)?;
            Ok(())
        }
    }
}

fn load(dir: Option<&str>) -> Result<Portfolio, Box<dyn std::error::Error>> {
    let start = match dir {
        Some(d) => Path::new(d).to_path_buf(),
        None => std::env::current_dir()?,
    };
    let root = discover_portfolio(&start)?;
    Ok(load_portfolio(&root)?)
}
