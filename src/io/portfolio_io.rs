use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::PortfolioConfig;
use crate::model::portfolio::Portfolio;
use crate::model::project::Project;

/// Name of the portfolio data file.
pub const PORTFOLIO_FILE: &str = "portfolio.toml";

/// Error type for portfolio I/O operations
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("not a portfolio: no portfolio.toml found (run `folio init` to create one)")]
    NotAPortfolio,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse portfolio.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("duplicate project id {id} in portfolio.toml")]
    DuplicateProjectId { id: u32 },
    #[error("project {id} has an empty title")]
    EmptyProjectTitle { id: u32 },
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Discover the portfolio by walking up from the given directory,
/// looking for a `portfolio.toml` file.
pub fn discover_portfolio(start: &Path) -> Result<PathBuf, PortfolioError> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PORTFOLIO_FILE).is_file() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(PortfolioError::NotAPortfolio);
        }
    }
}

/// Load a portfolio from the given root directory.
pub fn load_portfolio(root: &Path) -> Result<Portfolio, PortfolioError> {
    let file = root.join(PORTFOLIO_FILE);
    if !file.is_file() {
        return Err(PortfolioError::NotAPortfolio);
    }

    let text = fs::read_to_string(&file).map_err(|e| PortfolioError::ReadError {
        path: file.clone(),
        source: e,
    })?;
    let config: PortfolioConfig = toml::from_str(&text)?;
    validate_catalog(&config.projects)?;

    Ok(Portfolio {
        root: root.to_path_buf(),
        file,
        config,
    })
}

/// Check catalog invariants: ids unique, titles non-empty.
/// portfolio.toml is hand-authored, so these are load errors, not panics.
pub fn validate_catalog(projects: &[Project]) -> Result<(), PortfolioError> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id) {
            return Err(PortfolioError::DuplicateProjectId { id: project.id });
        }
        if project.title.trim().is_empty() {
            return Err(PortfolioError::EmptyProjectTitle { id: project.id });
        }
    }
    Ok(())
}
