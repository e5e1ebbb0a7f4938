use std::path::PathBuf;

use super::config::PortfolioConfig;
use super::post::Post;
use super::project::Project;

/// How many recent posts the home view shows.
pub const MAX_RECENT_POSTS: usize = 5;

/// A fully loaded portfolio
#[derive(Debug)]
pub struct Portfolio {
    /// Directory the portfolio was loaded from
    pub root: PathBuf,
    /// Path to portfolio.toml
    pub file: PathBuf,
    /// Parsed portfolio.toml
    pub config: PortfolioConfig,
}

impl Portfolio {
    /// The project catalog, in display order.
    pub fn projects(&self) -> &[Project] {
        &self.config.projects
    }

    /// All posts, in authored order.
    pub fn posts(&self) -> &[Post] {
        &self.config.posts
    }

    /// The first few posts for the home view.
    pub fn recent_posts(&self) -> &[Post] {
        let n = self.config.posts.len().min(MAX_RECENT_POSTS);
        &self.config.posts[..n]
    }

    /// Look up a project by its id.
    pub fn project_by_id(&self, id: u32) -> Option<&Project> {
        self.config.projects.iter().find(|p| p.id == id)
    }
}
