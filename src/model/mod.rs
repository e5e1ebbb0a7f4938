pub mod config;
pub mod portfolio;
pub mod post;
pub mod project;

pub use config::*;
pub use portfolio::*;
pub use post::*;
pub use project::*;
