use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::post::Post;
use super::project::Project;

/// Everything parsed from portfolio.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub ui: UiConfig,
}

/// The [profile] section: who the portfolio belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    /// Shown as an availability badge on the home view when non-empty,
    /// e.g. "Available for new projects".
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github: String,
    /// Path or URL to a downloadable CV, shown with the social links.
    #[serde(default)]
    pub cv: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides from [ui.colors], hex strings like "#FB4196".
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-tag colors from [ui.tag_colors].
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            tag_colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_config() {
        let config: PortfolioConfig = toml::from_str(
            r#"[profile]
name = "Ada"
"#,
        )
        .unwrap();
        assert_eq!(config.profile.name, "Ada");
        assert!(config.projects.is_empty());
        assert!(config.posts.is_empty());
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn test_parse_projects_with_optional_link() {
        let config: PortfolioConfig = toml::from_str(
            r#"[profile]
name = "Ada"

[[projects]]
id = 1
title = "A"
description = "first"
link = "https://a.example"
tags = ["X"]

[[projects]]
id = 2
title = "B"
description = "second"
"#,
        )
        .unwrap();
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.projects[0].link.as_deref(), Some("https://a.example"));
        assert_eq!(config.projects[0].tags, vec!["X".to_string()]);
        assert_eq!(config.projects[1].link, None);
        assert!(config.projects[1].tags.is_empty());
    }

    #[test]
    fn test_parse_posts_and_ui() {
        // Hex color values contain `"#`, which would close an r#""# string
        let config: PortfolioConfig = toml::from_str(
            r##"[profile]
name = "Ada"

[[posts]]
slug = "hello"
title = "Hello, world"
date = "2025-05-14"
summary = "First post"
tags = ["meta"]

[ui]
show_key_hints = false

[ui.colors]
highlight = "#FF00FF"

[ui.tag_colors]
rust = "#DEA584"
"##,
        )
        .unwrap();
        assert_eq!(config.posts.len(), 1);
        assert_eq!(config.posts[0].display_date(), "May 14, 2025");
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF00FF");
        assert_eq!(config.ui.tag_colors.get("rust").unwrap(), "#DEA584");
    }
}
