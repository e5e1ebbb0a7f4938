use std::fs;
use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::portfolio_io::PORTFOLIO_FILE;

const PORTFOLIO_TOML_TEMPLATE: &str = r##"[profile]
name = "{name}"
headline = ""
bio = ""
location = ""
availability = ""
email = ""
github = ""
cv = ""
linkedin = ""
twitter = ""

# --- Projects ---
# Catalog order is display order. Ids must be unique.
#
[[projects]]
id = 1
title = "Example Project"
description = "A short one-line summary"
image = "static/images/example.png"
details = """
A longer writeup shown in the detail view. What it does, why it
exists, and what it is built with.
"""
link = "https://example.com"
tags = ["rust"]

# --- Posts ---
# Newest first; the home view shows the top five.
#
# [[posts]]
# slug = "hello-world"
# title = "Hello, world"
# date = "2025-01-01"
# summary = "A first post"
# tags = ["meta"]

# --- UI Customization ---
# Uncomment and edit to override defaults.
#
# [ui]
# show_key_hints = true
#
# [ui.colors]
# background = "#0A0E1A"
# highlight = "#53C2FF"
#
# [ui.tag_colors]
# rust = "#DEA584"
"##;

/// Create a starter portfolio.toml in the given directory (or cwd).
pub fn cmd_init(args: InitArgs, dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let target = match dir {
        Some(d) => Path::new(d).to_path_buf(),
        None => std::env::current_dir()?,
    };
    let file = target.join(PORTFOLIO_FILE);

    if file.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            file.display()
        )
        .into());
    }

    let name = match args.name {
        Some(n) => n,
        None => target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Your Name".to_string()),
    };

    fs::write(&file, PORTFOLIO_TOML_TEMPLATE.replace("{name}", &name))?;
    println!("created {}", file.display());
    Ok(())
}
