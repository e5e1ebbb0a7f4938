use crate::model::{Post, Project};

/// Print the project catalog, one block per project, in catalog order.
pub fn print_projects(projects: &[Project], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("no projects");
        return Ok(());
    }

    for project in projects {
        println!("[{}] {} - {}", project.id, project.title, project.description);
        if !project.tags.is_empty() {
            println!("    tags: {}", project.tags.join(", "));
        }
        if let Some(link) = &project.link {
            println!("    link: {}", link);
        }
    }
    Ok(())
}

/// Print one project in full.
pub fn print_project(project: &Project, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(project)?);
        return Ok(());
    }

    println!("[{}] {}", project.id, project.title);
    println!("{}", project.description);
    if !project.image.is_empty() {
        println!("image: {}", project.image);
    }
    if !project.details.is_empty() {
        println!();
        println!("{}", project.details.trim_end());
    }
    if !project.tags.is_empty() {
        println!();
        println!("tags: {}", project.tags.join(", "));
    }
    if let Some(link) = &project.link {
        println!("link: {}", link);
    }
    Ok(())
}

/// Print the blog listing.
pub fn print_posts(posts: &[Post], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(posts)?);
        return Ok(());
    }

    if posts.is_empty() {
        println!("no posts");
        return Ok(());
    }

    for post in posts {
        println!("{}  {} ({})", post.date, post.title, post.slug);
        if !post.summary.is_empty() {
            println!("            {}", post.summary);
        }
    }
    Ok(())
}
