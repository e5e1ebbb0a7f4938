use serde::{Deserialize, Serialize};

/// A single showcased project, as authored in portfolio.toml.
///
/// Records are immutable after load. `id` is the stable ordering key and
/// must be unique across the catalog; the authored order is the display
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Path or URL of a preview visual. May be empty; the renderer shows a
    /// placeholder in that case.
    #[serde(default)]
    pub image: String,
    /// Long-form writeup shown in the detail overlay.
    #[serde(default)]
    pub details: String,
    /// Optional external URL. Absent means no outbound action is offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Technology labels, in authored order.
    #[serde(default)]
    pub tags: Vec<String>,
}
