use serde::{Deserialize, Serialize};

/// A single catalog video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier within the catalog
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Tags in catalog order (e.g. `#cat`)
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video record
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }
}
