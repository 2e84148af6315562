//! Catalog file parser
//!
//! One video per line: `Title | video_id | #tag1 , #tag2`. The tags field
//! is optional.

use crate::model::Video;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Parse a catalog file and extract all videos
pub fn parse_catalog(path: &Path) -> Result<Vec<Video>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to open video catalog: {:?}", path))?;

    let videos = parse_catalog_str(&text)
        .with_context(|| format!("Failed to parse video catalog: {:?}", path))?;

    log::info!("Parsed {} videos from {:?}", videos.len(), path);
    Ok(videos)
}

/// Parse catalog text already in memory
pub fn parse_catalog_str(text: &str) -> Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let video = parse_line(line).with_context(|| format!("line {}", index + 1))?;
        videos.push(video);
    }

    Ok(videos)
}

fn parse_line(line: &str) -> Result<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().unwrap_or_default();
    let Some(id) = fields.next() else {
        bail!("expected `title | id | tags`, got {:?}", line);
    };
    if title.is_empty() || id.is_empty() {
        bail!("title and id must not be empty");
    }

    let tags = fields
        .next()
        .map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(Video::new(id, title, tags))
}
