use std::fmt::Display;
use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::external_links::ExternalLinks;
use crate::models::image::Image;
use crate::models::owner::Owner;

/// Reference to a playlist's track listing; only the count is inlined.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrackSummary {
    pub href: String,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistSummary {
    pub collaborative: bool,
    pub description: String,
    pub external_urls: ExternalLinks,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub name: String,
    pub owner: Owner,
    pub public: bool,
    pub snapshot_id: String,
    pub tracks: TrackSummary,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
}

impl PlaylistSummary {
    pub fn track_count(&self) -> u32 {
        self.tracks.total
    }

    pub fn owner_name(&self) -> &str {
        self.owner.display_name.as_str()
    }

    /// Picks the rendition with the biggest known area. Images without
    /// dimensions lose against any sized one; ties keep the earliest.
    pub fn largest_image(&self) -> Option<&Image> {
        self.images.iter().fold(None, |best: Option<&Image>, image| match best {
            Some(best) if best.area() >= image.area() => Some(best),
            _ => Some(image),
        })
    }
}

impl Display for PlaylistSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" by {} ({} tracks)",
            self.name,
            self.owner_name(),
            self.track_count()
        )
    }
}

/// One page of a playlist listing, as returned by `/me/playlists` and
/// `/users/{id}/playlists`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistCollection {
    pub href: String,
    pub limit: u32,
    pub next: Option<String>,
    pub offset: u32,
    pub previous: Option<String>,
    pub total: u32,
    pub items: Vec<PlaylistSummary>,
}

impl PlaylistCollection {
    pub fn from_json(body: &str) -> Result<PlaylistCollection> {
        let collection = serde_json::from_str::<PlaylistCollection>(body)?;
        collection.log_decoded();
        Ok(collection)
    }

    pub fn from_slice(body: &[u8]) -> Result<PlaylistCollection> {
        let collection = serde_json::from_slice::<PlaylistCollection>(body)?;
        collection.log_decoded();
        Ok(collection)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<PlaylistCollection> {
        let collection = serde_json::from_reader::<_, PlaylistCollection>(reader)?;
        collection.log_decoded();
        Ok(collection)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaylistSummary> {
        self.items.iter()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Offset the following page would start at. Nothing is fetched.
    pub fn next_offset(&self) -> Option<u32> {
        self.next.as_ref()?;
        let len = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        Some(self.offset.saturating_add(len))
    }

    fn log_decoded(&self) {
        debug!(
            "decoded playlist page at offset {}: {} of {} playlists",
            self.offset,
            self.items.len(),
            self.total
        );
    }
}

impl Display for PlaylistCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.items.is_empty() {
            writeln!(f, "No playlists (total {})", self.total)?;
        } else {
            let first = u64::from(self.offset) + 1;
            let last = u64::from(self.offset) + self.items.len() as u64;
            writeln!(f, "Playlists {}-{} of {}", first, last, self.total)?;
            for playlist in &self.items {
                writeln!(f, "  {}", playlist)?;
            }
        }
        if let Some(next) = &self.next {
            writeln!(f, "next page: {}", next)?;
        }
        Ok(())
    }
}

impl IntoIterator for PlaylistCollection {
    type Item = PlaylistSummary;
    type IntoIter = std::vec::IntoIter<PlaylistSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlaylistCollection {
    type Item = &'a PlaylistSummary;
    type IntoIter = std::slice::Iter<'a, PlaylistSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
