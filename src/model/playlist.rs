use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    bag,
    error::Result,
    model::{ExternalUrl, Followers, Image, PageItem, Track, User, artist::images_from},
    paging::Page,
};

/// Playlist entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub collaborative: bool,
    pub description: String,
    pub external_urls: ExternalUrl,
    pub followers: Followers,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub name: String,
    pub owner: User,
    /// Tri-state: `None` means the server did not state a visibility.
    pub public: Option<bool>,
    pub snapshot_id: String,
    pub tracks: Page,
    pub uri: String,
}

impl Playlist {
    pub fn from_bag(bag: &Value) -> Result<Self> {
        if !bag.is_object() {
            return Ok(Self::default());
        }

        let tracks = match bag.get("tracks") {
            Some(sub) => Page::from_bag(sub)?,
            None => Page::default(),
        };

        Ok(Self {
            collaborative: bag::bool_or(bag, "collaborative", false),
            description: bag::str_or(bag, "description", ""),
            external_urls: bag
                .get("external_urls")
                .map(ExternalUrl::from_bag)
                .unwrap_or_default(),
            followers: bag
                .get("followers")
                .map(Followers::from_bag)
                .unwrap_or_default(),
            href: bag::str_or(bag, "href", ""),
            id: bag::str_or(bag, "id", ""),
            images: images_from(bag),
            name: bag::str_or(bag, "name", ""),
            owner: bag.get("owner").map(User::from_bag).unwrap_or_default(),
            public: bag::opt_bool(bag, "public"),
            snapshot_id: bag::str_or(bag, "snapshot_id", ""),
            tracks,
            uri: bag::str_or(bag, "uri", ""),
        })
    }

    /// Total number of tracks on the playlist as reported by the server,
    /// which may exceed the number present in the embedded page.
    pub fn track_count(&self) -> u64 {
        self.tracks.total
    }

    /// The typed playlist tracks present in the embedded page, in server
    /// order.
    pub fn track_list(&self) -> Vec<&PlaylistTrack> {
        self.tracks
            .items
            .iter()
            .filter_map(|item| match item {
                PageItem::PlaylistTrack(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }
}

/// Relationship wrapper describing how a track came to be on a playlist.
/// Not an addressable resource; carries no discriminator of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub added_at: Option<DateTime<Utc>>,
    pub added_by: User,
    pub is_local: bool,
    pub track: Track,
}

impl PlaylistTrack {
    pub fn from_bag(bag: &Value) -> Result<Self> {
        if !bag.is_object() {
            return Ok(Self::default());
        }

        let track = match bag.get("track") {
            Some(sub) => Track::from_bag(sub)?,
            None => Track::default(),
        };

        Ok(Self {
            added_at: bag::datetime_opt(bag, "added_at"),
            added_by: bag.get("added_by").map(User::from_bag).unwrap_or_default(),
            is_local: bag::bool_or(bag, "is_local", false),
            track,
        })
    }
}
