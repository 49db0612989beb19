use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    bag,
    error::Result,
    model::{Album, Artist, ExternalId, ExternalUrl, Popularity},
};

/// Track entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub album: Album,
    pub artists: Vec<Artist>,
    pub available_markets: Vec<String>,
    pub disc_number: u64,
    pub duration_ms: u64,
    pub explicit: bool,
    pub external_id: ExternalId,
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    pub is_playable: bool,
    pub linked_from: Option<TrackLink>,
    pub name: String,
    pub popularity: Popularity,
    pub preview_url: String,
    pub track_number: u64,
    pub uri: String,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            album: Album::default(),
            artists: Vec::new(),
            available_markets: Vec::new(),
            disc_number: 0,
            duration_ms: 0,
            explicit: false,
            external_id: ExternalId::default(),
            external_urls: ExternalUrl::default(),
            href: String::new(),
            id: String::new(),
            is_playable: true,
            linked_from: None,
            name: String::new(),
            popularity: Popularity::default(),
            preview_url: String::new(),
            track_number: 0,
            uri: String::new(),
        }
    }
}

impl Track {
    pub fn from_bag(bag: &Value) -> Result<Self> {
        if !bag.is_object() {
            return Ok(Self::default());
        }

        let album = match bag.get("album") {
            Some(sub) => Album::from_bag(sub)?,
            None => Album::default(),
        };
        let artists = match bag::array(bag, "artists") {
            Some(items) => items.iter().map(Artist::from_bag).collect::<Result<_>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            album,
            artists,
            available_markets: bag::str_list(bag, "available_markets"),
            disc_number: bag::uint_or(bag, "disc_number", 0),
            duration_ms: bag::uint_or(bag, "duration_ms", 0),
            explicit: bag::bool_or(bag, "explicit", false),
            external_id: bag
                .get("external_ids")
                .map(ExternalId::from_bag)
                .unwrap_or_default(),
            external_urls: bag
                .get("external_urls")
                .map(ExternalUrl::from_bag)
                .unwrap_or_default(),
            href: bag::str_or(bag, "href", ""),
            id: bag::str_or(bag, "id", ""),
            is_playable: bag::bool_or(bag, "is_playable", true),
            linked_from: bag.get("linked_from").map(TrackLink::from_bag),
            name: bag::str_or(bag, "name", ""),
            popularity: Popularity::from_bag(bag)?,
            preview_url: bag::str_or(bag, "preview_url", ""),
            track_number: bag::uint_or(bag, "track_number", 0),
            uri: bag::str_or(bag, "uri", ""),
        })
    }
}

/// Pointer back to the originally requested track when track relinking
/// substituted a regional equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLink {
    pub external_urls: ExternalUrl,
    pub href: String,
    pub id: String,
    pub uri: String,
}

impl TrackLink {
    pub fn from_bag(bag: &Value) -> Self {
        Self {
            external_urls: bag
                .get("external_urls")
                .map(ExternalUrl::from_bag)
                .unwrap_or_default(),
            href: bag::str_or(bag, "href", ""),
            id: bag::str_or(bag, "id", ""),
            uri: bag::str_or(bag, "uri", ""),
        }
    }
}
