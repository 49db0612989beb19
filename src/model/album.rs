use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    bag,
    error::Result,
    model::{
        Artist, Copyright, ExternalId, ExternalUrl, Image, PageItem, Popularity, Track,
        artist::images_from,
    },
    paging::Page,
};

/// Album entity.
///
/// Copyrights, external id, genres, label, popularity and the embedded
/// track page are only present on the full album object; a simplified
/// album (as embedded in a track) leaves them at their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub album_type: String,
    pub artists: Vec<Artist>,
    pub available_markets: Vec<String>,
    pub copyrights: Vec<Copyright>,
    pub external_id: ExternalId,
    pub external_urls: ExternalUrl,
    pub genres: Vec<String>,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub label: String,
    pub name: String,
    pub popularity: Popularity,
    pub release_date: NaiveDate,
    pub release_date_precision: String,
    pub tracks: Page,
    pub uri: String,
}

impl Default for Album {
    fn default() -> Self {
        Self {
            album_type: String::new(),
            artists: Vec::new(),
            available_markets: Vec::new(),
            copyrights: Vec::new(),
            external_id: ExternalId::default(),
            external_urls: ExternalUrl::default(),
            genres: Vec::new(),
            href: String::new(),
            id: String::new(),
            images: Vec::new(),
            label: String::new(),
            name: String::new(),
            popularity: Popularity::default(),
            release_date: NaiveDate::from_ymd_opt(1, 1, 1).unwrap(),
            release_date_precision: "year".to_string(),
            tracks: Page::default(),
            uri: String::new(),
        }
    }
}

impl Album {
    pub fn from_bag(bag: &Value) -> Result<Self> {
        if !bag.is_object() {
            return Ok(Self::default());
        }

        let artists = match bag::array(bag, "artists") {
            Some(items) => items.iter().map(Artist::from_bag).collect::<Result<_>>()?,
            None => Vec::new(),
        };
        let tracks = match bag.get("tracks") {
            Some(sub) => Page::from_bag(sub)?,
            None => Page::default(),
        };

        Ok(Self {
            album_type: bag::str_or(bag, "album_type", ""),
            artists,
            available_markets: bag::str_list(bag, "available_markets"),
            copyrights: bag::array(bag, "copyrights")
                .map(|items| items.iter().map(Copyright::from_bag).collect())
                .unwrap_or_default(),
            external_id: bag
                .get("external_ids")
                .map(ExternalId::from_bag)
                .unwrap_or_default(),
            external_urls: bag
                .get("external_urls")
                .map(ExternalUrl::from_bag)
                .unwrap_or_default(),
            genres: bag::str_list(bag, "genres"),
            href: bag::str_or(bag, "href", ""),
            id: bag::str_or(bag, "id", ""),
            images: images_from(bag),
            label: bag::str_or(bag, "label", ""),
            name: bag::str_or(bag, "name", ""),
            popularity: Popularity::from_bag(bag)?,
            release_date: bag::date_or_default(bag, "release_date"),
            release_date_precision: bag::str_or(bag, "release_date_precision", "year"),
            tracks,
            uri: bag::str_or(bag, "uri", ""),
        })
    }

    /// Total number of tracks on the album as reported by the server, which
    /// may exceed the number of tracks present in the embedded page.
    pub fn track_count(&self) -> u64 {
        self.tracks.total
    }

    /// The typed tracks present in the embedded page, in server order.
    pub fn track_list(&self) -> Vec<&Track> {
        self.tracks
            .items
            .iter()
            .filter_map(|item| match item {
                PageItem::Track(track) => Some(track),
                _ => None,
            })
            .collect()
    }
}
