use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    bag,
    error::Result,
    model::{ExternalUrl, Followers, Image, Popularity},
};

/// Artist entity.
///
/// The simplified artist carried inside albums and tracks only populates
/// id, name, uri and the link fields; followers, genres, images and
/// popularity arrive on the full object and default to zero otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub external_urls: ExternalUrl,
    pub followers: Followers,
    pub genres: Vec<String>,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub name: String,
    pub popularity: Popularity,
    pub uri: String,
}

impl Artist {
    pub fn from_bag(bag: &Value) -> Result<Self> {
        if !bag.is_object() {
            return Ok(Self::default());
        }

        Ok(Self {
            external_urls: bag
                .get("external_urls")
                .map(ExternalUrl::from_bag)
                .unwrap_or_default(),
            followers: bag
                .get("followers")
                .map(Followers::from_bag)
                .unwrap_or_default(),
            genres: bag::str_list(bag, "genres"),
            href: bag::str_or(bag, "href", ""),
            id: bag::str_or(bag, "id", ""),
            images: images_from(bag),
            name: bag::str_or(bag, "name", ""),
            popularity: Popularity::from_bag(bag)?,
            uri: bag::str_or(bag, "uri", ""),
        })
    }
}

pub(crate) fn images_from(bag: &Value) -> Vec<Image> {
    bag::array(bag, "images")
        .map(|items| items.iter().map(Image::from_bag).collect())
        .unwrap_or_default()
}
