use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    bag,
    model::{ExternalUrl, Followers, Image, artist::images_from},
};

/// User entity.
///
/// Birthdate, country, email and product only appear on the private
/// profile of the authenticated caller; for anyone else they stay at
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub birthdate: NaiveDate,
    pub country: String,
    pub display_name: String,
    pub email: String,
    pub external_urls: ExternalUrl,
    pub followers: Followers,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub product: String,
    pub uri: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            birthdate: NaiveDate::from_ymd_opt(1, 1, 1).unwrap(),
            country: String::new(),
            display_name: String::new(),
            email: String::new(),
            external_urls: ExternalUrl::default(),
            followers: Followers::default(),
            href: String::new(),
            id: String::new(),
            images: Vec::new(),
            product: String::new(),
            uri: String::new(),
        }
    }
}

impl User {
    pub fn from_bag(bag: &Value) -> Self {
        if !bag.is_object() {
            return Self::default();
        }

        Self {
            birthdate: bag::date_or_default(bag, "birthdate"),
            country: bag::str_or(bag, "country", ""),
            display_name: bag::str_or(bag, "display_name", ""),
            email: bag::str_or(bag, "email", ""),
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
            product: bag::str_or(bag, "product", ""),
            uri: bag::str_or(bag, "uri", ""),
        }
    }
}
