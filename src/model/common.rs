use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    bag,
    error::{ModelError, Result},
};

/// Link into an external service.
///
/// The API documents `external_urls` as an open key/value map but only the
/// `spotify` key is ever observed in responses; other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrl {
    pub kind: String,
    pub url: String,
}

impl ExternalUrl {
    pub fn from_bag(bag: &Value) -> Self {
        match bag::opt_str(bag, "spotify") {
            Some(url) => Self {
                kind: "spotify".to_string(),
                url,
            },
            None => Self::default(),
        }
    }
}

/// Standard identifier in an external catalog.
///
/// `external_ids` carries at most a handful of known keys; the first
/// recognized one wins and the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalId {
    pub kind: String,
    pub id: String,
}

impl ExternalId {
    const KINDS: [&'static str; 3] = ["isrc", "ean", "upc"];

    pub fn from_bag(bag: &Value) -> Self {
        for kind in Self::KINDS {
            if let Some(id) = bag::opt_str(bag, kind) {
                return Self {
                    kind: kind.to_string(),
                    id,
                };
            }
        }
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub height: u64,
    pub url: String,
    pub width: u64,
}

impl Image {
    pub fn from_bag(bag: &Value) -> Self {
        Self {
            height: bag::uint_or(bag, "height", 0),
            url: bag::str_or(bag, "url", ""),
            width: bag::uint_or(bag, "width", 0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    pub href: String,
    pub total: u64,
}

impl Followers {
    pub fn from_bag(bag: &Value) -> Self {
        Self {
            href: bag::str_or(bag, "href", ""),
            total: bag::uint_or(bag, "total", 0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copyright {
    pub text: String,
    pub kind: String,
}

impl Copyright {
    pub fn from_bag(bag: &Value) -> Self {
        Self {
            text: bag::str_or(bag, "text", ""),
            kind: bag::str_or(bag, "type", ""),
        }
    }
}

/// Playlist state marker returned by playlist-modifying endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
}

impl Snapshot {
    pub fn from_bag(bag: &Value) -> Self {
        Self {
            id: bag::str_or(bag, "snapshot_id", ""),
        }
    }
}

/// Popularity rating, constrained to 0..=100 at construction.
///
/// Values never legitimately change after decode, so the range check runs
/// once in the constructor instead of living on a setter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Popularity(u8);

impl Popularity {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ModelError::OutOfRange {
                field: "popularity",
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Reads the `popularity` key of an entity bag. Absent or wrong-shaped
    /// counts as 0; a present integer outside the range is an error.
    pub fn from_bag(bag: &Value) -> Result<Self> {
        match bag::int_opt(bag, "popularity") {
            Some(value) => Self::new(value),
            None => Ok(Self::default()),
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}
