use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    bag,
    error::Result,
    model::{ResourceType, Track},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    #[default]
    Computer,
    Smartphone,
    Speaker,
}

impl DeviceType {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "computer" => Some(DeviceType::Computer),
            "smartphone" => Some(DeviceType::Smartphone),
            "speaker" => Some(DeviceType::Speaker),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatState {
    #[default]
    Off,
    Track,
    Context,
}

impl RepeatState {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "off" => Some(RepeatState::Off),
            "track" => Some(RepeatState::Track),
            "context" => Some(RepeatState::Context),
            _ => None,
        }
    }
}

/// Playback device as reported by the player endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub device_type: DeviceType,
    /// The server reports `null` for devices it cannot identify.
    pub id: Option<String>,
    pub is_active: bool,
    pub is_restricted: bool,
    pub name: String,
    pub volume: u64,
}

impl Device {
    pub fn from_bag(bag: &Value) -> Self {
        Self {
            device_type: bag
                .get("type")
                .and_then(Value::as_str)
                .and_then(DeviceType::parse)
                .unwrap_or_default(),
            id: bag::opt_str(bag, "id"),
            is_active: bag::bool_or(bag, "is_active", false),
            is_restricted: bag::bool_or(bag, "is_restricted", false),
            name: bag::str_or(bag, "name", ""),
            volume: bag::uint_or(bag, "volume_percent", 0),
        }
    }
}

/// Lightweight pointer at the album, artist or playlist a player is
/// playing from. Only the kind and canonical URI are kept; expanding the
/// full entity here would drag an unbounded slice of the resource graph
/// into every player snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayContext {
    pub kind: ResourceType,
    pub uri: String,
}

impl PlayContext {
    pub fn from_bag(bag: &Value) -> Self {
        Self {
            kind: bag
                .get("type")
                .and_then(Value::as_str)
                .and_then(ResourceType::parse)
                .unwrap_or_default(),
            uri: bag::str_or(bag, "uri", ""),
        }
    }
}

/// What the player is doing right now: the playing context, the current
/// track and how far into it playback is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerContext {
    pub context: PlayContext,
    /// Instant the snapshot was taken, from the `timestamp` field
    /// (unix milliseconds); defaults to the construction instant.
    pub fetched_on: DateTime<Utc>,
    pub is_playing: bool,
    pub progress_ms: u64,
    pub track: Option<Track>,
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self {
            context: PlayContext::default(),
            fetched_on: Utc::now(),
            is_playing: false,
            progress_ms: 0,
            track: None,
        }
    }
}

impl PlayerContext {
    pub fn from_bag(bag: &Value) -> Result<Self> {
        if !bag.is_object() {
            return Ok(Self::default());
        }

        let track = match bag::object(bag, "item") {
            Some(sub) => Some(Track::from_bag(sub)?),
            None => None,
        };

        Ok(Self {
            context: bag
                .get("context")
                .map(PlayContext::from_bag)
                .unwrap_or_default(),
            fetched_on: bag::timestamp_ms_opt(bag, "timestamp").unwrap_or_else(Utc::now),
            is_playing: bag::bool_or(bag, "is_playing", false),
            progress_ms: bag::uint_or(bag, "progress_ms", 0),
            track,
        })
    }
}

/// Full playback snapshot: the playing state plus the device it is
/// playing on and the shuffle/repeat settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub device: Option<Device>,
    pub playback: PlayerContext,
    pub repeat_state: RepeatState,
    pub shuffle_state: bool,
}

impl Player {
    /// The player endpoint reports device, settings and playing state as
    /// one flat object, so both layers decode from the same bag.
    pub fn from_bag(bag: &Value) -> Result<Self> {
        Ok(Self {
            device: bag::object(bag, "device").map(Device::from_bag),
            playback: PlayerContext::from_bag(bag)?,
            repeat_state: bag
                .get("repeat_state")
                .and_then(Value::as_str)
                .and_then(RepeatState::parse)
                .unwrap_or_default(),
            shuffle_state: bag::bool_or(bag, "shuffle_state", false),
        })
    }
}
