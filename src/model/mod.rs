//! Entity types for the Spotify Web API object model.
//!
//! Every type in this module is a plain value constructed exactly once from
//! a response bag and never mutated by the library afterwards. Constructors
//! follow the crate-wide tolerant-decode policy: absent or wrong-shaped
//! fields fall back to documented defaults, unrecognized fields are ignored,
//! and only a present out-of-range value (popularity) fails construction.
//!
//! The resource kind discriminator lives in [`PageItem`], a tagged union
//! over the five addressable entity kinds plus the playlist-track
//! relationship wrapper and a raw passthrough for shapes the classifier
//! does not recognize.

mod album;
mod artist;
mod common;
mod item;
mod player;
mod playlist;
mod track;
mod user;

pub use album::Album;
pub use artist::Artist;
pub use common::{Copyright, ExternalId, ExternalUrl, Followers, Image, Popularity, Snapshot};
pub use item::{PageItem, ResourceType};
pub use player::{Device, DeviceType, PlayContext, Player, PlayerContext, RepeatState};
pub use playlist::{Playlist, PlaylistTrack};
pub use track::{Track, TrackLink};
pub use user::User;
