//! Spotify Web API Object Model
//!
//! This library turns the loosely-typed JSON payloads returned by the Spotify
//! Web API into a graph of strongly-typed entities. It contains no HTTP code:
//! a transport layer hands it already-parsed `serde_json::Value` documents
//! ("bags") and receives typed albums, artists, tracks, playlists, users,
//! player snapshots and paged collections back.
//!
//! # Modules
//!
//! - `auth` - Access token value object with derived expiry
//! - `bag` - Tolerant field accessors over untyped property bags
//! - `error` - Error types for out-of-contract values
//! - `model` - Entity types and the polymorphic collection-item resolver
//! - `paging` - One page of a server-paginated collection
//!
//! # Decoding policy
//!
//! Construction never fails because of missing or extra data. Absent keys and
//! wrong-shaped values fall back to documented defaults; unrecognized keys
//! are ignored. The only construction failure is a value that is present,
//! well-shaped and out of contract (a popularity outside 0..=100).
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use spotify_model::model::Artist;
//!
//! let artist = Artist::from_bag(&json!({"id": "4tZ", "name": "Foals"}))?;
//! assert_eq!(artist.name, "Foals");
//! ```

pub mod auth;
pub mod bag;
pub mod error;
pub mod model;
pub mod paging;

pub use error::{ModelError, Result};
