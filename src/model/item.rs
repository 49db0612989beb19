use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::{
    error::Result,
    model::{Album, Artist, Playlist, PlaylistTrack, Track, User},
};

/// The closed set of addressable resource kinds. Doubles as the
/// discriminator driving polymorphic resolution of collection items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    #[default]
    Album,
    Artist,
    Playlist,
    Track,
    User,
}

impl ResourceType {
    /// Case-insensitive parse of a discriminator value. Unknown strings
    /// yield `None` rather than an error; the caller decides the fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "album" => Some(ResourceType::Album),
            "artist" => Some(ResourceType::Artist),
            "playlist" => Some(ResourceType::Playlist),
            "track" => Some(ResourceType::Track),
            "user" => Some(ResourceType::User),
            _ => None,
        }
    }

    /// Property name under which a multi-collection envelope nests this
    /// kind's page (search responses key track results under `tracks`,
    /// artist results under `artists`, and so on).
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceType::Album => "albums",
            ResourceType::Artist => "artists",
            ResourceType::Playlist => "playlists",
            ResourceType::Track => "tracks",
            ResourceType::User => "users",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::Album => "album",
            ResourceType::Artist => "artist",
            ResourceType::Playlist => "playlist",
            ResourceType::Track => "track",
            ResourceType::User => "user",
        };
        write!(f, "{}", name)
    }
}

/// One resolved element of a paged collection.
///
/// Collection payloads are heterogeneous across endpoints: some return bare
/// entities, some return relationship wrappers, some nest shapes this
/// library does not model. This union is the single classifier for all of
/// them, so individual collection types do not re-implement the branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageItem {
    Album(Album),
    Artist(Artist),
    Playlist(Playlist),
    Track(Track),
    User(User),
    PlaylistTrack(PlaylistTrack),
    /// Shape the classifier does not recognize, passed through untyped.
    Raw(Value),
}

impl PageItem {
    /// Resolves one raw collection element. Ordered, first match wins:
    ///
    /// 1. a recognized `type` discriminator selects the matching entity;
    /// 2. an `added_at` key marks a playlist-track relationship wrapper;
    /// 3. anything else passes through as [`PageItem::Raw`].
    ///
    /// No input *shape* is an error. The only failure that propagates is
    /// an out-of-range popularity inside a matched entity.
    pub fn resolve(bag: &Value) -> Result<Self> {
        if let Some(kind) = bag
            .get("type")
            .and_then(Value::as_str)
            .and_then(ResourceType::parse)
        {
            return Ok(match kind {
                ResourceType::Album => PageItem::Album(Album::from_bag(bag)?),
                ResourceType::Artist => PageItem::Artist(Artist::from_bag(bag)?),
                ResourceType::Playlist => PageItem::Playlist(Playlist::from_bag(bag)?),
                ResourceType::Track => PageItem::Track(Track::from_bag(bag)?),
                ResourceType::User => PageItem::User(User::from_bag(bag)),
            });
        }

        if bag.get("added_at").is_some() {
            return Ok(PageItem::PlaylistTrack(PlaylistTrack::from_bag(bag)?));
        }

        trace!("collection item carries no recognized discriminator, passing through raw");
        Ok(PageItem::Raw(bag.clone()))
    }

    /// The resource kind of an addressable item; `None` for relationship
    /// wrappers and raw passthroughs.
    pub fn kind(&self) -> Option<ResourceType> {
        match self {
            PageItem::Album(_) => Some(ResourceType::Album),
            PageItem::Artist(_) => Some(ResourceType::Artist),
            PageItem::Playlist(_) => Some(ResourceType::Playlist),
            PageItem::Track(_) => Some(ResourceType::Track),
            PageItem::User(_) => Some(ResourceType::User),
            PageItem::PlaylistTrack(_) | PageItem::Raw(_) => None,
        }
    }
}
