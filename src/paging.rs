//! One page of a server-paginated collection.
//!
//! The server slices large collections into pages and hands back absolute
//! links to the adjacent slices. This module only describes a single page;
//! following `next`/`previous` is the transport layer's job.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    bag,
    error::Result,
    model::{PageItem, ResourceType},
};

/// Paging cursor: one page of resolved items plus the links and counters
/// needed to continue the walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub href: String,
    /// Resolved items in server order. The order reflects server-side
    /// ranking and must be preserved.
    pub items: Vec<PageItem>,
    pub limit: u64,
    /// Absolute fetch location of the following page; empty on the last.
    pub next: String,
    pub offset: u64,
    /// Absolute fetch location of the preceding page; empty on the first.
    pub previous: String,
    /// Server-side total, which may exceed `items.len()`.
    pub total: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            href: String::new(),
            items: Vec::new(),
            limit: 50,
            next: String::new(),
            offset: 0,
            previous: String::new(),
            total: 0,
        }
    }
}

impl Page {
    /// Decodes a single-collection paging bag, resolving each element of
    /// `items` through [`PageItem::resolve`].
    pub fn from_bag(bag: &Value) -> Result<Self> {
        if !bag.is_object() {
            return Ok(Self::default());
        }

        let items = match bag::array(bag, "items") {
            Some(raw) => raw
                .iter()
                .map(PageItem::resolve)
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            href: bag::str_or(bag, "href", ""),
            items,
            limit: bag::uint_or(bag, "limit", 0),
            next: bag::str_or(bag, "next", ""),
            offset: bag::uint_or(bag, "offset", 0),
            previous: bag::str_or(bag, "previous", ""),
            total: bag::uint_or(bag, "total", 0),
        })
    }

    /// Pulls one named collection out of a multi-collection envelope.
    ///
    /// Search-style endpoints return several paging objects side by side,
    /// keyed by the plural kind name (`tracks`, `artists`, ...). This
    /// selects the requested one without the caller having to know what
    /// else the envelope carries. An absent collection yields the
    /// all-default page rather than an error.
    pub fn from_search(envelope: &Value, kind: ResourceType) -> Result<Self> {
        match bag::object(envelope, kind.plural()) {
            Some(sub) => Self::from_bag(sub),
            None => {
                debug!(kind = %kind, "requested collection missing from envelope, yielding empty page");
                Ok(Self::default())
            }
        }
    }

    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PagedItems[{}/{} of {}]",
            self.items.len(),
            self.limit,
            self.total
        )
    }
}
