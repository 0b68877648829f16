//! In-memory stores, one per resource family.
//!
//! Each store owns an ordered `Vec` of entities and an [`IdSequence`]. Ids are
//! handed out once and never recycled after a delete; `reset()` is the only
//! way to rewind a sequence, and it restores the seed data at the same time.

pub mod cars;
pub mod categories;
pub mod items;

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer};

pub use cars::{Car, CarPayload, Garage, Task, TaskPayload};
pub use categories::{Category, CategoryPayload, CategoryStore};
pub use items::{Item, ItemPayload, ItemStore};

/// Monotonic id generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// An id as a client wrote it in a path segment.
///
/// Segments that are not decimal integers still parse; they simply match no
/// entity, so lookups report "not found" instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedId(Option<u64>);

impl RequestedId {
    pub fn matches(self, id: u64) -> bool {
        self.0 == Some(id)
    }
}

impl From<u64> for RequestedId {
    fn from(id: u64) -> Self {
        Self(Some(id))
    }
}

impl FromStr for RequestedId {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self(raw.parse().ok()))
    }
}

impl fmt::Display for RequestedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("<invalid>"),
        }
    }
}

impl<'de> Deserialize<'de> for RequestedId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self(raw.parse().ok()))
    }
}
