//! Id allocation for newly created records.
//!
//! Ids come from a counter that only moves forward. It starts past the
//! largest id already present, is pushed past any id introduced by
//! reassignment, and skips ids that are still in use, so a freshly created
//! record never shares an id with a live one.

use emoji_types::EmojiId;

use crate::error::RegistryError;

/// Monotonic id counter. `None` once the counter has passed `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl IdAllocator {
    /// Start a counter whose first candidate is `next`.
    pub const fn starting_at(next: u64) -> Self {
        Self { next: Some(next) }
    }

    /// Start a counter just past the largest of `ids`, or at 1 when empty.
    pub fn after(ids: impl IntoIterator<Item = EmojiId>) -> Self {
        ids.into_iter()
            .map(EmojiId::get)
            .max()
            .map_or_else(|| Self::starting_at(1), |max| Self { next: max.checked_add(1) })
    }

    /// The next candidate id, if the counter is not exhausted.
    pub fn peek(&self) -> Option<EmojiId> {
        self.next.map(EmojiId)
    }

    /// Make sure the counter never hands out `id` or anything below it.
    pub fn observe(&mut self, id: EmojiId) {
        if let Some(next) = self.next {
            if id.get() >= next {
                self.next = id.get().checked_add(1);
            }
        }
    }

    /// Hand out the next id for which `in_use` is false.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IdSpaceExhausted`] once the counter passes
    /// `u64::MAX`.
    pub fn allocate(&mut self, in_use: impl Fn(EmojiId) -> bool) -> Result<EmojiId, RegistryError> {
        loop {
            let candidate = self.next.ok_or(RegistryError::IdSpaceExhausted)?;
            self.next = candidate.checked_add(1);
            let id = EmojiId(candidate);
            if !in_use(id) {
                return Ok(id);
            }
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
