//! The ordered emoji collection and its operations.
//!
//! All lookups are linear scans that resolve to the first record whose id
//! matches. Mutations keep the relative order of the remaining records.

use emoji_types::{EmojiId, EmojiRecord};
use tracing::debug;

use crate::allocator::IdAllocator;
use crate::error::RegistryError;
use crate::seed::seed_records;

/// Input for [`EmojiCollection::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEmoji {
    /// Display name. Required: `None` or an empty string is rejected.
    pub name: Option<String>,
    /// Optional glyph.
    pub character: Option<String>,
}

/// Ordered, mutable collection of emoji records.
#[derive(Debug, Clone)]
pub struct EmojiCollection {
    records: Vec<EmojiRecord>,
    ids: IdAllocator,
}

impl EmojiCollection {
    /// An empty collection whose first created id is 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdAllocator::default(),
        }
    }

    /// A collection holding the 30 default records.
    pub fn seeded() -> Self {
        Self::from_records(seed_records())
    }

    /// Wrap existing records, starting the id counter past the largest id.
    pub fn from_records(records: Vec<EmojiRecord>) -> Self {
        let ids = IdAllocator::after(records.iter().map(|r| r.id));
        Self { records, ids }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in collection order.
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Position of the first record carrying `id`.
    pub fn position(&self, id: EmojiId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// First record carrying `id`.
    pub fn get(&self, id: EmojiId) -> Option<&EmojiRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a new record with a freshly allocated id.
    ///
    /// # Errors
    ///
    /// [`RegistryError::MissingName`] when the name is absent or empty, and
    /// [`RegistryError::IdSpaceExhausted`] when no id is left to hand out.
    pub fn create(&mut self, new: NewEmoji) -> Result<EmojiRecord, RegistryError> {
        let name = new
            .name
            .filter(|n| !n.is_empty())
            .ok_or(RegistryError::MissingName)?;

        let records = &self.records;
        let id = self.ids.allocate(|id| records.iter().any(|r| r.id == id))?;

        let record = EmojiRecord {
            id,
            character: new.character,
            name,
        };
        self.records.push(record.clone());
        debug!(%id, len = self.records.len(), "emoji created");
        Ok(record)
    }

    /// Remove the first record carrying `id` and return it.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] when no record carries `id`.
    pub fn delete(&mut self, id: EmojiId) -> Result<EmojiRecord, RegistryError> {
        let index = self.position(id).ok_or(RegistryError::NotFound { id })?;
        let removed = self.records.remove(index);
        debug!(%id, index, len = self.records.len(), "emoji deleted");
        Ok(removed)
    }

    /// Replace the id of the first record carrying `id`, keeping its glyph
    /// and name in place.
    ///
    /// Existence is checked before `new_id`. A `new_id` of `None` or 0 is
    /// rejected. Collisions with other records are allowed.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] when no record carries `id`, and
    /// [`RegistryError::MissingNewId`] when `new_id` is unusable.
    pub fn reassign_id(
        &mut self,
        id: EmojiId,
        new_id: Option<EmojiId>,
    ) -> Result<EmojiRecord, RegistryError> {
        let index = self.position(id).ok_or(RegistryError::NotFound { id })?;
        let new_id = new_id
            .filter(|n| n.get() != 0)
            .ok_or(RegistryError::MissingNewId)?;

        let record = self
            .records
            .get_mut(index)
            .ok_or(RegistryError::NotFound { id })?;
        record.id = new_id;
        let updated = record.clone();

        self.ids.observe(new_id);
        debug!(from = %id, to = %new_id, "emoji id reassigned");
        Ok(updated)
    }
}

impl Default for EmojiCollection {
    fn default() -> Self {
        Self::seeded()
    }
}
