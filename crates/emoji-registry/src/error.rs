//! Error types for registry operations.

use emoji_types::EmojiId;

/// Failures produced by [`EmojiCollection`](crate::EmojiCollection) mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No record carries the requested id.
    #[error("emoji {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: EmojiId,
    },

    /// A create request carried no usable name.
    #[error("emoji name is required")]
    MissingName,

    /// An id reassignment carried no usable new id.
    #[error("new emoji id is required")]
    MissingNewId,

    /// The id counter cannot advance any further.
    #[error("emoji id space exhausted")]
    IdSpaceExhausted,
}
