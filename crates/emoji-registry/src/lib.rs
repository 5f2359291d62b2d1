//! In-memory emoji registry.
//!
//! The registry owns an ordered [`EmojiCollection`] of
//! [`EmojiRecord`](emoji_types::EmojiRecord)s. It is a plain value with no
//! interior locking: callers that share it across tasks wrap it in a lock
//! and hold the write guard for the whole of each mutation.
//!
//! # Modules
//!
//! - [`collection`] -- Lookup, create, delete and id reassignment
//! - [`allocator`] -- Monotonic id counter for new records
//! - [`seed`] -- The 30 records every fresh registry starts with
//! - [`error`] -- [`RegistryError`]

pub mod allocator;
pub mod collection;
pub mod error;
pub mod seed;

pub use allocator::IdAllocator;
pub use collection::{EmojiCollection, NewEmoji};
pub use error::RegistryError;
