//! Blob and commit records.
//!
//! A blob is an immutable byte sequence addressed by the hash of its
//! content. A commit is a JSON record whose `id` is the hash of the
//! record's canonical serialization with the `id` field excluded, so a
//! stored commit can always be checked against its own filename.

mod blob;
mod commit;
mod error;

pub use blob::Blob;
pub use commit::Commit;
pub use error::ObjectError;
