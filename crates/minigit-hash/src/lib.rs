//! Hash computation and object identity for minigit.
//!
//! Provides the core [`ObjectId`] type (the hexadecimal identifier every
//! blob and commit is addressed by), streaming hash computation, and the
//! hex codec. The hashing primitive is confined to [`hasher`] so the rest
//! of the system only ever sees opaque identifiers.

mod error;
pub mod hasher;
pub mod hex;
mod oid;
pub mod serde_oid;

pub use error::HashError;
pub use hasher::Hasher;
pub use oid::ObjectId;
