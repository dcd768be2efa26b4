//! upat IR - node representation for scanned URL templates and instances.
//!
//! This crate contains the data structures every other upat crate agrees on:
//! - [`Span`] for byte ranges into the scanned input
//! - [`NodeKind`], a closed taxonomy of delimiters, origin fields and
//!   structural tokens, plus the declared [`ContentType`]
//! - [`Node`] and the [`NodeList`] arena the scanner fills
//! - [`codec`], the fixed-width 7-byte binary record for a node sequence
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes are plain `Copy` records in one `Vec`,
//!   addressed by [`NodeId`] indices, never by reference.
//! - **No value overlap**: kinds and content types are separate enums. The
//!   binary form maps them through explicit tables in [`codec`].

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod codec;
mod kind;
mod list;
mod node;
mod span;

pub use codec::{CodecError, MAX_NODES, MAX_OFFSET, RECORD_SIZE};
pub use kind::{ContentType, Delimiter, KindSet, NodeKind, OriginField, StructuralToken};
pub use list::NodeList;
pub use node::{Node, NodeId};
pub use span::Span;
