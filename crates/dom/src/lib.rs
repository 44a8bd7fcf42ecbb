//! In-memory host element.
//!
//! [`Element`] implements [`props::HostElement`] over plain Rust data and
//! journals every boundary call as a [`Mutation`], so callers can assert both
//! the resulting state ([`Snapshot`]) and the exact writes that produced it.

mod element;
mod journal;
pub mod snapshot;

pub use crate::element::{Attribute, Element};
pub use crate::journal::Mutation;
pub use crate::snapshot::{Snapshot, SnapshotOptions};
