//! # Studio Library
//!
//! Persistence gateways for the creative studio. Implements the
//! `studio-core` [`PersistenceGateway`] contract twice:
//!
//! - [`MemoryLibrary`] - in-process store for tests and ephemeral use.
//! - [`FileLibrary`] - one JSON file per creative under a data
//!   directory, for local durability.
//!
//! Both stores persist the full [`CreativeRecord`]: extracted ad-copy
//! fields for cards and search, plus the raw document snapshot for
//! reopening a creative in a studio session.
//!
//! [`PersistenceGateway`]: studio_core::PersistenceGateway

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fs;
pub mod memory;
pub mod record;

pub use fs::FileLibrary;
pub use memory::MemoryLibrary;
pub use record::CreativeRecord;
