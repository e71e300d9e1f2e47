//! Test fixtures providing reusable in-memory settings records.
//!
//! Fixtures never touch the filesystem. Use them to seed a `TestBuilder`, to build
//! expected values for assertions, or as defaults for the settings factory.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let category = fixture::ticket_category::entity();
//!
//! let reports = fixture::ticket_category::entity_builder()
//!     .id("reports")
//!     .label("Reports")
//!     .build();
//! ```

pub mod autorole;
pub mod ticket_category;

pub use autorole::{entity as autorole_entity, entity_builder as autorole_entity_builder};
pub use ticket_category::{
    entity as ticket_category_entity, entity_builder as ticket_category_entity_builder,
};
