//! Factory methods for creating test data on disk.
//!
//! Where fixtures build records in memory, factories persist them in the layout the
//! bot reads at startup so tests exercise the real loading path.
//!
//! # Available Factories
//!
//! - `settings` - Write a settings document to a path
//! - `helpers` - Unique id generation shared by tests

pub mod helpers;
pub mod settings;

pub use helpers::next_id;
pub use settings::write_settings;
