//! Persisted settings schema for the community bot.
//!
//! Every record in this crate is a plain serde document that lives inside the
//! settings JSON file. The bot loads the whole document on startup and writes it
//! back in full after each admin edit, so these types double as the on-disk
//! format. Missing fields fall back to their `Default` values which keeps older
//! settings files loadable after new fields are added.

pub mod autorole;
pub mod prelude;
pub mod settings;
pub mod ticket_category;
pub mod ticket_texts;
pub mod welcome;
