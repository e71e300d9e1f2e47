//! Data layer holding the bot's state.
//!
//! Tickets and cooldowns are in-memory stores that live for the process lifetime. The
//! settings repository wraps the JSON settings document and persists it with a whole
//! file overwrite after each change. Services only use the operations exposed here and
//! never reach into the underlying maps, so every check-and-set runs under one lock.

pub mod cooldown;
pub mod settings;
pub mod ticket;

#[cfg(test)]
mod test;
