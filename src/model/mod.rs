//! Domain models and operation-specific parameter types.
//!
//! Models here are plain data: tickets and their state enums, parameters passed from
//! controllers into services, and the parsed form of component custom ids. Rendering
//! to Discord builders happens in the service layer.

pub mod action;
pub mod actor;
pub mod autorole;
pub mod category;
pub mod embed;
pub mod prefix;
pub mod social;
pub mod ticket;
pub mod ticket_config;
pub mod transcript;
