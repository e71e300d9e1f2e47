//! Small helpers shared across services and controllers.

pub mod html;
pub mod parse;
pub mod template;
