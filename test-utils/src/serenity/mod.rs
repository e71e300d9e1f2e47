//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return, with sensible defaults for every field the
//! bot does not read.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_message, create_test_user};
//!
//! let user = create_test_user(42, "alice", false);
//! let member = create_test_member(42, "alice", &[7], false);
//! let message = create_test_message(1, 100, &user, "hello");
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod member;
pub mod message;
pub mod user;

pub use member::create_test_member;
pub use message::create_test_message;
pub use user::create_test_user;
