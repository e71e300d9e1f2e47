//! Community Bot Test Utils
//!
//! Provides shared testing utilities for the community bot. This crate offers a builder
//! for test contexts backed by a temporary directory holding a settings file and a
//! transcript directory, in-memory fixtures for settings records, and factories for
//! Serenity model objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring the settings a test starts with
//! - **TestContext**: Test environment owning the temporary directory and paths
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_category_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_support_role(42)
//!         .build()?;
//!
//!     let settings = SettingsRepository::load(&test.settings_path).await?;
//!     // Perform operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
