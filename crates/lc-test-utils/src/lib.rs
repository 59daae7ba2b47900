//! # LC Test Utilities
//!
//! Shared test utilities for the Life Calendar (LC) service.
//!
//! This crate provides:
//! - Server test harness (`TestLcServer` for E2E tests)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lc_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<()> {
//!     let server = TestLcServer::spawn().await?;
//!
//!     let response = reqwest::get(format!("{}/?age=30", server.url())).await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod server_harness;

// Re-export commonly used items
pub use server_harness::*;
