#![deny(missing_docs)]

//! A serverless function that reports its CloudGuard protection.
//!
//! The crate exposes a single handler, [`cloudguard_handler`], plus the
//! [`invoke`] binding that the `bootstrap` binary hands to the Lambda runtime:
//!
//! ```no_run
//! use cloudguard_app::{invoke, Error};
//! use lamedh_runtime::{handler_fn, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     run(handler_fn(invoke)).await?;
//!     Ok(())
//! }
//! ```
//!
//! Every invocation logs one INFO line and returns [`MESSAGE`].

pub mod logging;

pub use lamedh_runtime::{Context, Error};
use serde_json::Value;
use tracing::info;

/// The text every invocation logs and returns.
pub const MESSAGE: &str = "This serverless app X is protected by CloudGuard!";

/// Log [`MESSAGE`] at INFO level and return it.
pub async fn cloudguard_handler() -> String {
    info!("{}", MESSAGE);
    MESSAGE.to_string()
}

/// Lambda entry point. The event payload and context are not used; any JSON
/// value is accepted.
pub async fn invoke(_event: Value, _: Context) -> Result<String, Error> {
    Ok(cloudguard_handler().await)
}
