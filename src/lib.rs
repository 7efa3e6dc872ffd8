//! # recourse
//!
//! Error-handling strategy combinators for fallible operations.
//!
//! Every function here takes a zero-argument fallible operation (any
//! `FnOnce() -> Result<V, E>`) and applies one fixed strategy when it fails:
//!
//! ## Design Philosophy
//!
//! - **Swallow**: run it; on failure, hand the error to a side-effecting
//!   handler (or nothing at all) and move on. No value, no propagation.
//! - **Fallback**: run it; on failure, substitute a value of the same type
//!   from a constant, a supplier, or a function of the error.
//! - **Cleanup**: mechanically the same as swallow; the name says the handler
//!   is releasing a resource or compensating, not logging.
//! - **Wrap**: run it; on failure, translate the error into this crate's
//!   structured [`Error`], keeping the original as the cause. Failures that
//!   already are an [`Error`] pass through untouched ([`wrap_all`] translates
//!   them anyway).
//!
//! ## Usage
//!
//! ```rust
//! use recourse::{fallback, to};
//!
//! fn read_port() -> anyhow::Result<u16> {
//!     Ok(std::env::var("RECOURSE_PORT")?.parse()?)
//! }
//!
//! let port = fallback(read_port, to(8080));
//! assert_eq!(port.unwrap(), 8080);
//! ```
//!
//! ```rust
//! use recourse::wrap;
//!
//! fn read_config() -> recourse::Result<String> {
//!     wrap(|| std::fs::read_to_string("config.toml"))
//! }
//! ```
//!
//! ## Principles
//!
//! - The operation runs at most once; a handler runs if and only if the
//!   operation failed, exactly once. Nothing here retries.
//! - Every two-argument combinator comes in both argument orders (`swallow` /
//!   `swallow_with`, etc.); pick whichever reads better at the call site.
//! - The crate never logs on the caller's behalf; [`logged`] is an explicit
//!   opt-in handler, not a default.
//! - Everything is synchronous and runs on the caller's thread.

mod cleanup;
mod error;
mod fallback;
mod kind;
mod swallow;
mod wrap;

pub use cleanup::{cleanup, cleanup_with};
pub use error::Error;
pub use fallback::{fallback, fallback_with, to, to_else};
pub use kind::ErrorKind;
pub use swallow::{logged, swallow, swallow_silently, swallow_with};
pub use wrap::{wrap, wrap_all, wrap_all_with, wrap_using, wrap_using_with};

/// Result type alias using the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
