//! Wrap: run an operation and translate its failure into [`Error`].
//!
//! Wrapping is how foreign failures (io errors, parse errors, anything
//! `Into<anyhow::Error>`) enter the crate's own error family. A failure that
//! already is an [`Error`] passes through [`wrap`] and [`wrap_using`]
//! untouched, so layered wrap calls never double-wrap; [`wrap_all`] skips
//! that check and translates unconditionally. The asymmetry is deliberate.

use crate::{Error, Result};

/// Run `op`; on failure, translate the error into [`Error`] with the default
/// translation: an `Unexpected` error carrying the original's message, with
/// the original attached as the source.
///
/// An error that already is an [`Error`] is propagated as-is, untranslated.
///
/// ```rust
/// use recourse::wrap;
///
/// let config: recourse::Result<String> = wrap(|| std::fs::read_to_string("config.toml"));
/// ```
pub fn wrap<V, E, F>(op: F) -> Result<V>
where
    F: FnOnce() -> std::result::Result<V, E>,
    E: Into<anyhow::Error>,
{
    wrap_using(op, |e| {
        let message = e.to_string();
        Error::unexpected(message).set_source(e)
    })
}

/// Run `op`; on failure, translate the error into [`Error`] using
/// `translator`. An error that already is an [`Error`] is propagated as-is
/// and the translator never runs.
///
/// ```rust
/// use recourse::{wrap_using, Error};
///
/// let config = wrap_using(
///     || std::fs::read_to_string("missing.toml"),
///     |e| Error::not_found("missing.toml").set_source(e),
/// );
/// assert!(config.is_err());
/// ```
pub fn wrap_using<V, E, F, T>(op: F, translator: T) -> Result<V>
where
    F: FnOnce() -> std::result::Result<V, E>,
    E: Into<anyhow::Error>,
    T: FnOnce(anyhow::Error) -> Error,
{
    match op() {
        Ok(v) => Ok(v),
        Err(e) => {
            let e: anyhow::Error = e.into();
            match e.downcast::<Error>() {
                // Already the target family: no double-wrapping.
                Ok(err) => Err(err),
                Err(foreign) => Err(translator(foreign)),
            }
        }
    }
}

/// Translator-first order of [`wrap_using`], for call sites that read better
/// that way.
pub fn wrap_using_with<V, E, F, T>(translator: T, op: F) -> Result<V>
where
    F: FnOnce() -> std::result::Result<V, E>,
    E: Into<anyhow::Error>,
    T: FnOnce(anyhow::Error) -> Error,
{
    wrap_using(op, translator)
}

/// Run `op`; on failure, translate the error through `translator`
/// unconditionally, even when it already is an [`Error`]. Use this when every
/// failure must be re-stamped uniformly regardless of origin.
pub fn wrap_all<V, E, F, T>(op: F, translator: T) -> Result<V>
where
    F: FnOnce() -> std::result::Result<V, E>,
    E: Into<anyhow::Error>,
    T: FnOnce(anyhow::Error) -> Error,
{
    match op() {
        Ok(v) => Ok(v),
        Err(e) => Err(translator(e.into())),
    }
}

/// Translator-first order of [`wrap_all`], for call sites that read better
/// that way.
pub fn wrap_all_with<V, E, F, T>(translator: T, op: F) -> Result<V>
where
    F: FnOnce() -> std::result::Result<V, E>,
    E: Into<anyhow::Error>,
    T: FnOnce(anyhow::Error) -> Error,
{
    wrap_all(op, translator)
}
