//! Fallback: run an operation and substitute a value if it fails.
//!
//! The substitute is computed from exactly one of: a constant ([`to`]), a
//! zero-argument producer ([`to_else`]), or a function of the error (any
//! `FnOnce(E) -> Result<V, E>` passed directly). The original failure is
//! never propagated; a failure inside the substitute itself is.

/// Run `op`; return its value on success, otherwise the substitute's.
///
/// A failing substitute propagates uncaught. There is no double-fallback:
/// the error is substituted at most once per call.
///
/// ```rust
/// use recourse::{fallback, to, Error};
///
/// let n = fallback(|| Err::<i32, _>(Error::invalid_state("stale cache")), to(0));
/// assert_eq!(n.unwrap(), 0);
/// ```
pub fn fallback<V, E, F, S>(op: F, substitute: S) -> Result<V, E>
where
    F: FnOnce() -> Result<V, E>,
    S: FnOnce(E) -> Result<V, E>,
{
    match op() {
        Ok(v) => Ok(v),
        Err(e) => substitute(e),
    }
}

/// Substitute-first order of [`fallback`], for call sites that read better
/// that way.
pub fn fallback_with<V, E, F, S>(substitute: S, op: F) -> Result<V, E>
where
    F: FnOnce() -> Result<V, E>,
    S: FnOnce(E) -> Result<V, E>,
{
    fallback(op, substitute)
}

/// Substitute with a pre-supplied constant.
pub fn to<V, E>(value: V) -> impl FnOnce(E) -> Result<V, E> {
    move |_| Ok(value)
}

/// Substitute with a value computed only when the operation has failed.
pub fn to_else<V, E, P>(producer: P) -> impl FnOnce(E) -> Result<V, E>
where
    P: FnOnce() -> V,
{
    move |_| Ok(producer())
}
