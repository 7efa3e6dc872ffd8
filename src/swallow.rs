//! Swallow: run an operation and deliberately discard its failure.
//!
//! This is the "I truly don't care" strategy. A swallowed failure never
//! reaches the caller; at most it reaches the handler. Reach for
//! [`swallow_silently`] only when dropping the error on the floor is an
//! explicit decision, not an oversight.

use std::fmt;

/// Run `op`, discarding its value on success; on failure, invoke `handler`
/// exactly once with the error. Never propagates anything.
///
/// ```rust
/// use recourse::{swallow, Error};
///
/// swallow(
///     || Err::<(), _>(Error::invalid_state("socket already closed")),
///     |e| eprintln!("close failed: {}", e),
/// );
/// ```
pub fn swallow<V, E, F, H>(op: F, handler: H)
where
    F: FnOnce() -> Result<V, E>,
    H: FnOnce(E),
{
    if let Err(e) = op() {
        handler(e);
    }
}

/// Handler-first order of [`swallow`], for call sites that read better that way.
pub fn swallow_with<V, E, F, H>(handler: H, op: F)
where
    F: FnOnce() -> Result<V, E>,
    H: FnOnce(E),
{
    swallow(op, handler)
}

/// Run `op` and discard both its value and its failure, with no handler.
pub fn swallow_silently<V, E, F>(op: F)
where
    F: FnOnce() -> Result<V, E>,
{
    let _ = op();
}

/// A ready-made handler that records the swallowed error through the `log`
/// facade at warn level. The crate never logs unless this is passed in.
pub fn logged<E: fmt::Display>() -> impl FnOnce(E) {
    |e: E| log::warn!("swallowed: {}", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind};
    use std::cell::Cell;

    #[test]
    fn test_handler_runs_once_on_failure() {
        let calls = Cell::new(0);
        swallow(
            || Err::<(), _>(Error::invalid_input("bad flag")),
            |e: Error| {
                calls.set(calls.get() + 1);
                assert_eq!(e.kind(), ErrorKind::InvalidInput);
            },
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_handler_skipped_on_success() {
        let calls = Cell::new(0);
        swallow(
            || Ok::<_, Error>(7),
            |_e: Error| calls.set(calls.get() + 1),
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_success_value_is_discarded() {
        // The call compiles to () regardless of the operation's value type.
        let () = swallow(|| Ok::<_, Error>("ignored"), |_e| {});
    }

    #[test]
    fn test_argument_order_symmetry() {
        let calls = Cell::new(0);
        swallow_with(
            |_e: Error| calls.set(calls.get() + 1),
            || Err::<(), _>(Error::unexpected("boom")),
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_silent_swallow_raises_nothing() {
        swallow_silently(|| Err::<(), _>(Error::unexpected("nobody hears this")));
        swallow_silently(|| Ok::<_, Error>(42));
    }

    #[test]
    fn test_logged_handler_smoke() {
        swallow(
            || Err::<(), _>(Error::unexpected("logged and dropped")),
            logged(),
        );
    }
}
