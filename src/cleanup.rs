//! Cleanup: run an operation and dispose of its failure.
//!
//! Mechanically this is [`swallow`](crate::swallow) with a mandatory handler;
//! it exists as its own entry point because the call site means something
//! different by it: the handler releases a resource or runs a compensating
//! action, it does not merely observe.

/// Run `op`, discarding its value on success; on failure, hand the error to
/// `handler` for disposal. Never propagates anything.
///
/// ```rust
/// use recourse::{cleanup, Error};
///
/// let mut staging = Some("upload-partial.tmp");
/// cleanup(
///     || Err::<(), _>(Error::unexpected("transfer aborted")),
///     |_e| { staging.take(); },
/// );
/// assert!(staging.is_none());
/// ```
pub fn cleanup<V, E, F, H>(op: F, handler: H)
where
    F: FnOnce() -> Result<V, E>,
    H: FnOnce(E),
{
    if let Err(e) = op() {
        handler(e);
    }
}

/// Handler-first order of [`cleanup`], for call sites that read better that way.
pub fn cleanup_with<V, E, F, H>(handler: H, op: F)
where
    F: FnOnce() -> Result<V, E>,
    H: FnOnce(E),
{
    cleanup(op, handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind};
    use std::cell::Cell;

    #[test]
    fn test_handler_disposes_on_failure() {
        let released = Cell::new(false);
        cleanup(
            || Err::<(), _>(Error::invalid_state("lock poisoned")),
            |e: Error| {
                assert_eq!(e.kind(), ErrorKind::InvalidState);
                released.set(true);
            },
        );
        assert!(released.get());
    }

    #[test]
    fn test_handler_skipped_on_success() {
        let released = Cell::new(false);
        cleanup(|| Ok::<_, Error>(()), |_e: Error| released.set(true));
        assert!(!released.get());
    }

    #[test]
    fn test_argument_order_symmetry() {
        let count = Cell::new(0);
        cleanup_with(
            |_e: Error| count.set(count.get() + 1),
            || Err::<(), _>(Error::unexpected("boom")),
        );
        cleanup(
            || Err::<(), _>(Error::unexpected("boom")),
            |_e: Error| count.set(count.get() + 1),
        );
        assert_eq!(count.get(), 2);
    }
}
