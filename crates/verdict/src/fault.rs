//! Containment of faults raised while evaluating caller-supplied closures.
//!
//! Checks and combiners are arbitrary code. A panic inside one must become a
//! recorded violation rather than unwinding through the engine, so every call
//! into caller code goes through `contain`.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Reason recorded when a panic payload is neither `&str` nor `String`.
const OPAQUE_PAYLOAD: &str = "non-string panic payload";

/// Run `call`, returning the panic reason instead of unwinding.
///
/// The panic hook still runs before the unwind is caught, so the default hook
/// prints the panic to stderr as usual.
///
/// Closures only see shared borrows of engine state, and the engine discards
/// any partial result after a fault, so asserting unwind safety is sound here.
pub(crate) fn contain<R, F>(call: F) -> Result<R, String>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(call)).map_err(|payload| describe(payload.as_ref()))
}

fn describe(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|reason| (*reason).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| OPAQUE_PAYLOAD.to_owned())
}
