//! Failure path: record the violation on the diagnostic sink, then abort.
//!
//! The sink is whatever `tracing` subscriber the host installed. This module
//! only produces events; it never installs or configures a subscriber.

use std::fmt;
use std::panic::Location;

use crate::violation::{Check, InvariantViolation, TARGET};

/// Emit the diagnostic for a failed check and panic with its message.
///
/// `#[track_caller]` carries the call site through every wrapper, so both the
/// event fields and the panic location name the failing assertion rather than
/// this function.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fail(check: Check, message: Option<fmt::Arguments<'_>>) -> ! {
    let violation = InvariantViolation::new(check, message, Location::caller());
    emit(&violation);
    panic!("{}", violation.message());
}

fn emit(violation: &InvariantViolation) {
    let location = violation.location();
    tracing::error!(
        target: TARGET,
        check = violation.check().name(),
        file = location.file(),
        line = location.line(),
        column = location.column(),
        "{}",
        violation
    );
}
