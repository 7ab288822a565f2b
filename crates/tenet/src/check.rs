//! Function forms of the four checks.
//!
//! These evaluate their arguments eagerly, like any function call. Prefer the
//! macros when the condition is expensive: under `release-fast` the macros
//! skip evaluation entirely, while these only skip the failure path.

use std::fmt;

use crate::nullable::Nullable;
use crate::violation::Check;

#[inline(always)]
#[track_caller]
fn enforce(holds: bool, check: Check, message: Option<fmt::Arguments<'_>>) {
    #[cfg(not(feature = "release-fast"))]
    {
        if !holds {
            crate::sink::fail(check, message);
        }
    }

    #[cfg(feature = "release-fast")]
    {
        let _ = (holds, check, message);
    }
}

/// Aborts unless `condition` is `true`.
#[inline]
#[track_caller]
pub fn check_true(condition: bool) {
    enforce(condition, Check::True, None);
}

/// Aborts unless `condition` is `true`, reporting `message` on failure.
///
/// ```
/// let (queued, capacity) = (3, 8);
/// tenet::check_true_with(
///     queued <= capacity,
///     format_args!("queue holds {} of {}", queued, capacity),
/// );
/// ```
#[inline]
#[track_caller]
pub fn check_true_with(condition: bool, message: fmt::Arguments<'_>) {
    enforce(condition, Check::True, Some(message));
}

/// Aborts unless `condition` is `false`.
#[inline]
#[track_caller]
pub fn check_false(condition: bool) {
    enforce(!condition, Check::False, None);
}

/// Aborts unless `condition` is `false`, reporting `message` on failure.
#[inline]
#[track_caller]
pub fn check_false_with(condition: bool, message: fmt::Arguments<'_>) {
    enforce(!condition, Check::False, Some(message));
}

/// Aborts if `value` is absent.
#[inline]
#[track_caller]
pub fn check_not_nil<T: Nullable + ?Sized>(value: &T) {
    enforce(!value.is_null(), Check::NotNil, None);
}

/// Aborts if `value` is absent, reporting `message` on failure.
#[inline]
#[track_caller]
pub fn check_not_nil_with<T: Nullable + ?Sized>(value: &T, message: fmt::Arguments<'_>) {
    enforce(!value.is_null(), Check::NotNil, Some(message));
}

/// Aborts if `value` is present.
#[inline]
#[track_caller]
pub fn check_nil<T: Nullable + ?Sized>(value: &T) {
    enforce(value.is_null(), Check::Nil, None);
}

/// Aborts if `value` is present, reporting `message` on failure.
#[inline]
#[track_caller]
pub fn check_nil_with<T: Nullable + ?Sized>(value: &T, message: fmt::Arguments<'_>) {
    enforce(value.is_null(), Check::Nil, Some(message));
}
