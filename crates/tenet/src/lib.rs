//! Tenet - runtime invariant assertions
//!
//! A small set of checks for programmer invariants. A passing check has no
//! observable effect. A failing check:
//!
//! 1. renders its message (a fixed default, or the caller's format template),
//! 2. emits it as a `tracing` error event (target `"tenet"`) whose `file`,
//!    `line` and `column` fields name the failing call site,
//! 3. panics with the message as the payload.
//!
//! There is no soft-fail mode. A failed check is a bug, not a condition to
//! handle.
//!
//! # Checks
//!
//! | Macro | Function | Passes when |
//! |---|---|---|
//! | [`assert_true!`] | [`check_true`] | condition is `true` |
//! | [`assert_false!`] | [`check_false`] | condition is `false` |
//! | [`assert_not_nil!`] | [`check_not_nil`] | value is present |
//! | [`assert_nil!`] | [`check_nil`] | value is absent |
//!
//! Every macro takes an optional `format!`-style message; the functions have
//! `_with` variants taking [`format_args!`].
//!
//! ```
//! let peers = vec![1u64, 2, 3];
//! let leader = peers.first();
//!
//! tenet::assert_true!(!peers.is_empty());
//! tenet::assert_not_nil!(leader, "no leader among {} peers", peers.len());
//! ```
//!
//! # Build modes
//!
//! With the `release-fast` feature every check compiles to nothing: macro
//! operands are type-checked but never evaluated. Without it, checks are
//! active in every profile, including optimized release builds.
//!
//! # Recovery
//!
//! The crate never catches its own panic. A host that must outlive a single
//! violation can isolate work with [`std::panic::catch_unwind`] (requires
//! `panic = "unwind"`) and downcast the payload to `String`.

mod check;
mod macros;
mod nullable;
#[cfg(not(feature = "release-fast"))]
mod sink;
mod violation;

#[cfg(feature = "stderr-sink")]
pub mod logging;

pub use check::*;
pub use nullable::Nullable;
pub use violation::{Check, TARGET};

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "release-fast"))]
    pub use crate::sink::fail;
}
