//! Check kinds and the diagnostic record built when one fails.

use std::fmt;

/// Target of every diagnostic event.
pub const TARGET: &str = "tenet";

/// The four predicates an assertion can enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// The condition must be `true`.
    True,
    /// The condition must be `false`.
    False,
    /// The value must be present (`Some`, non-null).
    NotNil,
    /// The value must be absent (`None`, null).
    Nil,
}

impl Check {
    /// Stable name, recorded as the `check` field of the diagnostic event.
    pub fn name(&self) -> &'static str {
        match self {
            Check::True => "true",
            Check::False => "false",
            Check::NotNil => "not_nil",
            Check::Nil => "nil",
        }
    }

    /// Message used when the caller supplies no format template.
    pub fn default_message(&self) -> &'static str {
        match self {
            Check::True => "assertion failure: value is not true",
            Check::False => "assertion failure: value is not false",
            Check::NotNil => "assertion failure: value is nil",
            Check::Nil => "assertion failure: value is not nil",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(not(feature = "release-fast"))]
pub(crate) use record::InvariantViolation;

#[cfg(not(feature = "release-fast"))]
mod record {
    use std::fmt;
    use std::panic::Location;

    use thiserror::Error;

    use super::Check;

    /// A failed check, rendered once on the failure path.
    ///
    /// Displays as the message alone; the location travels separately so the
    /// sink can report it as structured fields.
    #[derive(Error, Debug, Clone)]
    #[error("{message}")]
    pub(crate) struct InvariantViolation {
        check: Check,
        message: String,
        location: &'static Location<'static>,
    }

    impl InvariantViolation {
        pub(crate) fn new(
            check: Check,
            message: Option<fmt::Arguments<'_>>,
            location: &'static Location<'static>,
        ) -> Self {
            let message = match message {
                Some(args) => fmt::format(args),
                None => check.default_message().to_string(),
            };

            Self {
                check,
                message,
                location,
            }
        }

        pub(crate) fn check(&self) -> Check {
            self.check
        }

        pub(crate) fn message(&self) -> &str {
            &self.message
        }

        pub(crate) fn location(&self) -> &'static Location<'static> {
            self.location
        }
    }
}
