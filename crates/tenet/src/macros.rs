//! Macro forms of the four checks.
//!
//! Each macro evaluates its operand exactly once and renders the optional
//! format template only on failure. With `release-fast` enabled the operand
//! and template are still type-checked but sit behind `if false`, so nothing
//! is evaluated and no failure path is emitted.

/// Aborts unless the condition is `true`.
///
/// ```
/// let retries = 2;
/// tenet::assert_true!(retries < 3);
/// tenet::assert_true!(retries < 3, "retry budget exhausted after {}", retries);
/// ```
#[cfg(not(feature = "release-fast"))]
#[macro_export]
macro_rules! assert_true {
    ($cond:expr $(,)?) => {{
        let condition: bool = $cond;
        if !condition {
            $crate::__private::fail($crate::Check::True, ::core::option::Option::None);
        }
    }};
    ($cond:expr, $($arg:tt)+) => {{
        let condition: bool = $cond;
        if !condition {
            $crate::__private::fail(
                $crate::Check::True,
                ::core::option::Option::Some(::core::format_args!($($arg)+)),
            );
        }
    }};
}

/// Aborts unless the condition is `false`.
#[cfg(not(feature = "release-fast"))]
#[macro_export]
macro_rules! assert_false {
    ($cond:expr $(,)?) => {{
        let condition: bool = $cond;
        if condition {
            $crate::__private::fail($crate::Check::False, ::core::option::Option::None);
        }
    }};
    ($cond:expr, $($arg:tt)+) => {{
        let condition: bool = $cond;
        if condition {
            $crate::__private::fail(
                $crate::Check::False,
                ::core::option::Option::Some(::core::format_args!($($arg)+)),
            );
        }
    }};
}

/// Aborts if the value is absent. The operand is borrowed, not moved.
///
/// ```
/// let session: Option<u64> = Some(17);
/// tenet::assert_not_nil!(session);
/// assert_eq!(session, Some(17));
/// ```
#[cfg(not(feature = "release-fast"))]
#[macro_export]
macro_rules! assert_not_nil {
    ($value:expr $(,)?) => {
        match &$value {
            value => {
                if $crate::Nullable::is_null(value) {
                    $crate::__private::fail($crate::Check::NotNil, ::core::option::Option::None);
                }
            }
        }
    };
    ($value:expr, $($arg:tt)+) => {
        match &$value {
            value => {
                if $crate::Nullable::is_null(value) {
                    $crate::__private::fail(
                        $crate::Check::NotNil,
                        ::core::option::Option::Some(::core::format_args!($($arg)+)),
                    );
                }
            }
        }
    };
}

/// Aborts if the value is present. The operand is borrowed, not moved.
#[cfg(not(feature = "release-fast"))]
#[macro_export]
macro_rules! assert_nil {
    ($value:expr $(,)?) => {
        match &$value {
            value => {
                if !$crate::Nullable::is_null(value) {
                    $crate::__private::fail($crate::Check::Nil, ::core::option::Option::None);
                }
            }
        }
    };
    ($value:expr, $($arg:tt)+) => {
        match &$value {
            value => {
                if !$crate::Nullable::is_null(value) {
                    $crate::__private::fail(
                        $crate::Check::Nil,
                        ::core::option::Option::Some(::core::format_args!($($arg)+)),
                    );
                }
            }
        }
    };
}

// release-fast: same signatures, never evaluated.

#[cfg(feature = "release-fast")]
#[macro_export]
macro_rules! assert_true {
    ($cond:expr $(,)?) => {
        if false {
            let _: bool = $cond;
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if false {
            let _: bool = $cond;
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

#[cfg(feature = "release-fast")]
#[macro_export]
macro_rules! assert_false {
    ($cond:expr $(,)?) => {
        if false {
            let _: bool = $cond;
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if false {
            let _: bool = $cond;
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

#[cfg(feature = "release-fast")]
#[macro_export]
macro_rules! assert_not_nil {
    ($value:expr $(,)?) => {
        if false {
            let _ = $crate::Nullable::is_null(&$value);
        }
    };
    ($value:expr, $($arg:tt)+) => {
        if false {
            let _ = $crate::Nullable::is_null(&$value);
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

#[cfg(feature = "release-fast")]
#[macro_export]
macro_rules! assert_nil {
    ($value:expr $(,)?) => {
        if false {
            let _ = $crate::Nullable::is_null(&$value);
        }
    };
    ($value:expr, $($arg:tt)+) => {
        if false {
            let _ = $crate::Nullable::is_null(&$value);
            let _ = ::core::format_args!($($arg)+);
        }
    };
}
