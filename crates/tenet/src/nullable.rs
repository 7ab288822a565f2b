//! What "nil" means for a Rust value.

/// A value that may be absent.
///
/// Implemented for `Option<T>`, raw pointers, and references to any
/// `Nullable`. Downstream handle types can implement it to become usable with
/// [`assert_nil!`](crate::assert_nil) and [`assert_not_nil!`](crate::assert_not_nil).
pub trait Nullable {
    /// Returns `true` when the value is absent.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        Nullable::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    #[inline]
    fn is_null(&self) -> bool {
        Nullable::is_null(&**self)
    }
}
