// Copyright 2026 the Glyph Upload Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The texture upload capability and the scoped row-flip guard.

use core::ops::{Deref, DerefMut};

use crate::Error;

/// Access to the context-wide "flip rows on unpack" flag.
///
/// On WebGL this is `UNPACK_FLIP_Y_WEBGL`. Other users of the same context
/// expect it disabled, so it should only be changed through
/// [`UnpackFlipGuard`].
pub trait UnpackState {
    /// Current value of the flag.
    fn unpack_flip_y(&self) -> bool;

    /// Overwrite the flag.
    fn set_unpack_flip_y(&mut self, flip: bool);
}

/// A 2D texture that can receive the contents of a surface of type `S`.
pub trait TextureTarget<S: ?Sized>: UnpackState {
    /// Replace level 0 with the RGBA8 contents of `surface`.
    ///
    /// Row order follows the current [`UnpackState`].
    fn upload(&mut self, surface: &S) -> Result<(), Error>;
}

impl<T: UnpackState + ?Sized> UnpackState for &mut T {
    fn unpack_flip_y(&self) -> bool {
        T::unpack_flip_y(self)
    }

    fn set_unpack_flip_y(&mut self, flip: bool) {
        T::set_unpack_flip_y(self, flip);
    }
}

impl<S: ?Sized, T: TextureTarget<S> + ?Sized> TextureTarget<S> for &mut T {
    fn upload(&mut self, surface: &S) -> Result<(), Error> {
        T::upload(self, surface)
    }
}

/// Enables row flipping for as long as it is alive.
///
/// The value seen at construction is written back on drop, on every exit
/// path: normal return, `?` propagation and unwinding alike.
#[derive(Debug)]
#[must_use = "the flag is restored as soon as the guard is dropped"]
pub struct UnpackFlipGuard<'a, T: UnpackState + ?Sized> {
    target: &'a mut T,
    prior: bool,
}

impl<'a, T: UnpackState + ?Sized> UnpackFlipGuard<'a, T> {
    /// Remember the current flag and enable flipping.
    pub fn new(target: &'a mut T) -> Self {
        let prior = target.unpack_flip_y();
        target.set_unpack_flip_y(true);
        log::trace!("unpack flip enabled (was {prior})");
        Self { target, prior }
    }

    /// The value that will be restored on drop.
    pub fn prior(&self) -> bool {
        self.prior
    }
}

impl<T: UnpackState + ?Sized> Deref for UnpackFlipGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: UnpackState + ?Sized> DerefMut for UnpackFlipGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T: UnpackState + ?Sized> Drop for UnpackFlipGuard<'_, T> {
    fn drop(&mut self) {
        self.target.set_unpack_flip_y(self.prior);
        log::trace!("unpack flip restored to {}", self.prior);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Flag {
        value: bool,
        writes: u32,
    }

    impl UnpackState for Flag {
        fn unpack_flip_y(&self) -> bool {
            self.value
        }

        fn set_unpack_flip_y(&mut self, flip: bool) {
            self.value = flip;
            self.writes += 1;
        }
    }

    #[test]
    fn guard_enables_then_restores() {
        let mut flag = Flag::default();
        {
            let guard = UnpackFlipGuard::new(&mut flag);
            assert!(guard.unpack_flip_y());
            assert!(!guard.prior());
        }
        assert!(!flag.value);
        assert_eq!(flag.writes, 2);
    }

    #[test]
    fn guard_restores_prior_true() {
        let mut flag = Flag {
            value: true,
            writes: 0,
        };
        drop(UnpackFlipGuard::new(&mut flag));
        assert!(flag.value);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let mut flag = Flag::default();
        {
            let mut outer = UnpackFlipGuard::new(&mut flag);
            let inner = UnpackFlipGuard::new(&mut *outer);
            assert!(inner.prior());
        }
        assert!(!flag.value);
    }
}
