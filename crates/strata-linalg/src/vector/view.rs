//! Named field access for the 2, 3 and 4-dimensional vectors.
//!
//! `Vector<T, N>` dereferences to one of the `#[repr(C)]` structs below, which have the same
//! layout as `[T; N]`. There is no mutable counterpart: vectors are never modified in place.

use std::ops::Deref;

use crate::Vector;

/// Field view of a 2-dimensional [`Vector`].
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

/// Field view of a 3-dimensional [`Vector`].
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

/// Field view of a 4-dimensional [`Vector`].
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

macro_rules! field_view {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T> Deref for Vector<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: `$view<T>` is `#[repr(C)]` with `$n` fields of type `T` followed by a
                    // ZST, so it has the same size, alignment and field offsets as `[T; $n]`.
                    unsafe { &*(self as *const Self).cast::<$view<T>>() }
                }
            }
        )+
    };
}

field_view!(2 => XY, 3 => XYZ, 4 => XYZW);
