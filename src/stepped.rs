use std::collections::VecDeque;

use derive_more::{Deref, DerefMut, From};
use duplicate::duplicate_item;
use tinyvec::{Array, TinyVec};

use crate::lerp::Lerp;

pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// `a` while `t < threshold`, `b` from the threshold onwards.
///
/// No blending happens, so `T` only needs to be cloneable. A NaN `t` fails the
/// comparison and resolves to `b`.
pub fn stepped<T: Clone>(a: &T, b: &T, t: f32, threshold: f32) -> T {
    if t < threshold {
        a.clone()
    } else {
        b.clone()
    }
}

/// Wraps any cloneable value so it lerps as a stepped primitive at
/// [`DEFAULT_THRESHOLD`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deref, DerefMut, From)]
pub struct Stepped<T>(pub T);

impl<T: Clone> Lerp for Stepped<T> {
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        stepped(self, other, t, DEFAULT_THRESHOLD)
    }
}

#[duplicate_item(Flag; [bool]; [String])]
impl Lerp for Flag {
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        stepped(self, other, t, DEFAULT_THRESHOLD)
    }
}

//  Sequences switch as a whole, lengths are free to differ
#[duplicate_item(Sequence; [Vec<T>]; [VecDeque<T>])]
impl<T: Clone> Lerp for Sequence {
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        stepped(self, other, t, DEFAULT_THRESHOLD)
    }
}

impl<A> Lerp for TinyVec<A>
where
    A: Array,
    Self: Clone,
{
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        stepped(self, other, t, DEFAULT_THRESHOLD)
    }
}
