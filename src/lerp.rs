use crate::{easing::Ease, stepped::stepped};

/// Blends two endpoints of the same type by a factor `t`.
///
/// `t` is conventionally in `[0, 1]` but is never clamped. Continuous types
/// extrapolate past either end, stepped types still resolve to one of the
/// two endpoints.
pub trait Lerp {
    type Output;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output;

    /// Hard cutover from `self` to `other` once `t` reaches `threshold`.
    /// `t == threshold` already yields `other`.
    fn lerp_stepped(&self, other: &Self, t: f32, threshold: f32) -> Self
    where
        Self: Clone,
    {
        stepped(self, other, t, threshold)
    }

    /// Reshapes `t` with `easing` before blending. The easing never changes
    /// whether the blend is continuous or stepped.
    fn lerp_eased<E>(&self, other: &Self, t: f32, easing: &E) -> Self::Output
    where
        E: Ease + ?Sized,
    {
        self.lerp(other, easing.ease(t))
    }
}

pub fn lerp<T>(a: &T, b: &T, t: f32) -> T::Output
where
    T: Lerp + ?Sized,
{
    a.lerp(b, t)
}

pub fn eased<T, E>(a: &T, b: &T, t: f32, easing: &E) -> T::Output
where
    T: Lerp + ?Sized,
    E: Ease + ?Sized,
{
    a.lerp_eased(b, t, easing)
}
