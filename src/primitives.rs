use bevy_math::{DVec2, DVec3, DVec4, Vec2, Vec3, Vec3A, Vec4};
use duplicate::duplicate_item;
use lyon::math::{point, vector, Point, Vector};
use noisy_float::prelude::*;

use crate::lerp::Lerp;

#[duplicate_item(Float; [f32]; [f64])]
impl Lerp for Float {
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        self + (other - self) * t as Float
    }
}

/// The offset `(b - a) * t` is computed in `f64` and truncated toward zero,
/// then added to `a` in `i128` and saturated at the bounds of the type. The
/// start value is exact at `t == 0` and the end value is returned as is at
/// `t == 1`. A NaN factor leaves the start value.
#[duplicate_item(Int; [i8]; [i16]; [i32]; [i64]; [isize]; [u8]; [u16]; [u32]; [u64]; [usize])]
impl Lerp for Int {
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        if t == 1. {
            return *other;
        }

        let (from, to) = (*self as i128, *other as i128);
        let offset = ((to - from) as f64 * t as f64) as i128;
        from.saturating_add(offset).clamp(Int::MIN as i128, Int::MAX as i128) as Int
    }
}

/// Blends the raw floats. A result that overflows saturates to the finite
/// bound with the same sign, a NaN result (NaN factor, opposing infinities)
/// leaves the start value.
#[duplicate_item(Noisy Raw; [R32] [f32]; [R64] [f64]; [N32] [f32]; [N64] [f64])]
impl Lerp for Noisy {
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        let blended = Lerp::lerp(&self.raw(), &other.raw(), t);

        match blended {
            _ if blended.is_finite() => Noisy::new(blended),
            _ if blended.is_nan() => *self,
            _ => Noisy::new(Raw::MAX.copysign(blended)),
        }
    }
}

impl<T, const N: usize> Lerp for [T; N]
where
    T: Lerp<Output = T>,
{
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        std::array::from_fn(|i| self[i].lerp(&other[i], t))
    }
}

//  glam's inherent lerp is already `a + (b - a) * t` per component
#[duplicate_item(
    Glam    Scalar;
    [Vec2]  [f32];
    [Vec3]  [f32];
    [Vec3A] [f32];
    [Vec4]  [f32];
    [DVec2] [f64];
    [DVec3] [f64];
    [DVec4] [f64];
)]
impl Lerp for Glam {
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        Glam::lerp(*self, *other, t as Scalar)
    }
}

#[duplicate_item(Lyon ctor; [Point] [point]; [Vector] [vector])]
impl Lerp for Lyon {
    type Output = Self;

    fn lerp(&self, other: &Self, t: f32) -> Self::Output {
        ctor(Lerp::lerp(&self.x, &other.x, t), Lerp::lerp(&self.y, &other.y, t))
    }
}
