use noisy_float::prelude::*;
use tap::Pipe;

use super::Ease;

/// Parametric response curves.
///
/// `k` bends the curve: `0` is linear, positive values ease in harder, negative
/// values ease out. `Cubic` is the two sided version, symmetric about the
/// midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weight {
    /// Always yields the end value.
    Constant,
    Quadratic(R32),
    Cubic(R32),
}

impl Weight {
    #[rustfmt::skip]
    pub fn eval(&self, t: f32) -> f32 {
        let func = |x: f32, k: f32| (k + k.signum())
            .abs()
            .powf(k.signum())
            .pipe(|power| x.signum() * x.abs().powf(power));

        match self {
            Weight::Constant => 1.,
            Weight::Quadratic(k) => func(t, k.raw()),
            Weight::Cubic(k) => (2. * t - 1.)
                .pipe(|x| func(x, k.raw()))
                .pipe(|output| (output - 1.) / 2. + 1.),
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::Quadratic(r32(0.))
    }
}

impl Ease for Weight {
    fn ease(&self, t: f32) -> f32 {
        self.eval(t)
    }
}
