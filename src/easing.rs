mod weight;

pub use weight::Weight;

use std::{f32::consts::PI, fmt, str::FromStr};

use crate::error::{Error, Result};

/// Reshapes an interpolation factor before it reaches the blend.
///
/// Implementations must be pure: the same `t` always maps to the same output.
pub trait Ease {
    fn ease(&self, t: f32) -> f32;
}

impl<F> Ease for F
where
    F: Fn(f32) -> f32,
{
    fn ease(&self, t: f32) -> f32 {
        self(t)
    }
}

/// The named easing catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InSine,
    OutSine,
    InOutSine,
}

impl Easing {
    pub const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::InQuad => "easeInQuad",
            Easing::OutQuad => "easeOutQuad",
            Easing::InOutQuad => "easeInOutQuad",
            Easing::InCubic => "easeInCubic",
            Easing::OutCubic => "easeOutCubic",
            Easing::InOutCubic => "easeInOutCubic",
            Easing::InSine => "easeInSine",
            Easing::OutSine => "easeOutSine",
            Easing::InOutSine => "easeInOutSine",
        }
    }
}

impl Ease for Easing {
    #[rustfmt::skip]
    fn ease(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::InQuad => t * t,
            Easing::OutQuad => 1. - (1. - t).powi(2),
            Easing::InOutQuad if t < 0.5 => 2. * t * t,
            Easing::InOutQuad => 1. - (-2. * t + 2.).powi(2) / 2.,
            Easing::InCubic => t.powi(3),
            Easing::OutCubic => 1. - (1. - t).powi(3),
            Easing::InOutCubic if t < 0.5 => 4. * t.powi(3),
            Easing::InOutCubic => 1. - (-2. * t + 2.).powi(3) / 2.,
            Easing::InSine => 1. - (t * PI / 2.).cos(),
            Easing::OutSine => (t * PI / 2.).sin(),
            Easing::InOutSine => -((PI * t).cos() - 1.) / 2.,
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|easing| easing.name() == name)
            .ok_or_else(|| Error::UnknownEasing(name.to_owned()))
    }
}

impl TryFrom<String> for Easing {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.name().to_owned()
    }
}
