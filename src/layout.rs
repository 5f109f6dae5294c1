use std::any::type_name;

use educe::Educe;
use itertools::Itertools;
use tap::{Tap, TapFallible};
use tracing::{debug, trace, warn};

use crate::{
    easing::Ease,
    error::{Error, Result},
    lerp::Lerp,
    stepped::{stepped, DEFAULT_THRESHOLD},
};

/// How a single field of a composite blends.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Policy {
    #[default]
    Continuous,
    /// Cuts over to the end value once `t` reaches the threshold.
    Stepped(f32),
}

impl Policy {
    /// Stepped at [`DEFAULT_THRESHOLD`].
    pub const fn stepped() -> Self {
        Self::Stepped(DEFAULT_THRESHOLD)
    }

    pub fn threshold(&self) -> Option<f32> {
        match self {
            Policy::Continuous => None,
            Policy::Stepped(threshold) => Some(*threshold),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub policy: Policy,
}

type Apply<T> = Box<dyn Fn(&T, &T, f32, &mut T) + Send + Sync>;

#[derive(Educe)]
#[educe(Debug)]
struct Field<T> {
    descriptor: FieldDescriptor,
    #[educe(Debug(ignore))]
    apply: Apply<T>,
}

/// A registered field-wise interpolation for the composite `T`.
///
/// Built once through [`LayoutBuilder`], which rejects empty layouts, duplicate
/// field names and stepped thresholds outside `[0, 1]`. Fields that were never
/// registered keep the start value.
///
/// A composite takes part in other layouts by keeping its own layout in a
/// `static` and forwarding [`Lerp`] to it:
///
/// ```
/// use lerpable::prelude::*;
/// use once_cell::sync::Lazy;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Spark {
///     heat: f32,
///     tag: &'static str,
/// }
///
/// static SPARK: Lazy<Layout<Spark>> = Lazy::new(|| {
///     Layout::builder()
///         .continuous("heat", |s: &Spark| &s.heat, |s: &mut Spark| &mut s.heat)
///         .stepped("tag", 0.25, |s: &Spark| &s.tag, |s: &mut Spark| &mut s.tag)
///         .build()
///         .expect("spark layout")
/// });
///
/// impl Lerp for Spark {
///     type Output = Self;
///
///     fn lerp(&self, other: &Self, t: f32) -> Self::Output {
///         SPARK.lerp(self, other, t)
///     }
/// }
///
/// let (cold, hot) = (Spark { heat: 0., tag: "cold" }, Spark { heat: 4., tag: "hot" });
/// assert_eq!(cold.lerp(&hot, 0.5), Spark { heat: 2., tag: "hot" });
/// ```
#[derive(Educe)]
#[educe(Debug)]
pub struct Layout<T> {
    fields: Vec<Field<T>>,
}

impl<T> Layout<T>
where
    T: Clone + 'static,
{
    pub fn builder() -> LayoutBuilder<T> {
        LayoutBuilder { fields: Vec::new() }
    }

    /// The result is assembled privately and only returned once every
    /// registered field has been written.
    pub fn lerp(&self, a: &T, b: &T, t: f32) -> T {
        a.clone()
            .tap_mut(|out| self.fields.iter().for_each(|field| (field.apply)(a, b, t, out)))
    }

    pub fn lerp_eased<E>(&self, a: &T, b: &T, t: f32, easing: &E) -> T
    where
        E: Ease + ?Sized,
    {
        self.lerp(a, b, easing.ease(t))
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().map(|field| &field.descriptor)
    }
}

#[derive(Educe)]
#[educe(Debug)]
pub struct LayoutBuilder<T> {
    fields: Vec<Field<T>>,
}

impl<T> LayoutBuilder<T>
where
    T: Clone + 'static,
{
    /// Registers a field blended through its own [`Lerp`], which recurses when
    /// the field is itself a composite.
    pub fn continuous<F, G, M>(self, name: &'static str, get: G, get_mut: M) -> Self
    where
        F: Lerp<Output = F> + 'static,
        G: Fn(&T) -> &F + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        self.push(name, Policy::Continuous, move |a: &T, b: &T, t: f32, out: &mut T| {
            *get_mut(out) = get(a).lerp(get(b), t)
        })
    }

    /// Registers a field that switches from start to end at `threshold`.
    /// The field type only needs to be cloneable.
    pub fn stepped<F, G, M>(self, name: &'static str, threshold: f32, get: G, get_mut: M) -> Self
    where
        F: Clone + 'static,
        G: Fn(&T) -> &F + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        self.push(name, Policy::Stepped(threshold), move |a: &T, b: &T, t: f32, out: &mut T| {
            *get_mut(out) = stepped(get(a), get(b), t, threshold)
        })
    }

    /// Registers a field under a policy chosen at run time, e.g. read from
    /// configuration.
    pub fn field<F, G, M>(self, name: &'static str, policy: Policy, get: G, get_mut: M) -> Self
    where
        F: Lerp<Output = F> + Clone + 'static,
        G: Fn(&T) -> &F + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        match policy {
            Policy::Continuous => self.continuous(name, get, get_mut),
            Policy::Stepped(threshold) => self.stepped(name, threshold, get, get_mut),
        }
    }

    pub fn build(self) -> Result<Layout<T>> {
        self.validate()
            .tap_err(|error| warn!(%error, "rejected lerp layout"))?;

        debug!(layout = type_name::<T>(), fields = self.fields.len(), "registered lerp layout");
        self.fields.iter().for_each(|Field { descriptor, .. }| {
            trace!(field = descriptor.name, policy = ?descriptor.policy, "lerp field")
        });

        Ok(Layout { fields: self.fields })
    }

    fn push<A>(mut self, name: &'static str, policy: Policy, apply: A) -> Self
    where
        A: Fn(&T, &T, f32, &mut T) + Send + Sync + 'static,
    {
        self.fields.push(Field {
            descriptor: FieldDescriptor { name, policy },
            apply: Box::new(apply),
        });
        self
    }

    fn validate(&self) -> Result<()> {
        let type_name = type_name::<T>();

        if self.fields.is_empty() {
            return Err(Error::EmptyLayout { type_name });
        }

        if let Some(field) = self.fields.iter().map(|field| field.descriptor.name).duplicates().next() {
            return Err(Error::DuplicateField { type_name, field });
        }

        self.fields
            .iter()
            .map(|field| field.descriptor)
            .find_map(|FieldDescriptor { name, policy }| {
                policy
                    .threshold()
                    .filter(|threshold| !(0. ..=1.).contains(threshold))
                    .map(|threshold| Error::ThresholdOutOfRange { type_name, field: name, threshold })
            })
            .map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[derive(Debug, Clone, PartialEq)]
    struct Glow {
        radius: f32,
        lit: bool,
    }

    impl Lerp for Glow {
        type Output = Self;

        fn lerp(&self, other: &Self, t: f32) -> Self::Output {
            Self {
                radius: self.radius.lerp(&other.radius, t),
                lit: self.lit.lerp(&other.lit, t),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Pulse {
        intensity: f32,
        frame: u32,
        label: String,
        glow: Glow,
    }

    fn dim() -> Pulse {
        Pulse {
            intensity: 0.,
            frame: 10,
            label: "dim".to_owned(),
            glow: Glow { radius: 2., lit: false },
        }
    }

    fn bright() -> Pulse {
        Pulse {
            intensity: 8.,
            frame: 20,
            label: "bright".to_owned(),
            glow: Glow { radius: 6., lit: true },
        }
    }

    fn pulse_layout(frame: Policy) -> Layout<Pulse> {
        Layout::builder()
            .continuous("intensity", |p: &Pulse| &p.intensity, |p: &mut Pulse| &mut p.intensity)
            .field("frame", frame, |p: &Pulse| &p.frame, |p: &mut Pulse| &mut p.frame)
            .stepped("label", 0.5, |p: &Pulse| &p.label, |p: &mut Pulse| &mut p.label)
            .continuous("glow", |p: &Pulse| &p.glow, |p: &mut Pulse| &mut p.glow)
            .build()
            .unwrap()
    }

    #[test]
    fn endpoints() {
        let layout = pulse_layout(Policy::Continuous);

        assert_eq!(layout.lerp(&dim(), &bright(), 0.), dim());
        assert_eq!(layout.lerp(&dim(), &bright(), 1.), bright());
    }

    #[test]
    fn fields_blend_by_their_own_policy() {
        let layout = pulse_layout(Policy::Stepped(0.7));

        assert_eq!(
            layout.lerp(&dim(), &bright(), 0.5),
            Pulse {
                intensity: 4.,
                frame: 10,
                label: "bright".to_owned(),
                glow: Glow { radius: 4., lit: true },
            }
        );
    }

    #[test]
    fn eased_composite_respects_stepped_thresholds() {
        let layout = pulse_layout(Policy::Stepped(0.7));
        let eased = layout.lerp_eased(&dim(), &bright(), 0.5, &Easing::InQuad);

        assert_eq!(eased.intensity, 2.);
        assert_eq!(eased.frame, 10);
        assert_eq!(eased.glow, Glow { radius: 3., lit: false });
        assert_eq!(eased, layout.lerp(&dim(), &bright(), 0.25));
    }

    #[test]
    fn policies_do_not_leak_between_fields() {
        let continuous = pulse_layout(Policy::Continuous);
        let stepped = pulse_layout(Policy::Stepped(0.1));

        (0..=10).map(|i| i as f32 / 10.).for_each(|t| {
            let (lhs, rhs) = (continuous.lerp(&dim(), &bright(), t), stepped.lerp(&dim(), &bright(), t));

            assert_eq!(lhs.intensity, rhs.intensity);
            assert_eq!(lhs.label, rhs.label);
            assert_eq!(lhs.glow, rhs.glow);
        })
    }

    #[test]
    fn unregistered_fields_keep_the_start_value() {
        let layout = Layout::builder()
            .continuous("intensity", |p: &Pulse| &p.intensity, |p: &mut Pulse| &mut p.intensity)
            .build()
            .unwrap();

        assert_eq!(
            layout.lerp(&dim(), &bright(), 1.),
            Pulse { intensity: 8., ..dim() }
        );
    }

    #[test]
    fn descriptors_in_registration_order() {
        assert_eq!(
            pulse_layout(Policy::stepped()).fields().copied().collect::<Vec<_>>(),
            vec![
                FieldDescriptor { name: "intensity", policy: Policy::Continuous },
                FieldDescriptor { name: "frame", policy: Policy::Stepped(0.5) },
                FieldDescriptor { name: "label", policy: Policy::Stepped(0.5) },
                FieldDescriptor { name: "glow", policy: Policy::Continuous },
            ]
        );
    }

    #[test]
    fn empty_layout_is_rejected() {
        assert_eq!(
            Layout::<Pulse>::builder().build().unwrap_err(),
            Error::EmptyLayout { type_name: type_name::<Pulse>() }
        );
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let error = Layout::builder()
            .continuous("intensity", |p: &Pulse| &p.intensity, |p: &mut Pulse| &mut p.intensity)
            .stepped("intensity", 0.5, |p: &Pulse| &p.intensity, |p: &mut Pulse| &mut p.intensity)
            .build()
            .unwrap_err();

        assert_eq!(
            error,
            Error::DuplicateField { type_name: type_name::<Pulse>(), field: "intensity" }
        );
    }

    #[test_case(1.5; "above one")]
    #[test_case(-0.1; "below zero")]
    #[test_case(f32::INFINITY; "infinite")]
    fn out_of_range_threshold_is_rejected(threshold: f32) {
        let error = Layout::builder()
            .stepped("frame", threshold, |p: &Pulse| &p.frame, |p: &mut Pulse| &mut p.frame)
            .build()
            .unwrap_err();

        assert_eq!(
            error,
            Error::ThresholdOutOfRange { type_name: type_name::<Pulse>(), field: "frame", threshold }
        );
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let error = Layout::builder()
            .stepped("frame", f32::NAN, |p: &Pulse| &p.frame, |p: &mut Pulse| &mut p.frame)
            .build()
            .unwrap_err();

        assert!(matches!(error, Error::ThresholdOutOfRange { field: "frame", .. }));
    }

    #[test_case(0.; "zero")]
    #[test_case(1.; "one")]
    fn threshold_bounds_are_accepted(threshold: f32) {
        let layout = Layout::builder()
            .stepped("frame", threshold, |p: &Pulse| &p.frame, |p: &mut Pulse| &mut p.frame)
            .build()
            .unwrap();

        assert_eq!(layout.lerp(&dim(), &bright(), threshold).frame, 20);
    }

    #[test]
    fn layouts_can_be_shared_between_threads() {
        fn shareable<T: Send + Sync>(_: &T) {}

        let layout = pulse_layout(Policy::Continuous);
        shareable(&layout);

        std::thread::scope(|scope| {
            (0..4).map(|i| i as f32 / 4.).for_each(|t| {
                let layout = &layout;
                scope.spawn(move || assert_eq!(layout.lerp(&dim(), &bright(), t).intensity, 8. * t));
            })
        });
    }

    #[test_case(Policy::Continuous, None; "continuous")]
    #[test_case(Policy::stepped(), Some(0.5); "default stepped")]
    #[test_case(Policy::Stepped(0.7), Some(0.7); "explicit stepped")]
    fn policy_threshold(policy: Policy, expected: Option<f32>) {
        assert_eq!(policy.threshold(), expected);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Spark {
        heat: f32,
        tint: [u8; 3],
        tag: String,
    }

    static SPARK: Lazy<Layout<Spark>> = Lazy::new(|| {
        Layout::builder()
            .continuous("heat", |s: &Spark| &s.heat, |s: &mut Spark| &mut s.heat)
            .continuous("tint", |s: &Spark| &s.tint, |s: &mut Spark| &mut s.tint)
            .stepped("tag", 0.25, |s: &Spark| &s.tag, |s: &mut Spark| &mut s.tag)
            .build()
            .unwrap()
    });

    impl Lerp for Spark {
        type Output = Self;

        fn lerp(&self, other: &Self, t: f32) -> Self::Output {
            SPARK.lerp(self, other, t)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Flare {
        spark: Spark,
        frame: u32,
    }

    fn flare_layout() -> Layout<Flare> {
        Layout::builder()
            .continuous("spark", |f: &Flare| &f.spark, |f: &mut Flare| &mut f.spark)
            .stepped("frame", 0.7, |f: &Flare| &f.frame, |f: &mut Flare| &mut f.frame)
            .build()
            .unwrap()
    }

    fn ember() -> Flare {
        Flare {
            spark: Spark { heat: 0., tint: [0, 0, 0], tag: "cold".to_owned() },
            frame: 1,
        }
    }

    fn blaze() -> Flare {
        Flare {
            spark: Spark { heat: 10., tint: [200, 100, 50], tag: "hot".to_owned() },
            frame: 2,
        }
    }

    #[test]
    fn nested_layouts_recurse_through_lerp() {
        let layout = flare_layout();

        assert_eq!(layout.lerp(&ember(), &blaze(), 0.), ember());
        assert_eq!(layout.lerp(&ember(), &blaze(), 1.), blaze());
        assert_eq!(
            layout.lerp(&ember(), &blaze(), 0.5),
            Flare {
                spark: Spark { heat: 5., tint: [100, 50, 25], tag: "hot".to_owned() },
                frame: 1,
            }
        );
    }

    #[test]
    fn nested_layouts_see_the_eased_factor() {
        let eased = flare_layout().lerp_eased(&ember(), &blaze(), 0.5, &Easing::InQuad);

        assert_eq!(
            eased,
            Flare {
                spark: Spark { heat: 2.5, tint: [50, 25, 12], tag: "hot".to_owned() },
                frame: 1,
            }
        );
        assert_eq!(
            flare_layout().lerp_eased(&ember(), &blaze(), 0.4, &Easing::InQuad).spark.tag,
            "cold"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn policies_deserialize_from_config() {
        assert_eq!(serde_json::from_str::<Policy>(r#""Continuous""#).unwrap(), Policy::Continuous);
        assert_eq!(serde_json::from_str::<Policy>(r#"{"Stepped":0.7}"#).unwrap(), Policy::Stepped(0.7));
    }
}
