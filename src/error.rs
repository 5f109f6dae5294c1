use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while registering a layout or reading lerp configuration.
///
/// Interpolation itself never fails, these only surface at definition time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("layout for `{type_name}` registers no interpolable fields")]
    EmptyLayout { type_name: &'static str },

    #[error("field `{field}` of `{type_name}` is registered more than once")]
    DuplicateField {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("stepped threshold {threshold} of field `{field}` in `{type_name}` is outside [0, 1]")]
    ThresholdOutOfRange {
        type_name: &'static str,
        field: &'static str,
        threshold: f32,
    },

    #[error("unknown easing `{0}`")]
    UnknownEasing(String),
}
