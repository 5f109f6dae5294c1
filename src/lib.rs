//! Field-wise linear interpolation.
//!
//! [`Lerp`] blends two endpoints by a factor `t`. Numbers, vectors and arrays
//! blend continuously, flags and sequences switch at `0.5`. Composite types
//! register which fields take part and how through a [`Layout`]:
//!
//! ```
//! use lerpable::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Flash {
//!     alpha: f32,
//!     frame: u32,
//! }
//!
//! let layout = Layout::builder()
//!     .continuous("alpha", |f: &Flash| &f.alpha, |f: &mut Flash| &mut f.alpha)
//!     .stepped("frame", 0.7, |f: &Flash| &f.frame, |f: &mut Flash| &mut f.frame)
//!     .build()?;
//!
//! let (from, to) = (Flash { alpha: 0., frame: 1 }, Flash { alpha: 1., frame: 2 });
//!
//! assert_eq!(layout.lerp(&from, &to, 0.5), Flash { alpha: 0.5, frame: 1 });
//! assert_eq!(
//!     layout.lerp_eased(&from, &to, 0.5, &Easing::InQuad),
//!     Flash { alpha: 0.25, frame: 1 }
//! );
//! # Ok::<(), lerpable::Error>(())
//! ```

mod easing;
mod error;
mod layout;
mod lerp;
mod primitives;
mod stepped;

pub use easing::{Ease, Easing, Weight};
pub use error::{Error, Result};
pub use layout::{FieldDescriptor, Layout, LayoutBuilder, Policy};
pub use lerp::{eased, lerp, Lerp};
pub use stepped::{stepped, Stepped, DEFAULT_THRESHOLD};

pub mod prelude {
    pub use crate::easing::{Ease, Easing, Weight};
    pub use crate::layout::{Layout, Policy};
    pub use crate::lerp::{eased, lerp, Lerp};
    pub use crate::stepped::{stepped, Stepped};
}
