//! Value types for light control parameters.

mod brightness;
mod color;
mod effect;
mod power;
mod saturation;

pub use brightness::Brightness;
pub use color::Rgb;
pub use effect::{Alert, Effect};
pub use power::PowerMode;
pub use saturation::Saturation;
