//! Device-side effects and alerts.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Dynamic effect running on the light.
///
/// The wire value is the lowercase variant name.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use hue_lights_rs::Effect;
///
/// assert_eq!(Effect::from_str("colorloop").unwrap(), Effect::Colorloop);
/// assert_eq!(Effect::None.to_string(), "none");
/// assert!(Effect::from_str("strobe").is_err());
/// ```
#[derive(
    Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Effect {
    #[default]
    None,
    /// Cycle through all hues at the current brightness and saturation
    Colorloop,
}

/// Temporary alert used to identify a light.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use hue_lights_rs::Alert;
///
/// assert_eq!(Alert::from_str("select").unwrap(), Alert::Select);
/// assert_eq!(Alert::Select.to_string(), "select");
/// ```
#[derive(
    Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Alert {
    #[default]
    None,
    /// A single breathe cycle
    Select,
}
