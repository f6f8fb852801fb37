//! Brightness control for Hue lights.

use serde::{Deserialize, Serialize};

/// Brightness level from 0 to 254.
///
/// Note that 0 is not "off" on a Hue bulb, only the dimmest level; use
/// [`crate::Light::switch_off`] to power a light down.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl Brightness {
    pub(crate) const MAX: u8 = 254;

    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (0-254).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::Brightness;
    ///
    /// assert_eq!(Brightness::create(128).unwrap().value(), 128);
    /// assert!(Brightness::create(255).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Returns default (254) if value is invalid.
    pub fn create_or(value: u8) -> Self {
        Self::create(value).unwrap_or_default()
    }

    /// Saturates any reported value into range.
    pub fn clamped(value: i64) -> Self {
        Brightness {
            value: value.clamp(0, Self::MAX as i64) as u8,
        }
    }
}
