//! Color saturation.

use serde::{Deserialize, Serialize};

/// Saturation from 0 (white) to 254 (fully colored).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct Saturation {
    pub(crate) value: u8,
}

impl Default for Saturation {
    fn default() -> Self {
        Self::new()
    }
}

impl Saturation {
    pub(crate) const MAX: u8 = 254;

    pub fn new() -> Self {
        Saturation { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (0-254).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lights_rs::Saturation;
    ///
    /// assert!(Saturation::create(0).is_some());
    /// assert!(Saturation::create(255).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Saturation { value })
        } else {
            None
        }
    }

    /// Returns default (254) if value is invalid.
    pub fn create_or(value: u8) -> Self {
        Self::create(value).unwrap_or_default()
    }

    pub fn clamped(value: i64) -> Self {
        Saturation {
            value: value.clamp(0, Self::MAX as i64) as u8,
        }
    }
}
