//! RGB color representation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::conversion::rgb_to_xy;
use crate::errors::Error;

/// An RGB color with red, green, and blue components (0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Chromaticity of this color, see [`crate::rgb_to_xy`].
    pub fn to_xy(&self) -> (f64, f64) {
        rgb_to_xy(self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse from comma-separated string (e.g., "255,128,0").
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use hue_lights_rs::Rgb;
    ///
    /// assert_eq!(Rgb::from_str("255, 128,0").unwrap(), Rgb::new(255, 128, 0));
    /// assert!(Rgb::from_str("255,128").is_err());
    /// assert!(Rgb::from_str("256,0,0").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = s
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidColorString(s.to_string()))?;

        match parts.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(Error::InvalidColorString(s.to_string())),
        }
    }
}
