//! Light state mirror and its wire encoding.

use serde::Serialize;
use serde_json::value::RawValue;

use crate::errors::{Error, Result};
use crate::types::{Alert, Brightness, Effect, Saturation};

/// Which color attribute a full-state push carries.
///
/// Hue and xy are tracked independently; setting one never recomputes the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Hue,
    Xy,
}

/// The attribute that changed, selecting what goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateUpdate {
    Hue,
    Xy,
    Brightness,
    Saturation,
    Power,
    Effect,
    Alert,
    /// Power, saturation, brightness and one color attribute in one body.
    Full(ColorMode),
}

/// Last known or desired state of a light.
///
/// Only [`crate::Light`] operations write to it, and each write is followed by
/// a push to the bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct LightState {
    pub(crate) hue: u16,
    pub(crate) brightness: Brightness,
    pub(crate) saturation: Saturation,
    pub(crate) on: bool,
    pub(crate) xy: [f64; 2],
    pub(crate) effect: Effect,
    pub(crate) alert: Alert,
}

impl Default for LightState {
    fn default() -> Self {
        LightState {
            hue: 10000,
            brightness: Brightness::new(),
            saturation: Saturation::new(),
            on: true,
            xy: [0.0, 0.0],
            effect: Effect::None,
            alert: Alert::None,
        }
    }
}

impl LightState {
    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn saturation(&self) -> Saturation {
        self.saturation
    }

    /// Check if the light is switched on.
    pub fn on(&self) -> bool {
        self.on
    }

    pub fn xy(&self) -> [f64; 2] {
        self.xy
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn alert(&self) -> Alert {
        self.alert
    }
}

/// Body of a state PUT. Unset attributes are left out.
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize)]
struct StatePayload {
    on: Option<bool>,
    sat: Option<u8>,
    bri: Option<u8>,
    hue: Option<u16>,
    xy: Option<Box<RawValue>>,
    effect: Option<Effect>,
    alert: Option<Alert>,
}

/// Coordinates are written with exactly four decimals.
fn xy_literal(xy: [f64; 2]) -> Result<Box<RawValue>> {
    RawValue::from_string(format!("[{:.4},{:.4}]", xy[0], xy[1])).map_err(Error::JsonDump)
}

/// Encode the JSON body announcing `update` from `state`.
///
/// Single-attribute updates produce an object with exactly that attribute so
/// unrelated attributes changed by other controllers are left alone.
pub fn encode_update(state: &LightState, update: StateUpdate) -> Result<String> {
    let mut payload = StatePayload::default();

    match update {
        StateUpdate::Hue => payload.hue = Some(state.hue),
        StateUpdate::Xy => payload.xy = Some(xy_literal(state.xy)?),
        StateUpdate::Brightness => payload.bri = Some(state.brightness.value()),
        StateUpdate::Saturation => payload.sat = Some(state.saturation.value()),
        StateUpdate::Power => payload.on = Some(state.on),
        StateUpdate::Effect => payload.effect = Some(state.effect),
        StateUpdate::Alert => payload.alert = Some(state.alert),
        StateUpdate::Full(mode) => {
            payload.on = Some(state.on);
            payload.sat = Some(state.saturation.value());
            payload.bri = Some(state.brightness.value());
            match mode {
                ColorMode::Hue => payload.hue = Some(state.hue),
                ColorMode::Xy => payload.xy = Some(xy_literal(state.xy)?),
            }
        }
    }

    serde_json::to_string(&payload).map_err(Error::JsonDump)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = LightState::default();
        assert_eq!(state.hue(), 10000);
        assert_eq!(state.brightness().value(), 254);
        assert_eq!(state.saturation().value(), 254);
        assert!(state.on());
        assert_eq!(state.xy(), [0.0, 0.0]);
        assert_eq!(state.effect(), Effect::None);
        assert_eq!(state.alert(), Alert::None);
    }

    #[test]
    fn test_encode_hue() {
        let state = LightState {
            hue: 12345,
            ..Default::default()
        };
        assert_eq!(encode_update(&state, StateUpdate::Hue).unwrap(), r#"{"hue":12345}"#);
    }

    #[test]
    fn test_encode_xy_keeps_four_decimals() {
        let state = LightState {
            xy: [0.3127, 0.329],
            ..Default::default()
        };
        assert_eq!(
            encode_update(&state, StateUpdate::Xy).unwrap(),
            r#"{"xy":[0.3127,0.3290]}"#
        );
    }

    #[test]
    fn test_encode_xy_rounds_and_never_uses_exponent() {
        let state = LightState {
            xy: [0.000001, 0.70060623],
            ..Default::default()
        };
        assert_eq!(
            encode_update(&state, StateUpdate::Xy).unwrap(),
            r#"{"xy":[0.0000,0.7006]}"#
        );
    }

    #[test]
    fn test_encode_xy_rejects_nan() {
        let state = LightState {
            xy: [f64::NAN, 0.5],
            ..Default::default()
        };
        assert!(matches!(
            encode_update(&state, StateUpdate::Xy),
            Err(Error::JsonDump(_))
        ));
    }

    #[test]
    fn test_encode_single_fields() {
        let state = LightState {
            brightness: Brightness::create(100).unwrap(),
            saturation: Saturation::create(7).unwrap(),
            on: false,
            effect: Effect::Colorloop,
            alert: Alert::Select,
            ..Default::default()
        };
        let encode = |u| encode_update(&state, u).unwrap();
        assert_eq!(encode(StateUpdate::Brightness), r#"{"bri":100}"#);
        assert_eq!(encode(StateUpdate::Saturation), r#"{"sat":7}"#);
        assert_eq!(encode(StateUpdate::Power), r#"{"on":false}"#);
        assert_eq!(encode(StateUpdate::Effect), r#"{"effect":"colorloop"}"#);
        assert_eq!(encode(StateUpdate::Alert), r#"{"alert":"select"}"#);
    }

    #[test]
    fn test_encode_full_state() {
        let state = LightState {
            hue: 500,
            brightness: Brightness::create(10).unwrap(),
            saturation: Saturation::create(20).unwrap(),
            xy: [0.5, 0.25],
            ..Default::default()
        };
        assert_eq!(
            encode_update(&state, StateUpdate::Full(ColorMode::Hue)).unwrap(),
            r#"{"on":true,"sat":20,"bri":10,"hue":500}"#
        );
        assert_eq!(
            encode_update(&state, StateUpdate::Full(ColorMode::Xy)).unwrap(),
            r#"{"on":true,"sat":20,"bri":10,"xy":[0.5000,0.2500]}"#
        );
    }
}
