//! Light enumeration through the bridge.

use std::collections::HashMap;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::state::LightState;
use crate::types::{Alert, Brightness, Effect, Saturation};

/// Body of `GET /api/<credential>/lights`: light id to description.
pub(crate) type LightMap = HashMap<String, DiscoveredLight>;

/// A light as described by the bridge.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub(crate) struct DiscoveredLight {
    pub state: ReportedState,
    #[serde(rename = "type")]
    pub light_type: String,
    pub name: String,
    pub modelid: String,
    pub manufacturername: String,
    pub uniqueid: String,
    pub swversion: String,
}

/// State as reported by the bridge.
///
/// White-only bulbs omit the color attributes, so every field is optional.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub(crate) struct ReportedState {
    pub on: Option<bool>,
    pub bri: Option<i64>,
    pub hue: Option<i64>,
    pub sat: Option<i64>,
    pub effect: Option<String>,
    pub xy: Option<[f64; 2]>,
    pub ct: Option<i64>,
    pub alert: Option<String>,
    pub colormode: Option<String>,
    pub reachable: Option<bool>,
}

/// Descriptive attributes of a light that never change through this API.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LightInfo {
    pub light_type: String,
    pub model_id: String,
    pub manufacturer: String,
    pub unique_id: String,
    pub sw_version: String,
}

impl From<&DiscoveredLight> for LightInfo {
    fn from(light: &DiscoveredLight) -> Self {
        LightInfo {
            light_type: light.light_type.clone(),
            model_id: light.modelid.clone(),
            manufacturer: light.manufacturername.clone(),
            unique_id: light.uniqueid.clone(),
            sw_version: light.swversion.clone(),
        }
    }
}

impl From<&ReportedState> for LightState {
    fn from(reported: &ReportedState) -> Self {
        let defaults = LightState::default();

        LightState {
            hue: reported
                .hue
                .map(|h| h.clamp(0, u16::MAX as i64) as u16)
                .unwrap_or(defaults.hue),
            brightness: reported
                .bri
                .map(Brightness::clamped)
                .unwrap_or(defaults.brightness),
            saturation: reported
                .sat
                .map(Saturation::clamped)
                .unwrap_or(defaults.saturation),
            on: reported.on.unwrap_or(defaults.on),
            xy: reported.xy.unwrap_or(defaults.xy),
            effect: reported
                .effect
                .as_deref()
                .map(|e| parse_tag("effect", e))
                .unwrap_or(defaults.effect),
            alert: reported
                .alert
                .as_deref()
                .map(|a| parse_tag("alert", a))
                .unwrap_or(defaults.alert),
        }
    }
}

/// Tags outside the supported set fall back to the default variant.
fn parse_tag<T: FromStr + Default>(attribute: &str, value: &str) -> T {
    T::from_str(value).unwrap_or_else(|_| {
        warn!("Unsupported {attribute} '{value}' reported, using default");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR_BULB: &str = r#"{
        "state": {
            "on": false, "bri": 120, "hue": 4000, "sat": 200, "effect": "colorloop",
            "xy": [0.4, 0.35], "ct": 300, "alert": "select", "colormode": "xy",
            "reachable": true
        },
        "type": "Extended color light",
        "name": "Hallway",
        "modelid": "LCT015",
        "manufacturername": "Signify Netherlands B.V.",
        "uniqueid": "00:17:88:01:00:aa:bb:cc-0b",
        "swversion": "1.88.1"
    }"#;

    #[test]
    fn test_seed_color_bulb() {
        let light: DiscoveredLight = serde_json::from_str(COLOR_BULB).unwrap();
        let state = LightState::from(&light.state);

        assert!(!state.on());
        assert_eq!(state.brightness().value(), 120);
        assert_eq!(state.hue(), 4000);
        assert_eq!(state.saturation().value(), 200);
        assert_eq!(state.xy(), [0.4, 0.35]);
        assert_eq!(state.effect(), Effect::Colorloop);
        assert_eq!(state.alert(), Alert::Select);

        let info = LightInfo::from(&light);
        assert_eq!(info.model_id, "LCT015");
        assert_eq!(info.light_type, "Extended color light");
    }

    #[test]
    fn test_seed_white_bulb_keeps_color_defaults() {
        let light: DiscoveredLight = serde_json::from_str(
            r#"{"state": {"on": true, "bri": 30, "alert": "none", "reachable": true},
                "type": "Dimmable light", "name": "Desk"}"#,
        )
        .unwrap();
        let state = LightState::from(&light.state);

        assert_eq!(state.brightness().value(), 30);
        assert_eq!(state.hue(), 10000);
        assert_eq!(state.saturation().value(), 254);
        assert_eq!(state.xy(), [0.0, 0.0]);
        assert_eq!(light.modelid, "");
    }

    #[test]
    fn test_unknown_tags_and_out_of_range_values() {
        let reported = ReportedState {
            bri: Some(300),
            sat: Some(-4),
            hue: Some(70000),
            effect: Some("sparkle".into()),
            alert: Some("lselect".into()),
            ..Default::default()
        };
        let state = LightState::from(&reported);

        assert_eq!(state.brightness().value(), 254);
        assert_eq!(state.saturation().value(), 0);
        assert_eq!(state.hue(), u16::MAX);
        assert_eq!(state.effect(), Effect::None);
        assert_eq!(state.alert(), Alert::None);
    }
}
