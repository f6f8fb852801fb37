//! Individual light control.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::config::ClientConfig;
use crate::conversion::rgb_to_xy;
use crate::discovery::{DiscoveredLight, LightInfo};
use crate::errors::Result;
use crate::response;
use crate::state::{ColorMode, LightState, StateUpdate, encode_update};
use crate::transport::{Request, Transport};
use crate::types::{Alert, Brightness, Effect, PowerMode, Rgb, Saturation};

/// Bridge address, credential and transport shared by a client and its lights.
pub(crate) struct Connection {
    pub config: ClientConfig,
    pub transport: Box<dyn Transport>,
}

impl Connection {
    /// Send one request and validate the bridge's answer.
    pub fn execute(&self, request: &Request) -> Result<String> {
        debug!("{} body: {:?}", request, request.body);
        let response = self.transport.send(request)?;
        response::check(&request.url, &response)?;
        Ok(response.body)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("address", &self.config.address)
            .finish_non_exhaustive()
    }
}

/// A single light known to a Hue bridge.
///
/// Lights are created by [`crate::Client::connect`]. Every setter first
/// updates the local state mirror and then sends only the changed attribute
/// to the bridge. If the request fails the local state is kept as set, so it
/// may no longer match the bulb; issue the call again to resync.
#[derive(Debug)]
pub struct Light {
    id: String,
    name: String,
    info: LightInfo,
    state: LightState,
    connection: Arc<Connection>,
}

impl Light {
    pub(crate) fn from_discovered(
        id: &str,
        discovered: &DiscoveredLight,
        connection: Arc<Connection>,
    ) -> Self {
        Light {
            id: id.to_string(),
            name: discovered.name.clone(),
            info: LightInfo::from(discovered),
            state: LightState::from(&discovered.state),
            connection,
        }
    }

    /// Bridge-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name at discovery time.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> &LightInfo {
        &self.info
    }

    pub fn state(&self) -> &LightState {
        &self.state
    }

    /// Sets the hue (0-65535). Leaves the xy color untouched.
    pub fn set_color_hue(&mut self, hue: u16) -> Result<()> {
        self.state.hue = hue;
        self.push(StateUpdate::Hue)
    }

    /// Converts the RGB color to xy and sends it. Leaves the hue untouched.
    pub fn set_color_rgb(&mut self, red: u8, green: u8, blue: u8) -> Result<()> {
        let (x, y) = rgb_to_xy(red, green, blue);
        self.state.xy = [x, y];
        self.push(StateUpdate::Xy)
    }

    pub fn set_color(&mut self, color: &Rgb) -> Result<()> {
        self.set_color_rgb(color.red, color.green, color.blue)
    }

    pub fn set_brightness(&mut self, brightness: Brightness) -> Result<()> {
        self.state.brightness = brightness;
        self.push(StateUpdate::Brightness)
    }

    pub fn set_saturation(&mut self, saturation: Saturation) -> Result<()> {
        self.state.saturation = saturation;
        self.push(StateUpdate::Saturation)
    }

    pub fn switch_on(&mut self) -> Result<()> {
        self.state.on = true;
        self.push(StateUpdate::Power)
    }

    pub fn switch_off(&mut self) -> Result<()> {
        self.state.on = false;
        self.push(StateUpdate::Power)
    }

    pub fn set_power(&mut self, power: PowerMode) -> Result<()> {
        match power {
            PowerMode::On => self.switch_on(),
            PowerMode::Off => self.switch_off(),
        }
    }

    /// Flips the locally known power state.
    pub fn toggle(&mut self) -> Result<()> {
        self.set_power(PowerMode::from(!self.state.on))
    }

    pub fn set_effect(&mut self, effect: Effect) -> Result<()> {
        self.state.effect = effect;
        self.push(StateUpdate::Effect)
    }

    pub fn set_alert(&mut self, alert: Alert) -> Result<()> {
        self.state.alert = alert;
        self.push(StateUpdate::Alert)
    }

    /// Sends power, saturation, brightness and the chosen color attribute in
    /// a single request, overwriting whatever the bulb currently shows.
    pub fn push_full_state(&self, mode: ColorMode) -> Result<()> {
        self.push(StateUpdate::Full(mode))
    }

    fn push(&self, update: StateUpdate) -> Result<()> {
        let body = encode_update(&self.state, update)?;
        let url = self.connection.config.light_state_url(&self.id);
        self.connection.execute(&Request::put(&url, body))?;
        Ok(())
    }
}
