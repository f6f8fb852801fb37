//! Bridge client and light registry.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::config::ClientConfig;
use crate::discovery::LightMap;
use crate::errors::{Error, Result};
use crate::light::{Connection, Light};
use crate::transport::{Request, Transport};

/// Entry point for one Hue bridge.
///
/// A client is created without touching the network. [`Client::connect`]
/// fetches the bridge's light list and (re)builds the collection of
/// [`Light`]s, which are then controlled through [`Client::light_mut`].
///
/// Discovery and light updates need exclusive access to the client, so a
/// rediscovery can never race with a pending light update.
///
/// # Example
///
/// ```no_run
/// use hue_lights_rs::Client;
///
/// # fn main() -> Result<(), hue_lights_rs::Error> {
/// let mut client = Client::new("192.168.1.2", "my-api-username")?;
/// client.connect()?;
///
/// for light in client.lights_mut() {
///     light.switch_on()?;
///     light.set_color_rgb(110, 110, 210)?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    connection: Arc<Connection>,
    lights: HashMap<String, Light>,
}

impl Client {
    /// Create a client using the blocking reqwest transport.
    #[cfg(feature = "transport-reqwest")]
    pub fn new(address: &str, credential: &str) -> Result<Self> {
        Self::from_config(ClientConfig::new(address, credential))
    }

    /// Create a client using the blocking reqwest transport, honouring the
    /// configured timeout.
    #[cfg(feature = "transport-reqwest")]
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = crate::transport::HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Create a client on top of a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn Transport>) -> Self {
        Client {
            connection: Arc::new(Connection { config, transport }),
            lights: HashMap::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.connection.config
    }

    /// Fetch all lights from the bridge and replace the known collection.
    ///
    /// On any failure the previous collection is left untouched.
    pub fn connect(&mut self) -> Result<()> {
        let url = self.connection.config.lights_url();
        let body = self.connection.execute(&Request::get(&url))?;
        let reported: LightMap = serde_json::from_str(&body).map_err(Error::JsonLoad)?;

        let lights = reported
            .iter()
            .map(|(id, discovered)| {
                debug!("Discovered light {} ({})", id, discovered.name);
                let light = Light::from_discovered(id, discovered, Arc::clone(&self.connection));
                (id.clone(), light)
            })
            .collect();

        self.lights = lights;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// List all known light ids.
    pub fn ids(&self) -> Vec<&str> {
        self.lights.keys().map(String::as_str).collect()
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.values()
    }

    pub fn lights_mut(&mut self) -> impl Iterator<Item = &mut Light> {
        self.lights.values_mut()
    }

    /// Get a reference to a light by id.
    pub fn light(&self, id: &str) -> Option<&Light> {
        self.lights.get(id)
    }

    /// Get a mutable reference to a light by id.
    pub fn light_mut(&mut self, id: &str) -> Option<&mut Light> {
        self.lights.get_mut(id)
    }

    /// Like [`Client::light_mut`], but a missing light is an error.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Light> {
        self.lights
            .get_mut(id)
            .ok_or_else(|| Error::LightNotFound(id.to_string()))
    }
}
