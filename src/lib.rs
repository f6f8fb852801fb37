//! # hue_lights_rs
//!
//! A blocking Rust client for Philips Hue lights, talking to the bridge's
//! local HTTP API.
//!
//! The [`Client`] lists the lights known to a bridge and keeps a local mirror
//! of each light's state. Every change made through a [`Light`] updates that
//! mirror and immediately sends the changed attribute to the bridge.
//!
//! ## Quick Start
//!
//! ```no_run
//! use hue_lights_rs::{Brightness, Client, Effect};
//!
//! fn control_lights() -> Result<(), Box<dyn std::error::Error>> {
//!     // The bridge address and an API username created on the bridge
//!     let mut client = Client::new("192.168.1.2", "my-api-username")?;
//!     client.connect()?;
//!
//!     let light = client.get_mut("1")?;
//!     light.switch_on()?;
//!     light.set_color_rgb(0, 0, 255)?;
//!     light.set_brightness(Brightness::create(128).unwrap())?;
//!     light.set_effect(Effect::Colorloop)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Discovery**: Enumerate the bridge's lights with [`Client::connect`]
//! - **RGB Colors**: Converted to CIE xy with [`rgb_to_xy`]
//! - **Hue, Brightness, Saturation**: Device-native values via [`Brightness`] and [`Saturation`]
//! - **Power Control**: [`Light::switch_on`], [`Light::switch_off`], [`Light::toggle`]
//! - **Effects and Alerts**: Closed sets in [`Effect`] and [`Alert`]
//! - **Partial Updates**: Only the changed attribute is sent, see [`encode_update`]
//!
//! ## Communication
//!
//! Lights are listed with `GET http://<address>/api/<credential>/lights` and
//! changed with `PUT http://<address>/api/<credential>/lights/<id>/state`.
//! Calls are synchronous and sequential; there is no retry. A failed call
//! returns an [`Error`] and leaves the local state as requested, not as it
//! was before the call.
//!
//! ## Feature Flags
//!
//! - `transport-reqwest` (default): Blocking HTTP through reqwest. Without it,
//!   provide your own [`transport::Transport`] to [`Client::with_transport`].

mod client;
mod config;
mod conversion;
mod discovery;
mod errors;
mod light;
mod response;
mod state;
pub mod transport;
mod types;

// Re-export public API
pub use client::Client;
pub use config::ClientConfig;
pub use conversion::{gamma_correct, rgb_to_xy};
pub use discovery::LightInfo;
pub use errors::{Error, Result};
pub use light::Light;
pub use state::{ColorMode, LightState, StateUpdate, encode_update};
pub use types::{Alert, Brightness, Effect, PowerMode, Rgb, Saturation};
