//! CLI application for controlling Hue lights.
//!
//! Run with: cargo run --example hue_cli -- --help

use clap::{Parser, Subcommand};
use std::str::FromStr;
use std::time::Duration;
use hue_lights_rs::{Alert, Brightness, Client, ClientConfig, Effect, Rgb, Saturation};
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(name = "hue-cli")]
#[command(about = "Control Philips Hue lights from the command line", long_about = None)]
struct Cli {
    /// Address of the Hue bridge
    #[arg(short, long, global = true)]
    address: Option<String>,

    /// API username registered on the bridge
    #[arg(short, long, global = true)]
    credential: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, global = true, default_value = "5")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all lights known to the bridge
    List,

    /// Turn a light on
    On { id: String },

    /// Turn a light off
    Off { id: String },

    /// Toggle a light on/off
    Toggle { id: String },

    /// Set the hue (0-65535)
    Hue { id: String, hue: u16 },

    /// Set RGB color, e.g. "255,128,0"
    Color { id: String, rgb: String },

    /// Set brightness (0-254)
    Brightness {
        id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=254))]
        level: u8,
    },

    /// Set saturation (0-254)
    Saturation {
        id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=254))]
        level: u8,
    },

    /// Set an effect (none, colorloop)
    Effect { id: String, effect: String },

    /// Trigger an alert (none, select)
    Alert { id: String, alert: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let address = cli.address.ok_or("bridge address is required. Use --address <ADDRESS>")?;
    let credential = cli
        .credential
        .ok_or("API username is required. Use --credential <USERNAME>")?;
    let config = ClientConfig::new(&address, &credential)
        .with_timeout(Duration::from_secs(cli.timeout));

    let mut client = Client::from_config(config)?;
    client.connect()?;

    match cli.command {
        Commands::List => {
            if client.is_empty() {
                println!("No lights found on the bridge.");
            }
            let mut lights: Vec<_> = client.lights().collect();
            lights.sort_by(|a, b| a.id().cmp(b.id()));
            for light in lights {
                let state = light.state();
                println!(
                    "{:>3}  {:24} {:4} bri={:3} hue={:5} sat={:3} xy=[{:.4},{:.4}] effect={} ({})",
                    light.id(),
                    light.name(),
                    if state.on() { "ON" } else { "OFF" },
                    state.brightness().value(),
                    state.hue(),
                    state.saturation().value(),
                    state.xy()[0],
                    state.xy()[1],
                    state.effect(),
                    light.info().model_id,
                );
            }
        }

        Commands::On { id } => {
            client.get_mut(&id)?.switch_on()?;
            println!("Light {} turned ON", id);
        }

        Commands::Off { id } => {
            client.get_mut(&id)?.switch_off()?;
            println!("Light {} turned OFF", id);
        }

        Commands::Toggle { id } => {
            client.get_mut(&id)?.toggle()?;
            println!("Light {} toggled", id);
        }

        Commands::Hue { id, hue } => {
            client.get_mut(&id)?.set_color_hue(hue)?;
            println!("Hue set to {}", hue);
        }

        Commands::Color { id, rgb } => {
            let color = Rgb::from_str(&rgb)?;
            let (x, y) = color.to_xy();
            client.get_mut(&id)?.set_color(&color)?;
            println!("Color set to xy [{:.4}, {:.4}]", x, y);
        }

        Commands::Brightness { id, level } => {
            client.get_mut(&id)?.set_brightness(Brightness::create_or(level))?;
            println!("Brightness set to {}", level);
        }

        Commands::Saturation { id, level } => {
            client.get_mut(&id)?.set_saturation(Saturation::create_or(level))?;
            println!("Saturation set to {}", level);
        }

        Commands::Effect { id, effect } => {
            let Ok(effect) = Effect::from_str(&effect.to_lowercase()) else {
                let known: Vec<String> = Effect::iter().map(|e| e.to_string()).collect();
                eprintln!("Unknown effect. Available: {}", known.join(", "));
                return Ok(());
            };
            client.get_mut(&id)?.set_effect(effect)?;
            println!("Effect set to {}", effect);
        }

        Commands::Alert { id, alert } => {
            let Ok(alert) = Alert::from_str(&alert.to_lowercase()) else {
                let known: Vec<String> = Alert::iter().map(|a| a.to_string()).collect();
                eprintln!("Unknown alert. Available: {}", known.join(", "));
                return Ok(());
            };
            client.get_mut(&id)?.set_alert(alert)?;
            println!("Alert set to {}", alert);
        }
    }

    Ok(())
}
