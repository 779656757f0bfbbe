//! Tactile - control panel inspection and interaction replay

use anyhow::{anyhow, Result};
use clap::Parser;
use tactile::config;
use tactile::control::Emission;
use tactile::mapping::{tick_is_safe, Mapper, ValueMapper};
use tactile::replay;
use tactile::spec::{Geometry, ResponseCurve};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { config: config_path } => {
            println!("Checking panel at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(panel) => {
                    println!("Panel is valid!");
                    println!("  Controls: {}", panel.controls.len());
                    for control in panel.build_controls()? {
                        let spec = control.spec();
                        let curve = match spec.curve() {
                            ResponseCurve::Linear => "linear".to_string(),
                            ResponseCurve::Exponential { exponent } => format!("exponential (k={})", exponent),
                        };
                        let geometry = match spec.geometry() {
                            Geometry::Linear(orientation) => format!("{:?}", orientation).to_lowercase(),
                            Geometry::Rotary { arc_span } => format!("rotary {}°", arc_span),
                        };
                        println!(
                            "    - {} ({}) {}..={} step {} [{}, {}] = {}",
                            control.name(),
                            control.kind().as_str(),
                            spec.min(),
                            spec.max(),
                            spec.step(),
                            curve,
                            geometry,
                            control.display_text()
                        );
                        if let Some(zone) = spec.safe_zone() {
                            println!("        safe zone {}..={}", zone.min, zone.max);
                        }
                    }
                }
                Err(e) => {
                    println!("Panel is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Ticks { config: config_path, control: name } => {
            let panel = config::load_config(&config_path)?;
            let control = panel
                .control(&name)
                .ok_or_else(|| anyhow!("No control named '{}'", name))?
                .build()?;
            let spec = control.spec();
            let ticks = control.ticks();

            if ticks.is_empty() {
                println!("{} has no ticks.", control.name());
                return Ok(());
            }

            println!("{} ({} ticks, {}):", control.name(), ticks.len(), ValueMapper::for_spec(spec).name());
            for tick in ticks.iter() {
                println!(
                    "  {:>6.1}%  {:>12.4}  {}",
                    tick.position,
                    tick.value,
                    if tick_is_safe(tick, spec) { "safe" } else { "outside" }
                );
            }
        }

        Commands::Replay { config: config_path, script: script_path, json } => {
            let panel = config::load_config(&config_path)?;
            let script = replay::load_script(&script_path)?;
            let mut control = panel
                .control(&script.control)
                .ok_or_else(|| anyhow!("Script targets unknown control '{}'", script.control))?
                .build()?;

            let recorder = replay::run(&script, &mut control);

            if json {
                println!("{}", serde_json::to_string_pretty(&recorder.emissions)?);
                return Ok(());
            }

            println!("Replaying {} steps against {}...", script.steps.len(), control.name());
            for emission in &recorder.emissions {
                match emission {
                    Emission::Change { value } => println!("  change   {}", value),
                    Emission::Feedback { direction, time_ms, .. } => {
                        println!("  feedback {} at {}ms", direction.as_str(), time_ms)
                    }
                }
            }
            println!("Final value: {} ({:?})", control.display_text(), control.zone());
        }

        Commands::Init => {
            let example_config = include_str!("../tactile.example.yaml");

            let path = "tactile.yaml";
            if std::path::Path::new(path).exists() {
                println!("tactile.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, example_config)?;
                println!("Created tactile.yaml with example configuration.");
            }
        }
    }

    Ok(())
}
