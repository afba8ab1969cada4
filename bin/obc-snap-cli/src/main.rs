// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # obc-snap
//!
//! Takes one snapshot of the on-board power monitor and temperature probes
//! and prints it as JSON on stdout.
//!
//! ## Usage
//! ```bash
//! # Snapshot with the built-in defaults (/dev/i2c-1, INA219 @ 0x40, 0.1 Ω)
//! obc-snap
//!
//! # Explicit probes, single-line output
//! obc-snap --probe 28-000000000001 --probe 28-000000000002 snapshot --compact
//!
//! # Print the effective configuration
//! obc-snap --config ./obc.toml config
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "obc-snap",
    about = "One-shot INA219 and DS18B20 sensor snapshot",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// I2C bus device (e.g., "/dev/i2c-1").
    #[arg(long, global = true)]
    bus: Option<PathBuf>,

    /// INA219 address, decimal or 0x-prefixed hex.
    #[arg(long, global = true, value_parser = commands::parse_address)]
    address: Option<u8>,

    /// Shunt resistance in ohms.
    #[arg(long, global = true)]
    shunt_ohms: Option<f64>,

    /// One-wire devices directory.
    #[arg(long, global = true)]
    w1_root: Option<PathBuf>,

    /// DS18B20 identifier; repeat for several probes, in output order.
    #[arg(short, long = "probe", global = true)]
    probes: Vec<String>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read every sensor once and print the JSON document (default).
    Snapshot {
        /// Emit single-line JSON instead of indented output.
        #[arg(long)]
        compact: bool,
    },

    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the document.
    commands::init_tracing(cli.verbose);

    let overrides = commands::Overrides {
        bus: cli.bus,
        address: cli.address,
        shunt_ohms: cli.shunt_ohms,
        w1_root: cli.w1_root,
        probes: cli.probes,
    };
    let config = commands::load_config(cli.config.as_deref(), overrides)?;

    match cli.command.unwrap_or(Commands::Snapshot { compact: false }) {
        Commands::Snapshot { compact } => commands::snapshot::execute(&config, compact),
        Commands::Config => commands::config::execute(&config),
    }
}
