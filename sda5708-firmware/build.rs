//! Build script for sda5708-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Copy memory.x next to the build output and add the linker scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x"))
        .expect("failed to write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Reject a display.toml the firmware would refuse at startup
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        fail(
            "display.toml not found",
            &[
                "The firmware embeds display.toml from the",
                "sda5708-firmware directory. Please create one.",
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &[e]),
    };

    // Full TOML syntax first, for the better messages
    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        let msg = e.to_string();
        let lines: Vec<&str> = msg.lines().collect();
        fail("Invalid TOML syntax in display.toml", &lines);
    }

    // Then exactly what the firmware runs at startup
    let config = match sda5708_core::config::parse_config(&content) {
        Ok(config) => config,
        Err(e) => fail("Unsupported syntax in display.toml", &[e]),
    };

    if let Err(e) = config.validate() {
        fail("Invalid display configuration", &[e]);
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Panic with a boxed error message
fn fail<T: Display>(title: &str, details: &[T]) -> ! {
    let body = details
        .iter()
        .map(|line| {
            let line = line.to_string();
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
