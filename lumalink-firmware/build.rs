//! Build script for lumalink-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates remote.toml, then bakes it into `remote_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use lumalink_core::config::RemoteConfig;
use lumalink_protocol::list::prefix_within;
use serde::Deserialize;

/// Advertised name used when remote.toml does not set one
const DEFAULT_PEER_NAME: &str = "LumaLink";

/// Longest name that fits a legacy advertising packet
const MAX_PEER_NAME_LEN: usize = 29;

/// Layout of remote.toml
#[derive(Deserialize)]
#[serde(default)]
struct RemoteFile {
    peer_name: String,
    #[serde(flatten)]
    remote: RemoteConfig,
}

impl Default for RemoteFile {
    fn default() -> Self {
        Self {
            peer_name: DEFAULT_PEER_NAME.to_string(),
            remote: RemoteConfig::default(),
        }
    }
}

fn main() {
    setup_linker();
    let file = load_config();
    write_config(&file);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Load and validate remote.toml
fn load_config() -> RemoteFile {
    println!("cargo:rerun-if-changed=remote.toml");

    let config_path = Path::new("remote.toml");

    if !config_path.exists() {
        println!("cargo:warning=remote.toml not found, using built-in defaults");
        return RemoteFile::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read remote.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let file: RemoteFile = match toml::from_str(&config_content) {
        Ok(file) => file,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid remote.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    if file.peer_name.is_empty() {
        errors.push("peer_name cannot be empty".to_string());
    }
    if file.peer_name.len() > MAX_PEER_NAME_LEN {
        errors.push(format!(
            "peer_name must be at most {} bytes",
            MAX_PEER_NAME_LEN
        ));
    }
    if let Err(e) = file.remote.validate() {
        errors.push(describe(e));
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid remote configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=remote.toml validated successfully");
    file
}

fn describe(e: lumalink_core::config::ConfigError) -> String {
    use lumalink_core::config::ConfigError;

    match e {
        ConfigError::ZeroPeriod => "timeouts must be greater than zero".to_string(),
        ConfigError::BacklightOutOfRange => format!(
            "backlight levels must be {}-{} mV",
            lumalink_core::config::BACKLIGHT_MIN_MV,
            lumalink_core::config::BACKLIGHT_MAX_MV
        ),
        ConfigError::DimmedAboveNormal => "dimmed_mv cannot exceed normal_mv".to_string(),
        ConfigError::EmptySliderRange => "slider min must be below max".to_string(),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", prefix_within(line, 61))
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit the validated configuration as Rust constants
fn write_config(file: &RemoteFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let c = &file.remote;
    let t = &c.timeouts;

    let source = format!(
        "// Generated from remote.toml\n\
         \n\
         pub const PEER_NAME: &str = {peer:?};\n\
         \n\
         pub const REMOTE_CONFIG: RemoteConfig = RemoteConfig {{\n    \
             timeouts: Timeouts {{\n        \
                 power_off_ms: {power_off},\n        \
                 dim_ms: {dim},\n        \
                 diagnostic_period_ms: {period},\n        \
                 diagnostic_settle_ms: {settle},\n    \
             }},\n    \
             backlight: BacklightConfig {{\n        \
                 normal_mv: {normal},\n        \
                 dimmed_mv: {dimmed},\n    \
             }},\n    \
             brightness: SliderRange::new({b_min}, {b_max}),\n    \
             speed: SliderRange::new({s_min}, {s_max}),\n\
         }};\n",
        peer = file.peer_name,
        power_off = t.power_off_ms,
        dim = t.dim_ms,
        period = t.diagnostic_period_ms,
        settle = t.diagnostic_settle_ms,
        normal = c.backlight.normal_mv,
        dimmed = c.backlight.dimmed_mv,
        b_min = c.brightness.min,
        b_max = c.brightness.max,
        s_min = c.speed.min,
        s_max = c.speed.max,
    );

    fs::write(out_dir.join("remote_config.rs"), source).unwrap();
}
