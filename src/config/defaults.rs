//! Built-in game and shim tables

use super::types::{CompatibilityShim, EnvVar, GameProfile};

pub fn default_games() -> Vec<GameProfile> {
    vec![
        GameProfile::new("ReksioPiraci.exe", &["Piraci.ini", "DDrawCompat-*.log"]),
        GameProfile::new("ReksioUfo.exe", &["Ufo.ini", "DDrawCompat-*.log"]),
        GameProfile::new(
            "Czarodzieje.exe",
            &["Czarodzieje.ini", "DDrawCompat-*.log", "common/*.dta", "common/*.arr"],
        ),
        GameProfile::new(
            "Wehikul.exe",
            &["Wehikul.ini", "DDrawCompat-*.log", "common/*.dta", "common/*.arr"],
        ),
        GameProfile::new("Nemo.exe", &["Nemo.ini", "DDrawCompat-*.log", "common/save/*"]),
        GameProfile::new(
            "Rex5.exe",
            &["rex5.ini", "DDrawCompat-*.log", "common/save/*", "common/save_bd/*"],
        ),
    ]
}

/// Most compatible first. DDrawCompat hooks Windows internals and does not work under Wine.
pub fn default_shims() -> Vec<CompatibilityShim> {
    vec![
        CompatibilityShim::new("ddraw_compat.dll", &["windows"]),
        CompatibilityShim::new("cnc_ddraw_experimental.dll", &["windows", "linux"]),
        CompatibilityShim::new("cnc_ddraw_71.dll", &["windows", "linux"]),
    ]
}

pub fn default_env() -> Vec<EnvVar> {
    vec![
        EnvVar {
            name: "__COMPAT_LAYER".to_string(),
            value: "WinXP,RUNASINVOKER,DisableWER".to_string(),
        },
        EnvVar {
            name: "WINEDLLOVERRIDES".to_string(),
            value: "ddraw=n,b".to_string(),
        },
    ]
}
