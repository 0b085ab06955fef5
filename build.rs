use std::env;
use std::fs;
use std::path::Path;

/// Claves que lee `AppConfig::from_env`
const CONFIG_KEYS: &[&str] = &[
    "ENABLE_LOGGING", "LOG_LEVEL", "ANONYMOUS_USER", "USER_GLOBAL", "CSRF_GLOBAL", "CSRF_COOKIE",
    "LOGIN_URL", "UPDATE_ITEM_URL", "UPDATE_CONTROL_CLASS", "HIDDEN_CLASS", "CART_ICON_ID",
    "CART_TOTAL_ID", "PRODUCT_DATA_KEY", "ACTION_DATA_KEY", "EVENT_BOX_ID", "COUNTDOWN_BOX_ID",
    "TICK_INTERVAL_MS", "ENDED_MESSAGE",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        match fs::read_to_string(env_file) {
            Ok(contents) => {
                for (key, value) in parse_env_lines(&contents) {
                    if value.is_empty() {
                        println!("cargo:warning={} vacío en .env, se usa el valor por defecto", key);
                        continue;
                    }
                    // Lo que ya viene del entorno de build tiene prioridad
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
            Err(e) => println!("cargo:warning=No se pudo leer .env: {}", e),
        }
    } else {
        println!("cargo:warning=No .env file found. Storefront widgets will use default endpoints and element ids (see .env.example).");
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
        if matches!(env::var(key), Ok(value) if value.trim().is_empty()) {
            println!("cargo:warning={} vacío en el entorno, se usa el valor por defecto", key);
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}

/// KEY=VALUE por línea; ignora comentarios, líneas vacías y comillas alrededor del valor
fn parse_env_lines(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            (key.trim(), value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
