use std::env;
use std::fs;
use std::path::Path;

/// Claves del .env que se exponen a `option_env!` en config.rs
const FORWARDED_KEYS: &[&str] = &[
    "BACKEND_URL",
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENVIRONMENT",
    "API_KEY",
    "ENABLE_LOGGING",
    "TOAST_DURATION_MS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Sin archivo .env, se usan los valores por defecto (ver .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !FORWARDED_KEYS.contains(&key) {
            continue;
        }
        // Las variables del entorno real tienen prioridad sobre el .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}
