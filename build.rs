use std::env;
use std::fs;
use std::path::Path;

/// Variables que el crate lee con `option_env!` (ver src/config.rs)
const KNOWN_KEYS: &[&str] = &[
    "BACKEND_URL",
    "TOMTOM_API_KEY",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. TOMTOM_API_KEY is empty and BACKEND_URL defaults to http://localhost:3001. Copy .env.example to .env to configure them.");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Could not read .env");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        // Aceptar también el prefijo de Next.js (NEXT_PUBLIC_TOMTOM_API_KEY, ...)
        let key = key.strip_prefix("NEXT_PUBLIC_").unwrap_or(key);
        if !KNOWN_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key {}", key);
            continue;
        }
        let value = value.trim().trim_matches('"');

        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
