use std::env;
use std::fs;
use std::path::Path;

// Keys read by `config::AppConfig::from_env` through `option_env!`.
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "IDENTITY_PATH",
    "LOGIN_PATH",
    "PROBE_TIMEOUT_SECONDS",
    "CALLBACK_MODE",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "ROOT_ELEMENT_ID",
];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // The real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env to configure the backend.");
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
