//! Forwards the webhook configuration from `.env` to `option_env!`.
//!
//! The browser has no process environment, so configuration is baked in at
//! build time. Variables already set in the build environment win over the
//! file.

const FORWARDED: &[&str] = &["WEBHOOK_URL", "DASHBOARD_URL"];

fn main() {
    for key in FORWARDED {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let preset: Vec<&str> = FORWARDED
        .iter()
        .copied()
        .filter(|key| std::env::var_os(key).is_some())
        .collect();

    // dotenvy never overrides variables that are already set
    let Ok(path) = dotenvy::dotenv() else {
        return;
    };
    println!("cargo:rerun-if-changed={}", path.display());

    for key in FORWARDED.iter().filter(|key| !preset.contains(key)) {
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
