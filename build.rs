use chrono::{DateTime, Utc};
use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // honor SOURCE_DATE_EPOCH for reproducible builds
    let now: DateTime<Utc> = match env::var("SOURCE_DATE_EPOCH") {
        Ok(val) => match val.parse::<i64>().ok().and_then(|s| DateTime::from_timestamp(s, 0)) {
            Some(t) => t,
            None => Utc::now(),
        },
        Err(_) => Utc::now(),
    };
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", now.to_rfc3339());

    println!(
        "cargo:rustc-env=BUILD_TARGET={}",
        env::var("TARGET").unwrap_or_default()
    );

    let commit = match env::var("GIT_COMMIT") {
        Ok(val) => val,
        Err(_) => Command::new("git")
            .args(["rev-parse", "HEAD"])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .unwrap_or_default()
            .trim()
            .to_string(),
    };
    println!("cargo:rustc-env=GIT_COMMIT={commit}");
}
