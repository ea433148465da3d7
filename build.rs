//! Stamps `promptgen --version` with the git commit and build time.
//!
//! Either value can be pinned through the environment; otherwise it is probed
//! from `git`/`date`, ending in an "unknown" marker.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "PROMPTGEN_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "PROMPTGEN_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    if let Some(reference) = head_reference() {
        println!("cargo:rerun-if-changed=.git/{reference}");
    }

    emit(GIT_HASH_VAR, || {
        probe("git", &["rev-parse", "--short=12", "HEAD"]).unwrap_or_else(|| "unknown".into())
    });
    emit(TIMESTAMP_VAR, || {
        probe("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(unix_seconds)
    });
}

fn emit(var: &str, fallback: impl FnOnce() -> String) {
    println!("cargo:rerun-if-env-changed={var}");
    let value = env::var(var).unwrap_or_else(|_| fallback());
    println!("cargo:rustc-env={var}={value}");
}

fn head_reference() -> Option<String> {
    let head = fs::read_to_string(".git/HEAD").ok()?;
    head.trim().strip_prefix("ref: ").map(str::to_string)
}

fn unix_seconds() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("unix:{secs}")
}

fn probe(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
