//! Compile-time build metadata exposed to CLI surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("PROMPTGEN_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("PROMPTGEN_BUILD_TIMESTAMP");

/// Version block shown by `promptgen --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("PROMPTGEN_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("PROMPTGEN_BUILD_TIMESTAMP")
);

/// One-line summary for logs.
pub fn version_line() -> String {
    format!("promptgen v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}
