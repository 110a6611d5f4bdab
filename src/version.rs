// Compile-time constants from Cargo.toml and build.rs
pub const VERSION: &str = env!("SAM_VERSION");
pub const BIN_NAME: &str = "sam";

/// `sam <version>`
pub fn banner() -> String {
    format!("{} {}", BIN_NAME, VERSION)
}
