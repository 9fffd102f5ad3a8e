pub const PROGRAM_NAME: &str = "ISS Locator";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "iss-locator.log";
