//! Configuration file discovery, parsing and validation

pub mod firebase_json;
pub mod locator;
pub mod settings;

pub use firebase_json::{FirebaseConfig, FirebaseJson, HostingEntry, HostingRewrite};
pub use locator::{ConfigLocator, FIREBASE_CONFIG_FILE, FindUp, InMemoryConfig};
pub use settings::{ColorOption, OutputConfig, OutputFormat, Settings};
