//! facegen Core - @font-face stylesheet generator
//!
//! # Guarantees
//! 1. Filenames Are The Contract (`Family-WeightStyle.woff2`)
//! 2. Token Priority Is Fixed
//! 3. Render In Memory, Write Once
//! 4. Deterministic Output

pub mod descriptor;
pub mod stylesheet;
pub mod generator;
pub mod hashing;
pub mod config;
pub mod sources;

pub use descriptor::{describe_listing, FontDescriptor, FontFile, FontStyle, FontWeight};
pub use stylesheet::{render_block, render_fragment, StylesheetFragment};
pub use generator::{generate, plan, GenerationError, GenerationReport, PlannedStylesheet};
pub use hashing::{fragment_hash, sha256_hex};
pub use config::{ConfigError, GeneratorConfig};
pub use sources::{copy_sources, CopySummary, SourceError};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
