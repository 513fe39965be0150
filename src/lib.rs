//! Underwhere: terminal survey console with streamed AI Discovery
//!
//! This library backs a demo field-survey console: fixture-driven survey
//! modules, prompt builders, and a streaming generation client with an
//! immutable startup configuration gate.

pub mod cli;
pub mod gen;
pub mod modules;
pub mod prompts;
pub mod report;
pub mod session;
pub mod ui;

// Re-export the generation surface for convenience
pub use gen::{ConfigState, GenClient, GenError, GenEvent};

// Re-export domain types used across the console
pub use modules::{AnalysisRun, ModuleStatus, SurveyModule, ValidationError};
pub use report::{build_repro_package, split_sections, FieldReport};
pub use session::SessionFlags;
