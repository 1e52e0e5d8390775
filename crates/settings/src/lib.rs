//! Run parameters: defaults, validation and model selection.
//!
//! Every value can be overridden from a JSON parameter file. Invalid
//! choices fall back to their defaults with a logged warning rather than
//! aborting the run.

pub mod error;
pub mod params;
pub mod validation;


pub use error::{SettingsError, SettingsResult};
pub use params::{DeprecationWarnings, IntegrationStep, Settings, WarningMode};
pub use validation::{clamp_to_interval, default_settings, deprecation_warnings, validate};
