//! Resolve sensor measurement settings from the capabilities a device reports.
//!
//! A device reports a [`CapabilitySet`] (every value it supports per
//! [`SettingCategory`]) keyed by protocol codes. This crate translates that
//! report, selects maxima, and builds the [`ResolvedSettings`] that are handed
//! back to the device. Every operation is a pure function over its inputs.

mod builder;
mod category;
mod protocol;
mod settings;

pub mod error;
pub mod error_behavior;

pub use builder::SettingsBuilder;
pub use category::SettingCategory;
pub use error_behavior::{ErrorBehavior, UnknownCategoryBehavior};
pub use protocol::*;
pub use settings::*;
