use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::error::{EmptyCapabilityError, UnknownCategoryError};
use crate::{CapabilitySet, ErrorBehavior, ResolvedSettings, SettingCategory, UnknownCategoryBehavior};

/// A capability report as sent by the device: protocol code to the set of
/// supported values.
pub type ProtocolCapabilities = BTreeMap<u8, BTreeSet<u32>>;

/// Chosen settings as sent to the device: protocol code to value.
pub type ProtocolSettings = BTreeMap<u8, u32>;

/// Translate a device capability report into a [`CapabilitySet`].
///
/// This will return an error on the first protocol code (in ascending order)
/// that has no matching [`SettingCategory`].
pub fn from_protocol_capabilities(raw: &ProtocolCapabilities) -> Result<CapabilitySet, UnknownCategoryError> {
    from_protocol_capabilities_with(raw, &ErrorBehavior::default())
}

/// Translate a device capability report into a [`CapabilitySet`], responding
/// to unknown protocol codes as described by `behavior`.
pub fn from_protocol_capabilities_with(
    raw: &ProtocolCapabilities,
    behavior: &ErrorBehavior,
) -> Result<CapabilitySet, UnknownCategoryError> {
    debug!("Translating capability report with {} setting codes", raw.len());

    let mut caps = CapabilitySet::new();
    for (code, values) in raw.iter() {
        match SettingCategory::from_code(*code) {
            Some(category) => caps.insert(category, values.iter().copied()),
            None => match behavior.unknown_category {
                UnknownCategoryBehavior::ReturnWithError => {
                    return Err(UnknownCategoryError { code: *code });
                }
                UnknownCategoryBehavior::Ignore => {
                    warn!("Ignoring unknown setting code {} in capability report", code);
                }
            },
        }
    }

    Ok(caps)
}

/// Translate a [`CapabilitySet`] back into its protocol representation.
pub fn to_protocol_capabilities(caps: &CapabilitySet) -> ProtocolCapabilities {
    caps.iter().map(|(category, values)| (category.code(), values.clone())).collect()
}

/// Translate resolved settings into the form sent to the device.
pub fn to_protocol_settings(resolved: &ResolvedSettings) -> ProtocolSettings {
    resolved.iter().map(|(category, value)| (category.code(), *value)).collect()
}

/// Translate a set-valued selection into the form sent to the device,
/// using the largest value of every category.
///
/// This will return an error if a category is present but has no values.
pub fn capabilities_to_protocol_settings(caps: &CapabilitySet) -> Result<ProtocolSettings, EmptyCapabilityError> {
    Ok(to_protocol_settings(&caps.max_settings()?))
}
