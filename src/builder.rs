use log::{debug, trace};

use crate::error::EmptyCapabilityError;
use crate::{CapabilitySet, ResolvedSettings, SettingCategory};

/// Categories that are filled with the largest supported value when the
/// user did not choose one explicitly.
const AUTO_FILLED: [SettingCategory; 2] = [SettingCategory::Resolution, SettingCategory::Channels];

/// Builds a [`ResolvedSettings`] from explicit choices layered on top of the
/// capabilities a device reported.
///
/// ```
/// use sensor_settings::{CapabilitySet, SettingCategory, SettingsBuilder};
///
/// let caps: CapabilitySet = vec![
///     (SettingCategory::SampleRate, vec![130u32]),
///     (SettingCategory::Resolution, vec![8, 16]),
/// ]
/// .into_iter()
/// .collect();
///
/// let settings = SettingsBuilder::new(&caps).sample_rate(130).build().unwrap();
/// assert_eq!(settings.get(SettingCategory::Resolution), Some(16));
/// ```
#[derive(Debug, Clone)]
pub struct SettingsBuilder<'a> {
    source: &'a CapabilitySet,
    selected: ResolvedSettings,
}

impl<'a> SettingsBuilder<'a> {
    pub fn new(source: &'a CapabilitySet) -> Self {
        Self { source, selected: ResolvedSettings::new() }
    }

    /// Explicitly choose a value for any category.
    ///
    /// Explicit choices are not checked against the source capabilities.
    pub fn set(mut self, category: SettingCategory, value: u32) -> Self {
        self.selected.insert(category, value);
        self
    }

    /// Sample rate in Hz.
    pub fn sample_rate(self, rate: u32) -> Self {
        self.set(SettingCategory::SampleRate, rate)
    }

    /// Resolution in bits.
    pub fn resolution(self, resolution: u32) -> Self {
        self.set(SettingCategory::Resolution, resolution)
    }

    pub fn range(self, range: u32) -> Self {
        self.set(SettingCategory::Range, range)
    }

    pub fn range_milliunit(self, range: u32) -> Self {
        self.set(SettingCategory::RangeMilliunit, range)
    }

    pub fn channels(self, channels: u32) -> Self {
        self.set(SettingCategory::Channels, channels)
    }

    /// Finish building the settings.
    ///
    /// Every explicit choice is kept as-is. Resolution and channels fall back
    /// to the largest value the source supports. Any other category that was
    /// not chosen is left out.
    ///
    /// This will return an error if a fallback category is present in the
    /// source but has no supported values.
    pub fn build(self) -> Result<ResolvedSettings, EmptyCapabilityError> {
        let SettingsBuilder { source, mut selected } = self;

        for category in AUTO_FILLED.iter().copied() {
            if selected.contains(category) {
                continue;
            }
            if let Some(max) = source.max_value(category)? {
                trace!("Using the largest supported {} for unset category: {}", category, max);
                selected.insert(category, max);
            }
        }

        debug!("Built settings with {} categories", selected.len());
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> CapabilitySet {
        let reported: Vec<(SettingCategory, Vec<u32>)> = vec![
            (SettingCategory::SampleRate, vec![25, 50, 100, 200]),
            (SettingCategory::Resolution, vec![8, 16]),
            (SettingCategory::Range, vec![2, 4, 8]),
            (SettingCategory::Channels, vec![1, 3]),
        ];
        reported.into_iter().collect()
    }

    #[test]
    fn resolution_defaults_to_maximum() {
        let caps = source();
        let settings = SettingsBuilder::new(&caps).build().unwrap();

        assert_eq!(settings.get(SettingCategory::Resolution), Some(16));
        assert_eq!(settings.get(SettingCategory::Channels), Some(3));
    }

    #[test]
    fn explicit_resolution_wins_over_maximum() {
        let caps = source();
        let settings = SettingsBuilder::new(&caps).resolution(8).channels(1).build().unwrap();

        assert_eq!(settings.get(SettingCategory::Resolution), Some(8));
        assert_eq!(settings.get(SettingCategory::Channels), Some(1));
    }

    #[test]
    fn other_unset_categories_are_left_out() {
        let caps = source();
        let settings = SettingsBuilder::new(&caps).sample_rate(50).build().unwrap();

        assert_eq!(settings.get(SettingCategory::SampleRate), Some(50));
        assert!(!settings.contains(SettingCategory::Range));
        assert!(!settings.contains(SettingCategory::RangeMilliunit));
        assert_eq!(settings.len(), 3);
    }

    #[test]
    fn explicit_choices_are_not_checked_against_source() {
        let caps = source();
        let settings = SettingsBuilder::new(&caps).range(16).range_milliunit(2000).build().unwrap();

        assert_eq!(settings.get(SettingCategory::Range), Some(16));
        assert_eq!(settings.get(SettingCategory::RangeMilliunit), Some(2000));
    }

    #[test]
    fn missing_fallback_category_is_not_filled() {
        let caps: CapabilitySet = vec![(SettingCategory::SampleRate, vec![130u32])].into_iter().collect();
        let settings = SettingsBuilder::new(&caps).build().unwrap();

        assert!(settings.is_empty());
    }

    #[test]
    fn empty_fallback_category_fails() {
        let caps: CapabilitySet = vec![(SettingCategory::Channels, Vec::<u32>::new())].into_iter().collect();

        assert_eq!(
            SettingsBuilder::new(&caps).build(),
            Err(EmptyCapabilityError { category: SettingCategory::Channels })
        );
        // An explicit choice never looks at the source.
        assert!(SettingsBuilder::new(&caps).channels(2).build().is_ok());
    }

    #[test]
    fn source_is_not_modified() {
        let caps = source();
        let before = caps.clone();
        let _ = SettingsBuilder::new(&caps).sample_rate(1000).build().unwrap();

        assert_eq!(caps, before);
    }
}
