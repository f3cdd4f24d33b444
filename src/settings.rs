use std::collections::{btree_map, BTreeMap, BTreeSet};

use crate::error::EmptyCapabilityError;
use crate::SettingCategory;

/// All values a device supports, per setting category.
///
/// A category that is absent means the device does not support (or did not
/// report) that category. A present category is expected to hold at least one
/// value, see [`CapabilitySet::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-config", serde(transparent))]
pub struct CapabilitySet {
    settings: BTreeMap<SettingCategory, BTreeSet<u32>>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self { settings: BTreeMap::new() }
    }

    /// Add supported values for a category, merging with any values that
    /// are already present.
    pub fn insert<I: IntoIterator<Item = u32>>(&mut self, category: SettingCategory, values: I) {
        self.settings.entry(category).or_default().extend(values);
    }

    /// The supported values of a category, in ascending order.
    pub fn get(&self, category: SettingCategory) -> Option<&BTreeSet<u32>> {
        self.settings.get(&category)
    }

    pub fn contains(&self, category: SettingCategory) -> bool {
        self.settings.contains_key(&category)
    }

    /// The reported categories, ordered by protocol code.
    pub fn categories(&self) -> impl Iterator<Item = SettingCategory> + '_ {
        self.settings.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, SettingCategory, BTreeSet<u32>> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// The largest supported value of a category.
    ///
    /// This will be `Ok(None)` if the category is not present.
    pub fn max_value(&self, category: SettingCategory) -> Result<Option<u32>, EmptyCapabilityError> {
        match self.settings.get(&category) {
            Some(values) => values.last().copied().map(Some).ok_or(EmptyCapabilityError { category }),
            None => Ok(None),
        }
    }

    /// Check that every present category has at least one supported value.
    pub fn validate(&self) -> Result<(), EmptyCapabilityError> {
        match self.settings.iter().find(|(_, values)| values.is_empty()) {
            Some((category, _)) => Err(EmptyCapabilityError { category: *category }),
            None => Ok(()),
        }
    }

    /// Select the largest supported value of every present category.
    pub fn max_settings(&self) -> Result<ResolvedSettings, EmptyCapabilityError> {
        let mut resolved = ResolvedSettings::new();
        for (category, values) in self.settings.iter() {
            let max = values.last().copied().ok_or(EmptyCapabilityError { category: *category })?;
            resolved.insert(*category, max);
        }
        Ok(resolved)
    }
}

impl<I: IntoIterator<Item = u32>> FromIterator<(SettingCategory, I)> for CapabilitySet {
    fn from_iter<T: IntoIterator<Item = (SettingCategory, I)>>(iter: T) -> Self {
        let mut caps = CapabilitySet::new();
        for (category, values) in iter {
            caps.insert(category, values);
        }
        caps
    }
}

impl From<&ResolvedSettings> for CapabilitySet {
    /// A capability set where every category supports only its chosen value.
    fn from(resolved: &ResolvedSettings) -> Self {
        resolved.iter().map(|(category, value)| (*category, std::iter::once(*value))).collect()
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = (&'a SettingCategory, &'a BTreeSet<u32>);
    type IntoIter = btree_map::Iter<'a, SettingCategory, BTreeSet<u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.settings.iter()
    }
}

/// The single chosen value per setting category, ready to be applied to a
/// device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-config", serde(transparent))]
pub struct ResolvedSettings {
    settings: BTreeMap<SettingCategory, u32>,
}

impl ResolvedSettings {
    pub fn new() -> Self {
        Self { settings: BTreeMap::new() }
    }

    /// Choose a value for a category, replacing any previous choice.
    pub fn insert(&mut self, category: SettingCategory, value: u32) -> Option<u32> {
        self.settings.insert(category, value)
    }

    pub fn get(&self, category: SettingCategory) -> Option<u32> {
        self.settings.get(&category).copied()
    }

    pub fn contains(&self, category: SettingCategory) -> bool {
        self.settings.contains_key(&category)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, SettingCategory, u32> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

impl FromIterator<(SettingCategory, u32)> for ResolvedSettings {
    fn from_iter<T: IntoIterator<Item = (SettingCategory, u32)>>(iter: T) -> Self {
        Self { settings: iter.into_iter().collect() }
    }
}

impl From<BTreeMap<SettingCategory, u32>> for ResolvedSettings {
    fn from(settings: BTreeMap<SettingCategory, u32>) -> Self {
        Self { settings }
    }
}

impl<'a> IntoIterator for &'a ResolvedSettings {
    type Item = (&'a SettingCategory, &'a u32);
    type IntoIter = btree_map::Iter<'a, SettingCategory, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.settings.iter()
    }
}

/// Select the largest supported value of every category present in `caps`.
///
/// This will return an error if a category is present but has no values.
pub fn max_settings(caps: &CapabilitySet) -> Result<ResolvedSettings, EmptyCapabilityError> {
    caps.max_settings()
}
