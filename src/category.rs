use std::fmt;

use crate::error::UnknownCategoryError;

/// One dimension of a sensor measurement configuration.
///
/// Every category has a fixed protocol code (see [`SettingCategory::code`]).
/// These codes are shared with the device protocol and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-config", serde(rename_all = "snake_case"))]
pub enum SettingCategory {
    /// Sample rate in Hz
    SampleRate,

    /// Resolution in bits
    Resolution,

    /// Measurement range
    Range,

    /// Measurement range in milliunits
    ///
    /// A device reports every supported range from min to max.
    RangeMilliunit,

    /// Amount of channels
    Channels,
}

impl SettingCategory {
    /// Every category, ordered by protocol code.
    pub const ALL: [SettingCategory; 5] = [
        SettingCategory::SampleRate,
        SettingCategory::Resolution,
        SettingCategory::Range,
        SettingCategory::RangeMilliunit,
        SettingCategory::Channels,
    ];

    /// The protocol code of this category.
    pub fn code(&self) -> u8 {
        match self {
            SettingCategory::SampleRate => 0,
            SettingCategory::Resolution => 1,
            SettingCategory::Range => 2,
            SettingCategory::RangeMilliunit => 3,
            SettingCategory::Channels => 4,
        }
    }

    /// The category for the given protocol code.
    ///
    /// This will be `None` if the code is not known to this library (the
    /// device protocol is newer than this crate).
    pub fn from_code(code: u8) -> Option<SettingCategory> {
        match code {
            0 => Some(SettingCategory::SampleRate),
            1 => Some(SettingCategory::Resolution),
            2 => Some(SettingCategory::Range),
            3 => Some(SettingCategory::RangeMilliunit),
            4 => Some(SettingCategory::Channels),
            _ => None,
        }
    }

    /// Label used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingCategory::SampleRate => "sample_rate",
            SettingCategory::Resolution => "resolution",
            SettingCategory::Range => "range",
            SettingCategory::RangeMilliunit => "range_milliunit",
            SettingCategory::Channels => "channels",
        }
    }

    /// The unit the values of this category are expressed in.
    pub fn unit(&self) -> &'static str {
        match self {
            SettingCategory::SampleRate => "Hz",
            SettingCategory::Resolution => "bits",
            SettingCategory::Range => "unit",
            SettingCategory::RangeMilliunit => "milliunit",
            SettingCategory::Channels => "channels",
        }
    }
}

impl fmt::Display for SettingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for SettingCategory {
    type Error = UnknownCategoryError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        SettingCategory::from_code(code).ok_or(UnknownCategoryError { code })
    }
}

impl From<SettingCategory> for u8 {
    fn from(category: SettingCategory) -> Self {
        category.code()
    }
}
