use std::error::Error;
use std::fmt;

use crate::SettingCategory;

/// A protocol code had no matching [`SettingCategory`].
///
/// This usually means the device protocol has evolved ahead of this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCategoryError {
    /// The protocol code that could not be translated.
    pub code: u8,
}
impl Error for UnknownCategoryError {}
impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to translate setting: No setting category has the protocol code {}", self.code)
    }
}

/// A category was present in a capability set but had no supported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCapabilityError {
    /// The category with the empty value set.
    pub category: SettingCategory,
}
impl Error for EmptyCapabilityError {}
impl fmt::Display for EmptyCapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to resolve settings: The capability set has no values for the category {}",
            self.category
        )
    }
}

/// Either error that can occur while translating or resolving settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    UnknownCategory(UnknownCategoryError),
    EmptyCapability(EmptyCapabilityError),
}
impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ResolveError::UnknownCategory(e) => Some(e),
            ResolveError::EmptyCapability(e) => Some(e),
        }
    }
}
impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownCategory(e) => write!(f, "{}", e),
            ResolveError::EmptyCapability(e) => write!(f, "{}", e),
        }
    }
}

impl From<UnknownCategoryError> for ResolveError {
    fn from(e: UnknownCategoryError) -> Self {
        ResolveError::UnknownCategory(e)
    }
}

impl From<EmptyCapabilityError> for ResolveError {
    fn from(e: EmptyCapabilityError) -> Self {
        ResolveError::EmptyCapability(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            UnknownCategoryError { code: 99 }.to_string(),
            "Failed to translate setting: No setting category has the protocol code 99"
        );
        assert_eq!(
            EmptyCapabilityError { category: SettingCategory::Range }.to_string(),
            "Failed to resolve settings: The capability set has no values for the category range"
        );
    }

    #[test]
    fn resolve_error_wraps_both_kinds() {
        let e: ResolveError = UnknownCategoryError { code: 7 }.into();
        assert!(matches!(e, ResolveError::UnknownCategory(UnknownCategoryError { code: 7 })));
        assert!(e.source().is_some());

        let e: ResolveError = EmptyCapabilityError { category: SettingCategory::Channels }.into();
        assert_eq!(e.to_string(), EmptyCapabilityError { category: SettingCategory::Channels }.to_string());
    }
}
