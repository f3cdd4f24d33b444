/// Flags passed into [`from_protocol_capabilities_with()`] that describe how
/// to respond to certain problems in a device's capability report.
///
/// [`from_protocol_capabilities_with()`]: crate::from_protocol_capabilities_with
#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-config", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorBehavior {
    pub unknown_category: UnknownCategoryBehavior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-config", derive(serde::Serialize, serde::Deserialize))]
pub enum UnknownCategoryBehavior {
    /// Stop translating the report and return an error.
    ///
    /// This is the default behavior.
    ReturnWithError,

    /// Skip every protocol code this library does not know about and
    /// keep the rest of the report.
    Ignore,
}

impl Default for UnknownCategoryBehavior {
    fn default() -> Self {
        UnknownCategoryBehavior::ReturnWithError
    }
}
