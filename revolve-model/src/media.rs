/// Outcome reported for one embedded media element of an item.
///
/// Both outcomes mean the element is done attempting to load, and both
/// count towards an item's readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaEvent {
    Loaded,
    Failed,
}

impl MediaEvent {
    pub fn is_failure(self) -> bool {
        matches!(self, MediaEvent::Failed)
    }
}
