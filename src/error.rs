use thiserror::Error;

/// Errors raised by the menu navigation core.
///
/// Both variants mark contract violations between components that are
/// always constructed together from the same static list, so neither is
/// ever shown to the player: `EmptyRegistry` aborts construction,
/// `IndexOutOfRange` drops the offending input event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// A navigation registry was built with no destinations. Wrap-around
    /// arithmetic is undefined on an empty list, so construction fails
    /// instead of producing an unusable controller.
    #[error("navigation registry must contain at least one destination")]
    EmptyRegistry,

    /// A direct-choice event referenced a destination index that does not
    /// exist in the registry the controller was built against.
    #[error("destination index {index} out of range for {len} menu entries")]
    IndexOutOfRange { index: usize, len: usize },
}
