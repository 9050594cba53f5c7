//! Table state types.

/// Round state of a table.
///
/// A round moves `Uninitialized -> Dealt -> PlayerActing -> Settled`.
/// [`Table::reset`](crate::Table::reset) takes a settled round back to
/// `Dealt` with the same opening hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableState {
    /// No cards have been dealt yet.
    #[default]
    Uninitialized,
    /// Opening hands are dealt and no action has been taken.
    Dealt,
    /// At least one player action has been played.
    PlayerActing,
    /// The dealer has drawn and every hand is settled.
    Settled,
}
