//! Action enum for decoupling input handling from state changes.

/// User intents dispatched from event handlers and applied by the App.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    None,
    /// Quit the application
    Quit,

    // === Selection ===
    /// Select the next cat (wraps around)
    NextCat,
    /// Select the previous cat (wraps around)
    PrevCat,

    // === Effects ===
    /// Play the bounce animation
    TriggerBounce,
    /// Send the "Meow!" notification
    TriggerNotify,

    // === Rename ===
    /// Enter rename mode for the current cat
    EnterRename,
    /// Commit the name field contents
    CommitRename,
    /// Leave rename mode without committing
    CancelRename,

    // === Help ===
    /// Open the help popup
    OpenHelp,
    /// Close the help popup
    CloseHelp,

    // === Field editing ===
    /// Add a character at the cursor
    InputChar(char),
    /// Delete the character before the cursor
    InputBackspace,
    /// Delete the character at the cursor
    InputDelete,
    /// Move cursor left
    InputLeft,
    /// Move cursor right
    InputRight,
    /// Move cursor to start of the field
    InputHome,
    /// Move cursor to end of the field
    InputEnd,
}
