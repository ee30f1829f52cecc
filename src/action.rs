/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,

    // Modals
    ShowHelp,
    CloseModal,

    // App control
    Refresh, // Manual refresh, also retries after an error
    Quit,
    Tick, // Timer tick for the poll cycle

    // No action
    None,
}
