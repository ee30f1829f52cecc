pub mod error_view;
pub mod header;
pub mod help_modal;
pub mod status_bar;
pub mod totals_cards;
pub mod usage_dashboard;

pub use error_view::ErrorView;
pub use header::Header;
pub use help_modal::HelpModal;
pub use status_bar::StatusBar;
pub use totals_cards::TotalsCards;
pub use usage_dashboard::UsageDashboard;
