//! Status banners shown in place of the card grid

mod empty_state;
mod error_display;
mod loading_spinner;

pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
