//! Shared UI components

pub mod button;
pub mod catalog;
pub mod character_card;
pub mod helpers;
pub mod icons;
pub mod section_nav;
pub mod toast;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use catalog::CatalogView;
pub use character_card::CharacterCard;
pub use helpers::{EmptyState, ErrorDisplay, LoadingSpinner};
pub use icons::{AlertTriangleIcon, CheckCircleIcon, HeartIcon, InfoIcon, UsersIcon, XIcon};
pub use section_nav::SectionNavView;
pub use toast::{ToastStackView, ToastView};
