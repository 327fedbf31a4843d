//! Toast stack store

use dioxus::prelude::*;
use roster_common::Toast;

/// Toasts currently on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}
