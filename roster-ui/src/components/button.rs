//! Reusable button component

use dioxus::prelude::*;

/// Unstyled button that handles disabled state and accessibility attributes.
/// Used internally by Button and for controls with their own look.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Teal background - selected navigation, confirmations
    Primary,
    /// No background - text only with hover
    Ghost,
}

/// Styled button
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "bg-teal-500 hover:bg-teal-400 text-gray-900 font-semibold",
        ButtonVariant::Ghost => "text-gray-300 hover:text-white hover:bg-gray-700/50",
    };

    let computed_class = match &class {
        Some(extra) => format!(
            "inline-flex items-center gap-2 rounded-lg transition-colors disabled:opacity-50 px-3 py-1.5 text-sm {variant_class} {extra}"
        ),
        None => format!(
            "inline-flex items-center gap-2 rounded-lg transition-colors disabled:opacity-50 px-3 py-1.5 text-sm {variant_class}"
        ),
    };

    rsx! {
        ChromelessButton {
            disabled,
            aria_pressed,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
