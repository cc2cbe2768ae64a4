// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use std::fmt::Debug;
use std::hash::Hash;

/// Trait that all widget ID types must implement
pub trait WidgetIdType: Debug + Clone + PartialEq + Hash + 'static {
    /// Convert the ID to a string representation (for debugging/logging)
    fn as_str(&self) -> &'static str;
}

/// Generic event system - parameterized by widget ID type
#[derive(Debug, Clone, PartialEq)]
pub enum Event<Id: WidgetIdType> {
    // Input events (dispatched top-down)
    Click { target: Id },
    Input { target: Id, text: String },

    // Widget events (bubble up)
    ButtonClick { button_id: Id },
    TextChanged { widget_id: Id, text: String },
}

impl<Id: WidgetIdType> Event<Id> {
    pub fn is_input_event(&self) -> bool {
        matches!(self, Event::Click { .. } | Event::Input { .. })
    }

    /// The widget this event is addressed to or originates from.
    pub fn target(&self) -> &Id {
        match self {
            Event::Click { target } | Event::Input { target, .. } => target,
            Event::ButtonClick { button_id } => button_id,
            Event::TextChanged { widget_id, .. } => widget_id,
        }
    }
}
