// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use crate::ui::event::{Event, WidgetIdType};
use crate::ui::widget::Widget;

/// A clickable button widget with text label
#[derive(Debug, Clone)]
pub struct Button<Id: WidgetIdType> {
    id: Id,
    label: String,
    enabled: bool,
}

impl<Id: WidgetIdType> Button<Id> {
    /// Create a new button with the given id and label
    pub fn new(id: Id, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Enable or disable the button
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if the button is currently enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl<Id: WidgetIdType> Widget<Id> for Button<Id> {
    fn handle_event(&mut self, event: Event<Id>) -> Option<Event<Id>> {
        match event {
            Event::Click { target } if target == self.id => {
                if self.enabled {
                    Some(Event::ButtonClick { button_id: target })
                } else {
                    None
                }
            }
            // Pass through all other events
            _ => Some(event),
        }
    }

    fn get_id(&self) -> &Id {
        &self.id
    }
}
