// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use crate::ui::event::{Event, WidgetIdType};

/// Core trait that all UI widgets must implement
/// Generic over the ID type for type-safe widget identification
pub trait Widget<Id: WidgetIdType> {
    /// Handle an incoming event
    /// Returns None if the event was consumed, Some(event) to bubble up
    /// Default implementation just returns the event unchanged, i.e. no event handling.
    fn handle_event(&mut self, event: Event<Id>) -> Option<Event<Id>> {
        Some(event)
    }

    /// Get the widget's unique identifier
    fn get_id(&self) -> &Id;
}
