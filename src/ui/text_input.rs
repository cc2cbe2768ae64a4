// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use crate::ui::event::{Event, WidgetIdType};
use crate::ui::widget::Widget;

/// A single-line text field. Read-only fields can only be changed by their owner.
#[derive(Debug, Clone)]
pub struct TextInput<Id: WidgetIdType> {
    id: Id,
    placeholder: String,
    text: String,
    read_only: bool,
}

impl<Id: WidgetIdType> TextInput<Id> {
    pub fn new(id: Id, placeholder: impl Into<String>) -> Self {
        Self {
            id,
            placeholder: placeholder.into(),
            text: String::new(),
            read_only: false,
        }
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl<Id: WidgetIdType> Widget<Id> for TextInput<Id> {
    fn handle_event(&mut self, event: Event<Id>) -> Option<Event<Id>> {
        match event {
            Event::Input { target, .. } if target == self.id && self.read_only => None,
            Event::Input { target, text } if target == self.id => {
                self.text.clone_from(&text);
                Some(Event::TextChanged {
                    widget_id: target,
                    text,
                })
            }
            _ => Some(event),
        }
    }

    fn get_id(&self) -> &Id {
        &self.id
    }
}
