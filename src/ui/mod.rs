// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

//! Headless calculator form
//!
//! This module provides a small widget system with bidirectional event handling:
//! input events are dispatched down to the addressed widget and widget events bubble
//! back up to the form. Hosts interact through typed handles instead of looking
//! widgets up by their text.

pub mod button;
pub mod calculator;
pub mod event;
pub mod text_input;
pub mod widget;

// Re-export commonly used types
pub use button::Button;
pub use calculator::{
    ButtonHandle, CalculatorForm, CalculatorHandles, CalculatorId, InputHandle, OutputHandle,
};
pub use event::{Event, WidgetIdType};
pub use text_input::TextInput;
pub use widget::Widget;
