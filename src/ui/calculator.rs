// SPDX-FileCopyrightText: 2025 Daniel Vrátil <me@dvratil.cz>
//
// SPDX-License-Identifier: MIT

use enum_map::{EnumMap, enum_map};
use tracing::{debug, trace, warn};

use crate::eval::{Operator, evaluate_values};
use crate::format::NumberFormat;
use crate::operand::ParseError;
use crate::ui::button::Button;
use crate::ui::event::{Event, WidgetIdType};
use crate::ui::text_input::TextInput;
use crate::ui::widget::Widget;
use crate::value::Value;

pub const FIRST_NUMBER_PLACEHOLDER: &str = "Enter First Number";
pub const SECOND_NUMBER_PLACEHOLDER: &str = "Enter Second Number";

/// Calculator widget IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorId {
    FirstNumber,
    SecondNumber,
    Operator(Operator),
    Result,
}

impl WidgetIdType for CalculatorId {
    fn as_str(&self) -> &'static str {
        match self {
            CalculatorId::FirstNumber => "first_number",
            CalculatorId::SecondNumber => "second_number",
            CalculatorId::Operator(Operator::Add) => "add",
            CalculatorId::Operator(Operator::Subtract) => "subtract",
            CalculatorId::Operator(Operator::And) => "and",
            CalculatorId::Operator(Operator::Divide) => "divide",
            CalculatorId::Operator(Operator::Power) => "power",
            CalculatorId::Operator(Operator::Modulo) => "modulo",
            CalculatorId::Result => "result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperandSlot {
    First,
    Second,
}

impl OperandSlot {
    fn id(self) -> CalculatorId {
        match self {
            OperandSlot::First => CalculatorId::FirstNumber,
            OperandSlot::Second => CalculatorId::SecondNumber,
        }
    }
}

/// Handle to one of the two operand inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandle {
    slot: OperandSlot,
}

/// Handle to an operator button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonHandle {
    operator: Operator,
}

impl ButtonHandle {
    pub fn operator(&self) -> Operator {
        self.operator
    }
}

/// Handle to the read-only result field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputHandle {
    _private: (),
}

/// Every interactive element of a `CalculatorForm`, resolved once.
#[derive(Debug, Clone)]
pub struct CalculatorHandles {
    pub first: InputHandle,
    pub second: InputHandle,
    pub buttons: EnumMap<Operator, ButtonHandle>,
    pub result: OutputHandle,
}

#[derive(Debug)]
struct OperandField {
    input: TextInput<CalculatorId>,
    value: Value,
    error: Option<ParseError>,
}

impl OperandField {
    fn new(id: CalculatorId, placeholder: &str) -> Self {
        Self {
            input: TextInput::new(id, placeholder),
            value: Value::Long(0),
            error: None,
        }
    }
}

/// Two operand inputs, one button per operator and a read-only result field.
///
/// Operand text is bound to a number on every change. Text that does not parse keeps
/// the previously bound number and the error is remembered on the input.
#[derive(Debug)]
pub struct CalculatorForm {
    format: NumberFormat,
    first: OperandField,
    second: OperandField,
    buttons: EnumMap<Operator, Button<CalculatorId>>,
    result: TextInput<CalculatorId>,
}

impl CalculatorForm {
    pub fn new(format: NumberFormat) -> Self {
        Self {
            format,
            first: OperandField::new(CalculatorId::FirstNumber, FIRST_NUMBER_PLACEHOLDER),
            second: OperandField::new(CalculatorId::SecondNumber, SECOND_NUMBER_PLACEHOLDER),
            buttons: EnumMap::from_fn(|op: Operator| {
                Button::new(CalculatorId::Operator(op), op.label())
            }),
            result: TextInput::new(CalculatorId::Result, "").with_read_only(true),
        }
    }

    pub fn handles(&self) -> CalculatorHandles {
        CalculatorHandles {
            first: InputHandle {
                slot: OperandSlot::First,
            },
            second: InputHandle {
                slot: OperandSlot::Second,
            },
            buttons: enum_map! { op => ButtonHandle { operator: op } },
            result: OutputHandle { _private: () },
        }
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Types `text` into an operand input.
    pub fn change(&mut self, input: InputHandle, text: impl Into<String>) -> Result<(), ParseError> {
        self.dispatch(Event::Input {
            target: input.slot.id(),
            text: text.into(),
        })
    }

    /// Clicks an operator button, writing the outcome into the result field.
    pub fn click(&mut self, button: ButtonHandle) {
        let target = CalculatorId::Operator(button.operator);
        if let Some(Event::ButtonClick { .. }) = self.route(Event::Click { target }) {
            self.calculate(button.operator);
        }
    }

    pub fn text(&self, input: InputHandle) -> &str {
        self.operand(input.slot).input.text()
    }

    pub fn placeholder(&self, input: InputHandle) -> &str {
        self.operand(input.slot).input.placeholder()
    }

    /// The last parse error of an input, cleared by the next successful change.
    pub fn error(&self, input: InputHandle) -> Option<&ParseError> {
        self.operand(input.slot).error.as_ref()
    }

    /// The number currently bound to an input.
    pub fn bound_value(&self, input: InputHandle) -> Value {
        self.operand(input.slot).value
    }

    pub fn label(&self, button: ButtonHandle) -> &str {
        self.buttons[button.operator].label()
    }

    pub fn set_enabled(&mut self, button: ButtonHandle, enabled: bool) {
        self.buttons[button.operator].set_enabled(enabled);
    }

    pub fn value(&self, _output: OutputHandle) -> &str {
        self.result.text()
    }

    /// Routes an input event to its widget and handles whatever bubbles up.
    pub fn dispatch(&mut self, event: Event<CalculatorId>) -> Result<(), ParseError> {
        match self.route(event) {
            Some(Event::TextChanged { widget_id, text }) => self.bind(widget_id, &text),
            Some(Event::ButtonClick {
                button_id: CalculatorId::Operator(op),
            }) => {
                self.calculate(op);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Hands an input event to its target widget and returns what bubbles up.
    fn route(&mut self, event: Event<CalculatorId>) -> Option<Event<CalculatorId>> {
        if !event.is_input_event() {
            return None;
        }

        let widget: &mut dyn Widget<CalculatorId> = match *event.target() {
            CalculatorId::FirstNumber => &mut self.first.input,
            CalculatorId::SecondNumber => &mut self.second.input,
            CalculatorId::Operator(op) => &mut self.buttons[op],
            CalculatorId::Result => &mut self.result,
        };
        trace!(widget = widget.get_id().as_str(), "Dispatching event");
        widget.handle_event(event)
    }

    fn operand(&self, slot: OperandSlot) -> &OperandField {
        match slot {
            OperandSlot::First => &self.first,
            OperandSlot::Second => &self.second,
        }
    }

    fn bind(&mut self, id: CalculatorId, text: &str) -> Result<(), ParseError> {
        let field = match id {
            CalculatorId::FirstNumber => &mut self.first,
            CalculatorId::SecondNumber => &mut self.second,
            _ => return Ok(()),
        };

        match self.format.parse(text) {
            Ok(value) => {
                field.value = value;
                field.error = None;
                Ok(())
            }
            Err(err) => {
                warn!(input = id.as_str(), text, %err, "Keeping previous operand");
                field.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn calculate(&mut self, op: Operator) {
        let outcome = evaluate_values(&self.first.value, &self.second.value, op);
        let shown = self.format.format_outcome(&outcome);
        debug!(
            first = ?self.first.value,
            second = ?self.second.value,
            %op,
            result = %shown,
            "Evaluated"
        );
        self.result.set_text(shown);
    }
}
