#[macro_use]
extern crate assert2;

use calcform::ui::{CalculatorForm, CalculatorHandles};
use calcform::{NumberFormat, Operator, Value};

use yare::parameterized;

const MAX: f64 = f64::MAX;

/// A Danish-formatted form with the handle of one operator button.
struct Fixture {
    form: CalculatorForm,
    handles: CalculatorHandles,
    op: Operator,
}

impl Fixture {
    fn new(op: Operator) -> Self {
        let form = CalculatorForm::new(NumberFormat::da_dk());
        let handles = form.handles();
        Fixture { form, handles, op }
    }

    fn text(value: f64) -> String {
        NumberFormat::da_dk().format_value(&Value::Double(value))
    }

    fn long_text(value: i64) -> String {
        NumberFormat::da_dk().format_value(&Value::Long(value))
    }

    fn first(&mut self, text: &str) {
        self.form.change(self.handles.first, text).unwrap();
    }

    fn second(&mut self, text: &str) {
        self.form.change(self.handles.second, text).unwrap();
    }

    fn click(&mut self) -> String {
        self.form.click(self.handles.buttons[self.op]);
        self.form.value(self.handles.result).to_string()
    }

    fn run(&mut self, first: &str, second: &str) -> String {
        self.first(first);
        self.second(second);
        self.click()
    }

    fn run_numbers(&mut self, a: f64, b: f64) -> String {
        self.run(&Self::text(a), &Self::text(b))
    }
}

/// Parses a displayed result and drops the sign of a zero.
fn unsigned_zero(display: &str) -> bool {
    let value = NumberFormat::da_dk().parse(display).unwrap().as_f64();
    value.abs() == 0.0
}

mod addition {
    use super::*;

    #[parameterized(
        zeros = { 0.0, 0.0 },
        zero_one = { 0.0, 1.0 },
        ones = { 1.0, 1.0 },
        zero_minus_one = { 0.0, -1.0 },
        one_minus_one = { 1.0, -1.0 },
        zero_tenth = { 0.0, 0.1 },
        one_tenth = { 1.0, 0.1 },
        minus_ones = { -1.0, -1.0 },
        two_three = { 2.0, 3.0 },
    )]
    fn test_adding_gives_correct_result(a: f64, b: f64) {
        let mut fixture = Fixture::new(Operator::Add);
        assert!(fixture.run_numbers(a, b) == Fixture::text(a + b));
    }

    #[test]
    fn test_adding_int_max_to_int_max() {
        let mut fixture = Fixture::new(Operator::Add);
        let int_max = i32::MAX.to_string();
        assert!(fixture.run(&int_max, &int_max) == "4294967294");
    }

    #[test]
    fn test_adding_max_to_max_gives_infinity() {
        let mut fixture = Fixture::new(Operator::Add);
        assert!(fixture.run_numbers(MAX, MAX) == "∞");
    }
}

mod subtraction {
    use super::*;

    #[parameterized(
        zeros = { 0.0, 0.0 },
        zero_one = { 0.0, 1.0 },
        ones = { 1.0, 1.0 },
        zero_minus_one = { 0.0, -1.0 },
        one_minus_one = { 1.0, -1.0 },
        zero_tenth = { 0.0, 0.1 },
        one_tenth = { 1.0, 0.1 },
        minus_ones = { -1.0, -1.0 },
        two_three = { 2.0, 3.0 },
    )]
    fn test_subtracting_gives_correct_result(a: f64, b: f64) {
        let mut fixture = Fixture::new(Operator::Subtract);
        assert!(fixture.run_numbers(a, b) == Fixture::text(a - b));
    }

    #[test]
    fn test_subtracting_int_max_from_int_max() {
        let mut fixture = Fixture::new(Operator::Subtract);
        let int_max = i32::MAX.to_string();
        assert!(fixture.run(&int_max, &int_max) == "0");
    }

    #[test]
    fn test_subtracting_max_from_max_gives_zero() {
        let mut fixture = Fixture::new(Operator::Subtract);
        assert!(fixture.run_numbers(MAX, MAX) == "0");
    }

    #[test]
    fn test_subtracting_max_from_negative_max_gives_negative_infinity() {
        let mut fixture = Fixture::new(Operator::Subtract);
        assert!(fixture.run_numbers(-MAX, MAX) == "-∞");
    }
}

mod and {
    use super::*;

    const LONG_MAX: i64 = i64::MAX;

    #[parameterized(
        zero_two = { 0, 2 },
        three_zero = { 3, 0 },
        minus_one_two = { -1, 2 },
        minus_one_minus_two = { -1, -2 },
        one_two = { 1, 2 },
        one_minus_two = { 1, -2 },
        minus_one_max = { -1, LONG_MAX },
        minus_one_minus_max = { -1, -LONG_MAX },
        one_max = { 1, LONG_MAX },
        one_minus_max = { 1, -LONG_MAX },
        max_minus_one = { LONG_MAX, -1 },
        minus_max_minus_one = { -LONG_MAX, -1 },
        max_one = { LONG_MAX, 1 },
        minus_max_one = { -LONG_MAX, 1 },
        max_max = { LONG_MAX, LONG_MAX },
        minus_max_max = { -LONG_MAX, LONG_MAX },
        max_minus_max = { LONG_MAX, -LONG_MAX },
        minus_max_minus_max = { -LONG_MAX, -LONG_MAX },
    )]
    fn test_anding_two_integers(a: i64, b: i64) {
        let mut fixture = Fixture::new(Operator::And);
        let result = fixture.run(&Fixture::long_text(a), &Fixture::long_text(b));
        assert!(result == Fixture::long_text(a & b));
    }

    #[parameterized(
        max = { LONG_MAX },
        two = { 2 },
        one = { 1 },
        zero = { 0 },
        minus_one = { -1 },
        minus_two = { -2 },
        minus_max = { -LONG_MAX },
    )]
    fn test_anding_negative_zero_gives_zero(a: i64) {
        let mut fixture = Fixture::new(Operator::And);
        assert!(fixture.run("-0", &Fixture::long_text(a)) == "0");
        assert!(fixture.run(&Fixture::long_text(a), "-0") == "0");
    }

    #[test]
    fn test_anding_negative_zero_with_negative_zero() {
        let mut fixture = Fixture::new(Operator::And);
        assert!(fixture.run("-0", "-0") == "0");
    }

    #[parameterized(
        first = { 1.5, 4.0 },
        second = { 2.0, 2.4 },
        both = { 0.7, 10.9 },
    )]
    fn test_anding_doubles_gives_error(a: f64, b: f64) {
        let mut fixture = Fixture::new(Operator::And);
        assert!(fixture.run_numbers(a, b) == "Cannot AND non-integers");
    }

    #[test]
    fn test_anding_integral_doubles() {
        let mut fixture = Fixture::new(Operator::And);
        assert!(fixture.run("6,0", "3E+0") == "2");
    }
}

mod power {
    use super::*;

    #[parameterized(
        a1 = { -1.0, 2.0 }, a2 = { -1.0, -2.0 }, a3 = { 1.0, 2.0 }, a4 = { 1.0, -2.0 },
        b1 = { -1.5, 2.0 }, b2 = { -1.5, -2.0 }, b3 = { 1.5, 2.0 }, b4 = { 1.5, -2.0 },
        c1 = { -1.0, 2.5 }, c2 = { -1.0, -2.5 }, c3 = { 1.0, 2.5 }, c4 = { 1.0, -2.5 },
        d1 = { -1.5, 3.5 }, d2 = { -1.5, -3.5 }, d3 = { 1.5, 3.5 }, d4 = { 1.5, -3.5 },
        e1 = { -1.0, MAX }, e2 = { -1.0, -MAX }, e3 = { 1.0, MAX }, e4 = { 1.0, -MAX },
        f1 = { -1.5, MAX }, f2 = { -1.5, -MAX }, f3 = { 1.5, MAX }, f4 = { 1.5, -MAX },
        g1 = { MAX, -1.0 }, g2 = { -MAX, -1.0 }, g3 = { MAX, 1.0 }, g4 = { -MAX, 1.0 },
        h1 = { MAX, -1.5 }, h2 = { -MAX, -1.5 }, h3 = { MAX, 1.5 }, h4 = { -MAX, 1.5 },
        i1 = { MAX, MAX }, i2 = { -MAX, MAX }, i3 = { MAX, -MAX }, i4 = { -MAX, -MAX },
    )]
    fn test_raising_non_zero_numbers(a: f64, b: f64) {
        let mut fixture = Fixture::new(Operator::Power);
        assert!(fixture.run_numbers(a, b) == Fixture::text(a.powf(b)));
    }

    #[parameterized(
        negative_zero_minus_one = { "-0", "-1" },
        zero_minus_one = { "0", "-1" },
        negative_zero_minus_fraction = { "-0", "-1,5" },
        zero_minus_fraction = { "0", "-1,5" },
    )]
    fn test_raising_signed_zero_to_negative_numbers_gives_error(a: &str, b: &str) {
        let mut fixture = Fixture::new(Operator::Power);
        assert!(fixture.run(a, b) == "Cannot raise zero to negative exponent");
    }

    #[test]
    fn test_raising_signed_zero_to_negative_max_gives_error() {
        let mut fixture = Fixture::new(Operator::Power);
        assert!(fixture.run("0", &Fixture::text(-MAX)) == "Cannot raise zero to negative exponent");

        fixture.first("-0");
        assert!(fixture.click() == "Cannot raise zero to negative exponent");
    }

    #[parameterized(
        zero_zero = { "0", "0" },
        zero_negative_zero = { "0", "-0" },
        negative_zero_zero = { "-0", "0" },
        negative_zeros = { "-0", "-0" },
    )]
    fn test_raising_signed_zero_to_signed_zero_gives_one(a: &str, b: &str) {
        let mut fixture = Fixture::new(Operator::Power);
        assert!(fixture.run(a, b) == "1");
    }

    #[parameterized(
        one = { 1.0 },
        minus_one = { -1.0 },
        fraction = { 1.5 },
        negative_fraction = { -1.5 },
        max = { MAX },
        minus_max = { -MAX },
    )]
    fn test_raising_numbers_to_signed_zero_gives_one(a: f64) {
        let mut fixture = Fixture::new(Operator::Power);
        assert!(fixture.run(&Fixture::text(a), "0") == "1");

        fixture.second("-0");
        assert!(fixture.click() == "1");
    }

    #[parameterized(
        tenth = { 0.1 },
        one = { 1.0 },
        fraction = { 1.5 },
        max = { MAX },
    )]
    fn test_raising_signed_zero_to_positive_numbers_gives_zero(b: f64) {
        let mut fixture = Fixture::new(Operator::Power);
        assert!(fixture.run("0", &Fixture::text(b)) == "0");

        fixture.first("-0");
        assert!(unsigned_zero(&fixture.click()));
    }
}

mod division {
    use super::*;

    #[parameterized(
        zero = { "0" },
        negative_zero = { "-0" },
        one = { "1" },
        fraction = { "-1,5" },
        max = { "1,7976931348623157E+308" },
    )]
    fn test_dividing_by_signed_zero_gives_error(a: &str) {
        let mut fixture = Fixture::new(Operator::Divide);
        assert!(fixture.run(a, "0") == "Cannot Divide by Zero");

        fixture.second("-0");
        assert!(fixture.click() == "Cannot Divide by Zero");
    }

    #[parameterized(
        max_by_max = { MAX, MAX, "1" },
        max_by_minus_max = { MAX, -MAX, "-1" },
        quarter = { 1.0, 4.0, "0,25" },
        third = { 1.0, 3.0, "0,3333333333333333" },
        negative = { -3.0, 2.0, "-1,5" },
        tiny_quotient = { 1.0, 100000.0, "1E-05" },
    )]
    fn test_dividing_gives_correct_result(a: f64, b: f64, expected: &str) {
        let mut fixture = Fixture::new(Operator::Divide);
        assert!(fixture.run_numbers(a, b) == expected);
    }

    #[test]
    fn test_tiny_quotient_is_scientific() {
        let mut fixture = Fixture::new(Operator::Divide);
        assert!(fixture.run("1", "100000") == "1E-05");
        assert!(fixture.run("1", "10000") == "0,0001");
        assert!(fixture.run("-1", "100000") == "-1E-05");
    }
}

mod modulo {
    use super::*;

    #[parameterized(
        a1 = { -1.0, 2.0 }, a2 = { -1.0, -2.0 }, a3 = { 1.0, 2.0 }, a4 = { 1.0, -2.0 },
        b1 = { -1.5, 2.0 }, b2 = { -1.5, -2.0 }, b3 = { 1.5, 2.0 }, b4 = { 1.5, -2.0 },
        c1 = { -1.0, 2.5 }, c2 = { -1.0, -2.5 }, c3 = { 1.0, 2.5 }, c4 = { 1.0, -2.5 },
        d1 = { -1.5, 3.5 }, d2 = { -1.5, -3.5 }, d3 = { 1.5, 3.5 }, d4 = { 1.5, -3.5 },
        e1 = { -1.0, MAX }, e2 = { -1.0, -MAX }, e3 = { 1.0, MAX }, e4 = { 1.0, -MAX },
        f1 = { -1.5, MAX }, f2 = { -1.5, -MAX }, f3 = { 1.5, MAX }, f4 = { 1.5, -MAX },
        g1 = { MAX, -1.0 }, g2 = { -MAX, -1.0 }, g3 = { MAX, 1.0 }, g4 = { -MAX, 1.0 },
        h1 = { MAX, -1.5 }, h2 = { -MAX, -1.5 }, h3 = { MAX, 1.5 }, h4 = { -MAX, 1.5 },
        i1 = { MAX, MAX }, i2 = { -MAX, MAX }, i3 = { MAX, -MAX }, i4 = { -MAX, -MAX },
    )]
    fn test_modulo_of_non_zero_numbers(a: f64, b: f64) {
        let mut fixture = Fixture::new(Operator::Modulo);
        assert!(fixture.run_numbers(a, b) == Fixture::text(a % b));
    }

    #[parameterized(
        negative_fraction = { -1.5 },
        minus_one = { -1.0 },
        one = { 1.0 },
        fraction = { 1.5 },
        max = { MAX },
        minus_max = { -MAX },
    )]
    fn test_signed_zero_modulo_numbers_gives_zero(b: f64) {
        let mut fixture = Fixture::new(Operator::Modulo);
        assert!(unsigned_zero(&fixture.run("0", &Fixture::text(b))));

        fixture.first("-0");
        assert!(unsigned_zero(&fixture.click()));
    }

    #[parameterized(
        minus_one = { -1.0 },
        one = { 1.0 },
        negative_fraction = { -1.5 },
        fraction = { 1.5 },
        max = { MAX },
        minus_max = { -MAX },
    )]
    fn test_numbers_modulo_signed_zero_gives_error(a: f64) {
        let mut fixture = Fixture::new(Operator::Modulo);
        assert!(fixture.run(&Fixture::text(a), "0") == "Cannot Divide by Zero");

        fixture.second("-0");
        assert!(fixture.click() == "Cannot Divide by Zero");
    }

    #[parameterized(
        zero_zero = { "0", "0" },
        zero_negative_zero = { "0", "-0" },
        negative_zero_zero = { "-0", "0" },
        negative_zeros = { "-0", "-0" },
    )]
    fn test_signed_zero_modulo_signed_zero_gives_error(a: &str, b: &str) {
        let mut fixture = Fixture::new(Operator::Modulo);
        assert!(fixture.run(a, b) == "Cannot Divide by Zero");
    }
}

mod decimal_separator {
    use super::*;

    #[test]
    fn test_period_is_rejected_by_danish_form() {
        let mut fixture = Fixture::new(Operator::Add);
        fixture.first("1,5");
        let err = fixture.form.change(fixture.handles.second, "2.5").unwrap_err();
        assert!(err.to_string() == "Unexpected decimal separator '.', expected ','");
        assert!(fixture.click() == "1,5");
    }

    #[test]
    fn test_results_follow_the_form_format() {
        let mut form = CalculatorForm::new(NumberFormat::en_us());
        let handles = form.handles();
        form.change(handles.first, "1.25").unwrap();
        form.change(handles.second, "2").unwrap();
        form.click(handles.buttons[Operator::Power]);
        assert!(form.value(handles.result) == "1.5625");
    }
}
