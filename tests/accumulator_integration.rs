//! Integration tests for the calculator accumulator through the public API.
//!
//! These drive the accumulator the way the event layer does (digits, operators,
//! compute, backspace, clear) and check operands, history records, and persistence
//! through an in-memory store.

use tallybox::logic::{Accumulator, CalcError, HISTORY_CAP, MemoryStore, Mode, Operator};

/// Build an accumulator backed by a shared in-memory store.
fn calc_with_store() -> (Accumulator, MemoryStore) {
    let store = MemoryStore::new();
    (Accumulator::new(Box::new(store.clone())), store)
}

/// Type each character of `s` as a digit key.
fn type_str(calc: &mut Accumulator, s: &str) {
    for ch in s.chars() {
        calc.append_digit(ch);
    }
}

/// What: Run `a op b =` and return the compute outcome.
fn binary(calc: &mut Accumulator, a: &str, op: Operator, b: &str) -> Result<(), CalcError> {
    type_str(calc, a);
    calc.choose_operator(op)?;
    type_str(calc, b);
    calc.compute()
}

#[test]
/// What: Each operator produces the expected result and record.
///
/// Inputs:
/// - One binary expression per operator on a fresh accumulator.
///
/// Output:
/// - Current operand holds the result; the single record uses the operator symbol.
fn each_operator_computes_and_records() {
    let cases = [
        ("12", Operator::Add, "30", "42", "12 + 30 = 42"),
        ("10", Operator::Subtract, "4", "6", "10 − 4 = 6"),
        ("6", Operator::Multiply, "7", "42", "6 × 7 = 42"),
        ("9", Operator::Divide, "2", "4.5", "9 ÷ 2 = 4.5"),
        ("50", Operator::Percentage, "20", "10", "50 % of 20 = 10"),
    ];
    for (a, op, b, result, record) in cases {
        let (mut calc, _) = calc_with_store();
        binary(&mut calc, a, op, b).expect("compute");
        assert_eq!(calc.current_operand(), result, "{record}");
        assert_eq!(calc.history(), [record]);
        assert_eq!(calc.mode(), Mode::Result);
        assert_eq!(calc.previous_operand(), "");
        assert_eq!(calc.pending_operator(), None);
    }
}

#[test]
/// What: Chained entry records the intermediate and the final step.
///
/// Inputs:
/// - `3 + 4 − 5 =`
///
/// Output:
/// - Current `"2"`; history `["7 − 5 = 2", "3 + 4 = 7"]`, most recent first.
fn chained_entry_records_each_step() {
    let (mut calc, store) = calc_with_store();
    type_str(&mut calc, "3");
    calc.choose_operator(Operator::Add).expect("add");
    type_str(&mut calc, "4");
    calc.choose_operator(Operator::Subtract).expect("chain");
    assert_eq!(calc.pending_line(), "7 −");
    type_str(&mut calc, "5");
    calc.compute().expect("compute");

    assert_eq!(calc.current_operand(), "2");
    assert_eq!(calc.history(), ["7 − 5 = 2", "3 + 4 = 7"]);
    assert_eq!(
        store.saved(),
        Some(vec!["7 − 5 = 2".to_string(), "3 + 4 = 7".to_string()])
    );
}

#[test]
/// What: Dividing by zero resets operands and leaves history untouched.
fn divide_by_zero_resets_without_recording() {
    let (mut calc, store) = calc_with_store();
    binary(&mut calc, "1", Operator::Add, "1").expect("seed");
    let err = binary(&mut calc, "8", Operator::Divide, "0").expect_err("zero divisor");
    assert_eq!(err, CalcError::DivideByZero);
    assert_eq!(err.to_string(), "Cannot divide by zero!");
    assert_eq!(calc.current_operand(), "0");
    assert_eq!(calc.previous_operand(), "");
    assert_eq!(calc.pending_operator(), None);
    assert_eq!(calc.history(), ["1 + 1 = 2"]);
    assert_eq!(store.saved(), Some(vec!["1 + 1 = 2".to_string()]));
}

#[test]
/// What: History keeps only the newest entries.
///
/// Inputs:
/// - Twelve additions `i + 1 =`.
///
/// Output:
/// - Exactly [`HISTORY_CAP`] records, newest first, oldest two dropped.
fn history_is_capped_newest_first() {
    let (mut calc, store) = calc_with_store();
    for i in 0..12 {
        calc.clear();
        binary(&mut calc, &i.to_string(), Operator::Add, "1").expect("compute");
    }
    assert_eq!(calc.history().len(), HISTORY_CAP);
    assert_eq!(calc.history()[0], "11 + 1 = 12");
    assert_eq!(calc.history()[HISTORY_CAP - 1], "2 + 1 = 3");
    assert_eq!(store.saved().map(|v| v.len()), Some(HISTORY_CAP));
}

#[test]
/// What: A new accumulator picks up the history saved by a previous one.
fn history_survives_new_accumulator() {
    let (mut calc, store) = calc_with_store();
    binary(&mut calc, "2", Operator::Multiply, "21").expect("compute");
    drop(calc);

    let reopened = Accumulator::new(Box::new(store.clone()));
    assert_eq!(reopened.history(), ["2 × 21 = 42"]);
    assert_eq!(reopened.current_operand(), "0");
    assert_eq!(reopened.mode(), Mode::Entry);
}

#[test]
/// What: Operator keys with nothing typed are ignored; decimals and backspace edit text.
fn editing_edge_cases() {
    let (mut calc, _) = calc_with_store();
    type_str(&mut calc, "0.5.");
    assert_eq!(calc.current_operand(), "0.5");
    calc.backspace();
    calc.backspace();
    calc.backspace();
    assert_eq!(calc.current_operand(), "0");

    calc.choose_operator(Operator::Add).expect("add");
    // current is empty now; a second operator is a no-op
    calc.choose_operator(Operator::Multiply).expect("noop");
    assert_eq!(calc.pending_operator(), Some(Operator::Add));
    assert_eq!(calc.pending_line(), "0 +");

    // `=` without a second operand does nothing
    calc.compute().expect("noop compute");
    assert!(calc.history().is_empty());
}

#[test]
/// What: A lone `.` operand is not a number, so computing with it does nothing.
///
/// Inputs:
/// - `5 + . =`, then `×` on the same state.
///
/// Output:
/// - `=` leaves the expression as typed; `×` skips the implicit compute and installs
///   multiply with `.` as the left operand. No history is written or saved.
fn lone_decimal_point_operand_is_ignored() {
    let (mut calc, store) = calc_with_store();
    type_str(&mut calc, "5");
    calc.choose_operator(Operator::Add).expect("add");
    type_str(&mut calc, ".");
    assert_eq!(calc.compute(), Ok(()));
    assert_eq!(calc.current_operand(), ".");
    assert_eq!(calc.previous_operand(), "5");
    assert_eq!(calc.pending_operator(), Some(Operator::Add));
    assert!(calc.history().is_empty());
    assert_eq!(store.saved(), None);

    assert_eq!(calc.choose_operator(Operator::Multiply), Ok(()));
    assert_eq!(calc.previous_operand(), ".");
    assert_eq!(calc.current_operand(), "");
    assert_eq!(calc.pending_operator(), Some(Operator::Multiply));
    assert_eq!(calc.pending_line(), ". ×");
    assert!(calc.history().is_empty());
    assert_eq!(store.saved(), None);
}

#[test]
/// What: Clearing history empties the list and persists the empty list.
fn clear_history_persists_empty_list() {
    let store = MemoryStore::with_records(vec!["1 + 2 = 3".to_string()]);
    let mut calc = Accumulator::new(Box::new(store.clone()));
    assert_eq!(calc.history(), ["1 + 2 = 3"]);
    calc.clear_history();
    assert!(calc.history().is_empty());
    assert_eq!(store.saved(), Some(Vec::new()));
}

#[test]
/// What: Fixed precision rounds results while operands keep raw formatting.
fn precision_rounds_results() {
    let store = MemoryStore::new();
    let mut calc = Accumulator::new(Box::new(store)).with_precision(Some(2));
    binary(&mut calc, "1", Operator::Divide, "3").expect("compute");
    assert_eq!(calc.current_operand(), "0.33");
    assert_eq!(calc.history(), ["1 ÷ 3 = 0.33"]);

    let (mut raw, _) = calc_with_store();
    binary(&mut raw, "0.1", Operator::Add, "0.2").expect("compute");
    assert_eq!(raw.current_operand(), "0.30000000000000004");
}
