//! Core value types used by the presentation layer.

use crate::logic::Operator;

/// A clickable keypad button (also the target of key presses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadButton {
    /// `0`–`9` or `.`.
    Digit(char),
    /// One of the five operators.
    Operator(Operator),
    /// `=`: compute.
    Equals,
    /// `C`: clear the expression.
    Clear,
    /// `⌫`: delete the last character.
    Backspace,
    /// Empty the history.
    ClearHistory,
}

impl KeypadButton {
    /// Text drawn on the button.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(ch) => ch.to_string(),
            Self::Operator(op) => op.button_label().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ClearHistory => "Clear history".to_string(),
        }
    }
}

/// Keypad rows, top to bottom.
pub const KEYPAD_ROWS: [&[KeypadButton]; 5] = [
    &[
        KeypadButton::Clear,
        KeypadButton::Backspace,
        KeypadButton::Operator(Operator::Percentage),
        KeypadButton::Operator(Operator::Divide),
    ],
    &[
        KeypadButton::Digit('7'),
        KeypadButton::Digit('8'),
        KeypadButton::Digit('9'),
        KeypadButton::Operator(Operator::Multiply),
    ],
    &[
        KeypadButton::Digit('4'),
        KeypadButton::Digit('5'),
        KeypadButton::Digit('6'),
        KeypadButton::Operator(Operator::Subtract),
    ],
    &[
        KeypadButton::Digit('1'),
        KeypadButton::Digit('2'),
        KeypadButton::Digit('3'),
        KeypadButton::Operator(Operator::Add),
    ],
    &[
        KeypadButton::Digit('0'),
        KeypadButton::Digit('.'),
        KeypadButton::Equals,
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The keypad carries every digit, the decimal point, and all five operators once.
    fn keypad_covers_all_inputs() {
        let all: Vec<KeypadButton> = KEYPAD_ROWS.iter().flat_map(|r| r.iter().copied()).collect();
        for d in "0123456789.".chars() {
            assert_eq!(
                all.iter()
                    .filter(|b| **b == KeypadButton::Digit(d))
                    .count(),
                1
            );
        }
        for op in Operator::ALL {
            assert!(all.contains(&KeypadButton::Operator(op)));
        }
        assert!(all.contains(&KeypadButton::Equals));
        assert_eq!(KeypadButton::Operator(Operator::Divide).label(), "÷");
    }
}
