//! The closed set of binary operators the accumulator understands.

/// Binary operator pending between the previous and the current operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `prev + current`
    Add,
    /// `prev - current`
    Subtract,
    /// `prev * current`
    Multiply,
    /// `prev / current`; a zero divisor aborts the expression.
    Divide,
    /// `(prev * current) / 100`, read as "current % of prev".
    Percentage,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Percentage,
    ];

    /// What: Symbol shown in the pending line and in history records.
    ///
    /// Output:
    /// - `+`, `−`, `×`, `÷` or `% of`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percentage => "% of",
        }
    }

    /// Short label for keypad buttons (`%` instead of `% of`).
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Percentage => "%",
            other => other.symbol(),
        }
    }

    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Percentage => "percentage",
        }
    }

    /// What: Map a typed character onto an operator.
    ///
    /// Inputs:
    /// - `ch`: Character from a key press.
    ///
    /// Output:
    /// - `Some(Operator)` for `+ - * / %`, `None` otherwise.
    #[must_use]
    pub const fn from_key(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Percentage),
            _ => None,
        }
    }

    /// Apply the operator. Division by zero is the caller's responsibility.
    #[must_use]
    pub fn apply(self, prev: f64, current: f64) -> f64 {
        match self {
            Self::Add => prev + current,
            Self::Subtract => prev - current,
            Self::Multiply => prev * current,
            Self::Divide => prev / current,
            Self::Percentage => (prev * current) / 100.0,
        }
    }
}
