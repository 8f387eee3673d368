//! The four binary operators the calculator accepts.

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad and menu order.
    pub const ALL: [Operator; 4] = [Self::Plus, Self::Minus, Self::Multiply, Self::Divide];

    /// The symbol written into the expression buffer.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// The phrase spoken when the operator is entered.
    pub fn spoken(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Multiply => "multiply",
            Self::Divide => "divide by",
        }
    }

    /// Look up an operator by its buffer symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Look up an operator by the character a key press resolves to.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator. Division by zero is reported as `None`.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Plus => Some(lhs + rhs),
            Self::Minus => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs == 0.0 => None,
            Self::Divide => Some(lhs / rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup_matches_chars() {
        for op in Operator::ALL {
            let c = op.symbol().chars().next().unwrap();
            assert_eq!(Operator::from_char(c), Some(op));
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("%"), None);
        assert_eq!(Operator::from_char('x'), None);
    }

    #[test]
    fn test_spoken_forms() {
        assert_eq!(Operator::Divide.spoken(), "divide by");
        assert_eq!(Operator::Multiply.spoken(), "multiply");
    }

    #[test]
    fn test_divide_by_negative_zero_is_rejected() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), None);
        assert_eq!(Operator::Divide.apply(5.0, -0.0), None);
        assert_eq!(Operator::Divide.apply(9.0, 3.0), Some(3.0));
    }
}
