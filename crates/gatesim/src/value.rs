use crate::error::GateError;
use std::fmt;

/// A three-valued logic state: low, high, or unknown/indeterminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Value {
    Low,
    High,
    #[default]
    X,
}

impl Value {
    /// Parses a single logic value token as accepted by both the netlist
    /// and stimulus text formats: `0`, `1`, and `2`/`X`/`x` for unknown.
    pub fn parse(raw: &str) -> Result<Self, GateError> {
        match raw {
            "0" => Ok(Value::Low),
            "1" => Ok(Value::High),
            "2" | "X" | "x" => Ok(Value::X),
            other => Err(GateError::UnknownLogicValue {
                raw: other.to_string(),
            }),
        }
    }

    pub fn not(self) -> Value {
        match self {
            Value::Low => Value::High,
            Value::High => Value::Low,
            Value::X => Value::X,
        }
    }

    /// Associative, commutative AND: any `Low` dominates to `Low`; else
    /// `X` if any operand is `X`; else `High` iff both are `High`.
    pub fn and(self, other: Value) -> Value {
        match (self, other) {
            (Value::Low, _) | (_, Value::Low) => Value::Low,
            (Value::X, _) | (_, Value::X) => Value::X,
            (Value::High, Value::High) => Value::High,
        }
    }

    /// Associative, commutative OR: any `High` dominates to `High`; else
    /// `X` if any operand is `X`; else `Low` iff both are `Low`.
    pub fn or(self, other: Value) -> Value {
        match (self, other) {
            (Value::High, _) | (_, Value::High) => Value::High,
            (Value::X, _) | (_, Value::X) => Value::X,
            (Value::Low, Value::Low) => Value::Low,
        }
    }

    pub fn nand(self, other: Value) -> Value {
        self.and(other).not()
    }

    pub fn nor(self, other: Value) -> Value {
        self.or(other).not()
    }

    /// `XOR(a,b) = OR(AND(a, NOT b), AND(b, NOT a))`; inherits X-propagation
    /// from AND/OR/NOT rather than defining its own truth table.
    pub fn xor(self, other: Value) -> Value {
        self.and(other.not()).or(other.and(self.not()))
    }

    pub fn xnor(self, other: Value) -> Value {
        self.xor(other).not()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Value::Low => '0',
            Value::High => '1',
            Value::X => 'X',
        };
        write!(f, "{c}")
    }
}
