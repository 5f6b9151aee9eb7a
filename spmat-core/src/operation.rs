//! The binary operations supported between two matrices

use core::str::FromStr;

use crate::SpmatError;

/// Arithmetic operation between two sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Elementwise sum
    Add,
    /// Elementwise difference
    Subtract,
    /// Matrix product
    Multiply,
}

impl Operation {
    /// All supported operations
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Name used to request this operation
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Noun used in error messages
    pub const fn noun(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Apply this operation to two matrices
    #[cfg(feature = "alloc")]
    pub fn apply<T: crate::MatrixElement>(
        &self,
        lhs: &crate::HashMatrix<T>,
        rhs: &crate::HashMatrix<T>,
    ) -> crate::Result<crate::HashMatrix<T>> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl FromStr for Operation {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
            .ok_or(SpmatError::UnknownOperation)
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operation() {
        assert_eq!("add".parse(), Ok(Operation::Add));
        assert_eq!(" Subtract\n".parse(), Ok(Operation::Subtract));
        assert_eq!("MULTIPLY".parse(), Ok(Operation::Multiply));

        assert_eq!("divide".parse::<Operation>(), Err(SpmatError::UnknownOperation));
        assert_eq!("".parse::<Operation>(), Err(SpmatError::UnknownOperation));
    }

    #[test]
    fn test_display_round_trips_name() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse(), Ok(op));
        }
    }
}
