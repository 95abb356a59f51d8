use std::{
    error::Error,
    fmt::{Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    Construction {
        type_name: &'static str,
        message: &'static str,
    },
    ZeroDivision,
    NotInvertible,
}

impl Display for ValueError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ValueError::TypeMismatch { expected, found } => {
                write!(f, "Operand must be of type {}, got {}", expected, found)
            }
            ValueError::Construction { type_name, message } => {
                write!(f, "Init {} failed: {}", type_name, message)
            }
            ValueError::ZeroDivision => write!(f, "Vector3 cannot be divided by zero"),
            ValueError::NotInvertible => write!(f, "Matrix has no inverse"),
        }
    }
}

impl Error for ValueError {}

pub type ValueResult<T> = Result<T, ValueError>;
