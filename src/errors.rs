use std::{fmt::Display, num::TryFromIntError};

/// Head/tail breaks Errors
#[derive(Debug, PartialEq, Eq)]
pub enum HeadTailErr {
    EmptyInputError,
    NonFiniteError,
    ConversionError,
    LowWindowError,
    HighWindowError,
}

impl Display for HeadTailErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadTailErr::EmptyInputError => {
                write!(f, "You can't classify an empty sample")
            }
            HeadTailErr::NonFiniteError => {
                write!(f, "The input contains NaN or infinite values")
            }
            HeadTailErr::ConversionError => {
                write!(f, "An error occurred during numeric conversion")
            }
            HeadTailErr::LowWindowError => {
                write!(f, "Couldn't get the upper bound of the low class")
            }
            HeadTailErr::HighWindowError => {
                write!(f, "Couldn't get the lower bound of the high class")
            }
        }
    }
}

impl From<TryFromIntError> for HeadTailErr {
    fn from(_: TryFromIntError) -> Self {
        HeadTailErr::ConversionError
    }
}

impl std::error::Error for HeadTailErr {}
