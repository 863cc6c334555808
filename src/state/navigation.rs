//! Navigation-related state types.
//!
//! This module contains the form field focus order for a widget instance.

/// Specifying the different form fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Field {
    Country,
    Quantity,
    Generate,
}

impl Field {
    /// Field after this one, wrapping.
    ///
    pub fn next(self) -> Field {
        match self {
            Field::Country => Field::Quantity,
            Field::Quantity => Field::Generate,
            Field::Generate => Field::Country,
        }
    }

    /// Field before this one, wrapping.
    ///
    pub fn prev(self) -> Field {
        match self {
            Field::Country => Field::Generate,
            Field::Quantity => Field::Country,
            Field::Generate => Field::Quantity,
        }
    }
}
