//! ZodiacInfo entity - a sign plus its descriptive metadata
//!
//! Built fresh for every lookup from the static profile table; the year is
//! carried along for display only.

use serde::Serialize;

use crate::domain::value_objects::{Element, ZodiacAnimal};

/// Sign metadata for a resolved year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZodiacInfo {
    pub animal: ZodiacAnimal,
    pub year: i32,
    pub element: Element,
    pub personality: String,
    pub characteristics: Vec<String>,
    pub lucky_colors: Vec<String>,
    pub lucky_numbers: Vec<u8>,
}

impl ZodiacInfo {
    /// Decorative symbol for the resolved sign
    pub fn emoji(&self) -> &'static str {
        self.animal.emoji()
    }
}
