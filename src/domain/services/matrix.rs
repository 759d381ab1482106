//! Compatibility score matrix
//!
//! Rows are the child's sign, columns the parent's sign, both indexed by
//! `ZodiacAnimal::index()`. Scores follow the traditional branch relations:
//!
//! - 90: trine (三合) and six-harmony (六合) pairs
//! - 70: same sign, and neighbouring signs of one season
//! - 50: neutral pairs, and same sign for the self-punishing branches
//! - 30: harm (六害) and punishment (刑) pairs
//! - 10: direct clash (六沖)
//!
//! The table is authored symmetric. `asymmetric_cells` reports any cell
//! whose mirror disagrees; callers must not silently correct it.

use crate::domain::value_objects::ZodiacAnimal;

/// The only scores the matrix may contain
pub const SCORE_TIERS: [u8; 5] = [10, 30, 50, 70, 90];

#[rustfmt::skip]
const COMPATIBILITY_MATRIX: [[u8; 12]; 12] = [
    //Rat Ox  Tig Rab Dra Sna Hor Goa Mon Roo Dog Pig
    [70, 90, 50, 30, 90, 50, 10, 30, 90, 50, 50, 70], // Rat
    [90, 70, 50, 50, 50, 90, 30, 10, 50, 90, 30, 50], // Ox
    [50, 50, 70, 70, 50, 30, 90, 50, 10, 50, 90, 90], // Tiger
    [30, 50, 70, 70, 30, 50, 50, 90, 50, 10, 90, 90], // Rabbit
    [90, 50, 50, 30, 50, 50, 50, 50, 90, 90, 10, 50], // Dragon
    [50, 90, 30, 50, 50, 70, 70, 50, 90, 90, 50, 10], // Snake
    [10, 30, 90, 50, 50, 70, 50, 90, 50, 50, 90, 50], // Horse
    [30, 10, 50, 90, 50, 50, 90, 70, 50, 50, 30, 90], // Goat
    [90, 50, 10, 50, 90, 90, 50, 50, 70, 70, 50, 30], // Monkey
    [50, 90, 50, 10, 90, 90, 50, 50, 70, 50, 30, 50], // Rooster
    [50, 30, 90, 90, 10, 50, 90, 30, 50, 30, 70, 50], // Dog
    [70, 50, 90, 90, 50, 10, 50, 90, 30, 50, 50, 50], // Pig
];

/// Score for an ordered (child, parent) pair
pub fn score(child: ZodiacAnimal, parent: ZodiacAnimal) -> u8 {
    COMPATIBILITY_MATRIX[child.index()][parent.index()]
}

/// A cell whose mirrored cell holds a different score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsymmetricCell {
    pub child: ZodiacAnimal,
    pub parent: ZodiacAnimal,
    pub score: u8,
    pub mirrored: u8,
}

/// Every ordered pair (a, b) with a < b whose scores differ from (b, a)
pub fn asymmetric_cells() -> Vec<AsymmetricCell> {
    let mut cells = Vec::new();
    for child in ZodiacAnimal::ALL {
        for parent in ZodiacAnimal::ALL {
            if child.index() >= parent.index() {
                continue;
            }
            let forward = score(child, parent);
            let mirrored = score(parent, child);
            if forward != mirrored {
                cells.push(AsymmetricCell {
                    child,
                    parent,
                    score: forward,
                    mirrored,
                });
            }
        }
    }
    cells
}

/// Cells holding a score outside `SCORE_TIERS`
pub fn off_tier_cells() -> Vec<(ZodiacAnimal, ZodiacAnimal, u8)> {
    ZodiacAnimal::ALL
        .iter()
        .flat_map(|&child| ZodiacAnimal::ALL.iter().map(move |&parent| (child, parent)))
        .map(|(child, parent)| (child, parent, score(child, parent)))
        .filter(|(_, _, s)| !SCORE_TIERS.contains(s))
        .collect()
}

/// One row of the matrix, in column order
pub fn row(child: ZodiacAnimal) -> [u8; 12] {
    COMPATIBILITY_MATRIX[child.index()]
}
