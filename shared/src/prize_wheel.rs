use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::FULL_REVOLUTIONS;

/// A single wedge on the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub label: String,
    pub color: String,
}

impl Prize {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "prize catalog must contain at least one prize"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, non-empty list of prizes. Every entry has the same odds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "Vec<Prize>", into = "Vec<Prize>")]
pub struct PrizeCatalog {
    prizes: Vec<Prize>,
}

impl PrizeCatalog {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, CatalogError> {
        if prizes.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { prizes })
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    // Never true, but clippy wants it next to `len`.
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }

    /// Degrees covered by one wedge.
    pub fn slice_size(&self) -> f64 {
        360.0 / self.prizes.len() as f64
    }
}

impl TryFrom<Vec<Prize>> for PrizeCatalog {
    type Error = CatalogError;

    fn try_from(prizes: Vec<Prize>) -> Result<Self, Self::Error> {
        PrizeCatalog::new(prizes)
    }
}

impl From<PrizeCatalog> for Vec<Prize> {
    fn from(catalog: PrizeCatalog) -> Self {
        catalog.prizes
    }
}

static DEFAULT_PRIZES: Lazy<Vec<Prize>> = Lazy::new(|| {
    vec![
        Prize::new("Follow us & get 10% off", "#FFC83D"),
        Prize::new("Fridge magnet + 10% off", "#F4B6C2"),
        Prize::new("Flat 10% off", "#BFD7EA"),
        Prize::new("Write a note for a stranger & get 10% off", "#A8C3A0"),
    ]
});

impl Default for PrizeCatalog {
    fn default() -> Self {
        Self {
            prizes: DEFAULT_PRIZES.clone(),
        }
    }
}

/// The prize committed by a spin and the rotation the wheel has to reach.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub index: usize,
    pub prize: Prize,
    /// Un-normalized degrees, always at least `FULL_REVOLUTIONS * 360`.
    pub target_rotation: f64,
}

/// Rotation that parks the middle of wedge `index` under the top pointer
/// after `full_revolutions` forward turns. Wedges start at -90 degrees and
/// run clockwise.
pub fn target_rotation(index: usize, slice_count: usize, full_revolutions: u32) -> f64 {
    let slice_size = 360.0 / slice_count as f64;
    let target_offset = 360.0 - (index as f64 * slice_size + slice_size / 2.0);
    full_revolutions as f64 * 360.0 + target_offset
}

/// Outcome for a fixed draw. Panics only if `index` is out of range, which
/// `select_prize` never produces.
pub fn outcome_for_index(catalog: &PrizeCatalog, index: usize) -> SpinOutcome {
    outcome_with_revolutions(catalog, index, FULL_REVOLUTIONS)
}

pub fn outcome_with_revolutions(
    catalog: &PrizeCatalog,
    index: usize,
    full_revolutions: u32,
) -> SpinOutcome {
    SpinOutcome {
        index,
        prize: catalog.prizes[index].clone(),
        target_rotation: target_rotation(index, catalog.len(), full_revolutions),
    }
}

/// Uniform draw over the catalog.
pub fn select_prize<R: Rng + ?Sized>(catalog: &PrizeCatalog, rng: &mut R) -> SpinOutcome {
    select_prize_with_revolutions(catalog, FULL_REVOLUTIONS, rng)
}

pub fn select_prize_with_revolutions<R: Rng + ?Sized>(
    catalog: &PrizeCatalog,
    full_revolutions: u32,
    rng: &mut R,
) -> SpinOutcome {
    let index = rng.gen_range(0..catalog.len());
    outcome_with_revolutions(catalog, index, full_revolutions)
}
