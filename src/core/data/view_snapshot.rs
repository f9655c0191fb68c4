use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use std::error::Error;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

/// The exportable description of what is on screen: viewport bounds,
/// iteration cap, and initial seed.
///
/// Serializes as a single space-separated line,
/// `x_min x_max y_min y_max iteration_cap seed_re seed_im`, using Rust's
/// shortest round-tripping float formatting, so parsing the line back
/// reproduces every bound and the seed bit for bit. Screenshot exporters
/// embed this record; a later load reconstructs the exact view from it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub viewport: Viewport,
    pub iteration_cap: u32,
    pub seed: Complex,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseViewSnapshotError {
    FieldCount { found: usize },
    Bound(ParseFloatError),
    IterationCap(ParseIntError),
    Viewport(ViewportError),
}

impl fmt::Display for ParseViewSnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => {
                write!(f, "expected 7 fields, found {}", found)
            }
            Self::Bound(err) => write!(f, "invalid bound or seed: {}", err),
            Self::IterationCap(err) => write!(f, "invalid iteration cap: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
        }
    }
}

impl Error for ParseViewSnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FieldCount { .. } => None,
            Self::Bound(err) => Some(err),
            Self::IterationCap(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ParseFloatError> for ParseViewSnapshotError {
    fn from(err: ParseFloatError) -> Self {
        Self::Bound(err)
    }
}

impl From<ParseIntError> for ParseViewSnapshotError {
    fn from(err: ParseIntError) -> Self {
        Self::IterationCap(err)
    }
}

impl From<ViewportError> for ParseViewSnapshotError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl fmt::Display for ViewSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.viewport.x_min(),
            self.viewport.x_max(),
            self.viewport.y_min(),
            self.viewport.y_max(),
            self.iteration_cap,
            self.seed.real,
            self.seed.imag,
        )
    }
}

impl FromStr for ViewSnapshot {
    type Err = ParseViewSnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 7 {
            return Err(ParseViewSnapshotError::FieldCount {
                found: fields.len(),
            });
        }

        let x_min: f64 = fields[0].parse()?;
        let x_max: f64 = fields[1].parse()?;
        let y_min: f64 = fields[2].parse()?;
        let y_max: f64 = fields[3].parse()?;
        let iteration_cap: u32 = fields[4].parse()?;
        let seed_re: f64 = fields[5].parse()?;
        let seed_im: f64 = fields[6].parse()?;

        Ok(Self {
            viewport: Viewport::new(x_min, x_max, y_min, y_max)?,
            iteration_cap,
            seed: Complex::new(seed_re, seed_im),
        })
    }
}
