use crate::core::data::colour::{BLACK, Colour};
use crate::core::fractals::escape_time::EscapeResult;

/// Length of the built-in procedural ramp.
pub const PROCEDURAL_PALETTE_LEN: usize = 768;

/// Colour table for escaped points plus a fixed interior colour.
///
/// Escaped iteration counts index the table modulo its length, so a table
/// shorter than the iteration cap wraps around. The banding that produces
/// at high counts is intentional, the same look the wraparound gives
/// externally-loaded tables. Interior points never touch the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
    interior: Colour,
}

impl Palette {
    /// The built-in 768-entry ramp: blue rises over the first 256 entries,
    /// green over the next 256, red over the last, ending at white.
    #[must_use]
    pub fn procedural() -> Self {
        let colours = (0..PROCEDURAL_PALETTE_LEN as u32)
            .map(|i| Colour {
                r: i.saturating_sub(512).min(255) as u8,
                g: i.min(511).saturating_sub(256).min(255) as u8,
                b: i.min(255) as u8,
            })
            .collect();

        Self {
            colours,
            interior: BLACK,
        }
    }

    /// Wraps an externally-loaded colour table. An empty table is invalid
    /// and falls back to the procedural ramp, so the palette is never
    /// empty and the modulo mapping is always defined.
    #[must_use]
    pub fn from_table(colours: Vec<Colour>) -> Self {
        if colours.is_empty() {
            return Self::procedural();
        }

        Self {
            colours,
            interior: BLACK,
        }
    }

    /// Same palette with a non-default interior colour.
    #[must_use]
    pub fn with_interior(mut self, interior: Colour) -> Self {
        self.interior = interior;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // from_table falls back rather than accept an empty table.
        false
    }

    #[must_use]
    pub fn colour_for(&self, result: EscapeResult) -> Colour {
        match result {
            EscapeResult::Escaped { iterations } => {
                self.colours[iterations as usize % self.colours.len()]
            }
            EscapeResult::Interior { .. } => self.interior,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::procedural()
    }
}
