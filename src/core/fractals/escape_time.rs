use crate::core::data::complex::Complex;

/// Points whose orbit magnitude squared reaches this value can never
/// return toward the origin; |z| >= 2 is the classic escape radius.
pub const ESCAPE_MAGNITUDE_SQUARED: f64 = 4.0;

/// Outcome of iterating a single point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeResult {
    /// The orbit left the escape radius after this many steps.
    Escaped { iterations: u32 },
    /// The orbit stayed bounded for the whole iteration budget.
    Interior { iterations: u32 },
}

impl EscapeResult {
    #[must_use]
    pub fn iterations(&self) -> u32 {
        match self {
            Self::Escaped { iterations } | Self::Interior { iterations } => *iterations,
        }
    }

    #[must_use]
    pub fn escaped(&self) -> bool {
        matches!(self, Self::Escaped { .. })
    }
}

/// Iterates z <- z^2 + c from `z0` until the orbit escapes or the cap is
/// reached. The per-pixel hot path: pure, allocation-free.
///
/// The boundedness test is written as `magnitude < 4` so that a NaN
/// magnitude (possible only with pathological seeds) fails it and counts
/// as escaped at the current step instead of iterating forever.
#[must_use]
pub fn escape_time(c: Complex, z0: Complex, iteration_cap: u32) -> EscapeResult {
    let mut z = z0;
    let mut iterations = 0;

    while iterations < iteration_cap {
        if !(z.magnitude_squared() < ESCAPE_MAGNITUDE_SQUARED) {
            return EscapeResult::Escaped { iterations };
        }
        z = z * z + c;
        iterations += 1;
    }

    EscapeResult::Interior {
        iterations: iteration_cap,
    }
}
