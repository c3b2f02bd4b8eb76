use std::fmt;

/// Side of the splitter a band is built on.
///
/// The sign multiplies the band width; the label is carried onto the
/// fragments a directional cut produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Positive offset (left of the splitter's direction of travel).
    Upper,
    /// Negative offset (right of the splitter's direction of travel).
    Lower,
}

impl Direction {
    /// Both directions, in the order they are cut.
    pub const ALL: [Self; 2] = [Self::Upper, Self::Lower];

    /// Returns `+1.0` for [`Direction::Upper`] and `-1.0` for [`Direction::Lower`].
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Upper => 1.0,
            Self::Lower => -1.0,
        }
    }

    /// Returns the metadata label attached to fragments.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
