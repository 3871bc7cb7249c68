use serde::{Deserialize, Serialize};

/// One of the four sub-rectangles produced by splitting bounds at their midpoint.
///
/// "Top" is the min-y half and "left" is the min-x half, matching screen and
/// normalized map-projection space where y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in child storage order. Searches visit children in this order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Pick the quadrant for a pair of half-plane decisions.
    pub const fn from_halves(left: bool, top: bool) -> Self {
        match (left, top) {
            (true, true) => Quadrant::TopLeft,
            (false, true) => Quadrant::TopRight,
            (true, false) => Quadrant::BottomLeft,
            (false, false) => Quadrant::BottomRight,
        }
    }

    /// Position of this quadrant within [`Quadrant::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    pub const fn is_left(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::BottomLeft)
    }

    pub const fn is_top(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::TopRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, quadrant) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(quadrant.index(), i);
        }
    }

    #[test]
    fn test_from_halves_round_trips_sides() {
        for quadrant in Quadrant::ALL {
            assert_eq!(
                Quadrant::from_halves(quadrant.is_left(), quadrant.is_top()),
                quadrant
            );
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Quadrant::BottomRight).unwrap();
        assert_eq!(json, "\"bottom_right\"");
    }
}
