//! Lazy transpose as a coordinate mapping
//!
//! A matrix never rewrites its storage when transposed. Instead it keeps an
//! [`Orientation`] and routes every logical `(i, j)` through [`map_index`]
//! on its way to or from the physical key space.

/// How logical coordinates relate to physical storage keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Physical key equals logical coordinate
    #[default]
    Normal,
    /// Physical key is the swapped logical coordinate
    Transposed,
}

impl Orientation {
    /// The opposite orientation
    pub const fn toggle(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Transposed,
            Orientation::Transposed => Orientation::Normal,
        }
    }

    pub const fn is_transposed(self) -> bool {
        matches!(self, Orientation::Transposed)
    }
}

/// Map a logical coordinate to its physical key (or back)
///
/// The mapping is an involution, so the same call converts a stored key
/// into the logical coordinate it represents.
#[inline]
pub const fn map_index(orientation: Orientation, i: usize, j: usize) -> (usize, usize) {
    match orientation {
        Orientation::Normal => (i, j),
        Orientation::Transposed => (j, i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Orientation::Normal.toggle(), Orientation::Transposed);
        assert_eq!(Orientation::Normal.toggle().toggle(), Orientation::Normal);
        assert!(Orientation::Transposed.is_transposed());
        assert!(!Orientation::default().is_transposed());
    }

    #[test]
    fn test_map_index() {
        assert_eq!(map_index(Orientation::Normal, 1, 2), (1, 2));
        assert_eq!(map_index(Orientation::Transposed, 1, 2), (2, 1));

        let (r, c) = map_index(Orientation::Transposed, 3, 7);
        assert_eq!(map_index(Orientation::Transposed, r, c), (3, 7));
    }
}
