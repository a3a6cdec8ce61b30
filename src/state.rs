use std::fmt;

/// Activation flags of a specialization at the time of the snapshot.
///
/// Decoded from the state byte of a raw record:
///
/// ```text
/// 0b?????? <excluded> <active>
/// ```
///
/// The two flags are independent. Bits above bit 1 are reserved for future
/// producers and are dropped on decode rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecializationState {
    active: bool,
    excluded: bool,
}

impl SpecializationState {
    pub const ACTIVE_BIT: u8 = 0b01;
    pub const EXCLUDED_BIT: u8 = 0b10;

    pub const fn new(active: bool, excluded: bool) -> Self {
        Self { active, excluded }
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self {
            active: bits & Self::ACTIVE_BIT != 0,
            excluded: bits & Self::EXCLUDED_BIT != 0,
        }
    }

    /// Re-encodes the flags. Reserved bits are always zero.
    pub const fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.active {
            bits |= Self::ACTIVE_BIT;
        }
        if self.excluded {
            bits |= Self::EXCLUDED_BIT;
        }
        bits
    }

    /// The specialization currently participates in dispatch.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The specialization was permanently disqualified, e.g. after its
    /// polymorphic cache overflowed.
    #[inline]
    pub const fn is_excluded(&self) -> bool {
        self.excluded
    }
}

impl fmt::Display for SpecializationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.active, self.excluded) {
            (false, false) => write!(f, "inactive"),
            (true, false) => write!(f, "active"),
            (false, true) => write!(f, "excluded"),
            (true, true) => write!(f, "active, excluded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        assert_eq!(SpecializationState::from_bits(0b00), SpecializationState::new(false, false));
        assert_eq!(SpecializationState::from_bits(0b01), SpecializationState::new(true, false));
        assert_eq!(SpecializationState::from_bits(0b10), SpecializationState::new(false, true));
        assert_eq!(SpecializationState::from_bits(0b11), SpecializationState::new(true, true));
    }

    #[test]
    fn reserved_bits_are_ignored() {
        assert_eq!(
            SpecializationState::from_bits(0b0000_0101),
            SpecializationState::from_bits(0b0000_0001)
        );
        assert_eq!(SpecializationState::from_bits(0b1111_1100), SpecializationState::default());
        assert_eq!(SpecializationState::from_bits(0xff).bits(), 0b11);
    }

    #[test]
    fn display_lists_set_flags() {
        assert_eq!(SpecializationState::from_bits(0).to_string(), "inactive");
        assert_eq!(SpecializationState::from_bits(3).to_string(), "active, excluded");
    }
}
