//! Modifier flags of the notes.

use bitflags::bitflags;

bitflags! {
    /// The modifier set of a note.
    ///
    /// Besides the named flags, the bit `n` stands for the modifier written as a flag-only
    /// line with the raw fret `n` (e.g. `192 = N 6 0` sets the bit 6 of the note at 192 on a
    /// five-fret instrument). Such frets are always greater than the open sentinel, so they
    /// never overlap with the named flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NoteFlags: u128 {
        /// The note belongs to a six-fret instrument.
        const GHLIVE = 1 << 0;
        /// The note is an open strum instead of a fret.
        const OPEN = 1 << 1;
        const _ = !0;
    }
}

impl NoteFlags {
    /// Number of the bits available for the flags from frets.
    pub const FRET_BITS: u32 = u128::BITS;

    /// Creates the flag carried by a flag-only line with the raw fret.
    ///
    /// Returns `None` if the fret cannot be represented in the set.
    #[must_use]
    pub const fn from_fret(fret: u32) -> Option<Self> {
        if fret < Self::FRET_BITS {
            Some(Self::from_bits_retain(1 << fret))
        } else {
            None
        }
    }

    /// Iterates the raw frets of the flags which are not named, in ascending order.
    pub fn frets(self) -> impl Iterator<Item = u32> {
        let rest = self.difference(Self::GHLIVE | Self::OPEN).bits();
        (0..Self::FRET_BITS).filter(move |bit| rest & (1 << bit) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fret_flags_round_trip() {
        let flags = NoteFlags::from_fret(6).unwrap()
            | NoteFlags::from_fret(32).unwrap()
            | NoteFlags::OPEN
            | NoteFlags::GHLIVE;
        assert_eq!(flags.frets().collect::<Vec<_>>(), vec![6, 32]);
        assert!(flags.contains(NoteFlags::OPEN));
    }

    #[test]
    fn fret_out_of_bits() {
        assert_eq!(NoteFlags::from_fret(127).map(|flags| flags.bits()), Some(1 << 127));
        assert_eq!(NoteFlags::from_fret(128), None);
        assert_eq!(NoteFlags::from_fret(u32::MAX), None);
    }

    #[test]
    fn empty_has_no_frets() {
        assert_eq!(NoteFlags::empty().frets().count(), 0);
        assert_eq!((NoteFlags::OPEN | NoteFlags::GHLIVE).frets().count(), 0);
    }
}
