//! The time-ordered container of track items.

use std::ops::Deref;

/// An item placed at a time on the track.
pub trait Timed {
    /// The tick where the item is placed.
    fn time(&self) -> u64;
}

/// A sequence of items kept sorted by [`Timed::time`].
///
/// Items on the same time keep the order they were pushed in, so the order of simultaneous
/// notes and flags in the source is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Track<T>(Vec<T>);

impl<T> Default for Track<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Track<T> {
    /// Creates an empty track.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Removes and returns the item at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Keeps only the items the predicate holds on.
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        self.0.retain(f);
    }

    /// Returns the mutable item at `index`. The time of the item must not be changed.
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Unwraps the sorted items.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Timed> Track<T> {
    /// Inserts the item after all the items placed at the same time or earlier, and returns
    /// the index where it was placed.
    pub fn push(&mut self, item: T) -> usize {
        let time = item.time();
        let index = self.0.partition_point(|placed| placed.time() <= time);
        self.0.insert(index, item);
        index
    }
}

impl<T> Deref for Track<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Timed> FromIterator<T> for Track<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut track = Self::new();
        for item in iter {
            track.push(item);
        }
        track
    }
}

impl<T: Timed> Extend<T> for Track<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for Track<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Track<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Mark(u64, &'static str);

    impl Timed for Mark {
        fn time(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn push_is_stable() {
        let mut track = Track::new();
        assert_eq!(track.push(Mark(384, "a")), 0);
        assert_eq!(track.push(Mark(0, "b")), 0);
        assert_eq!(track.push(Mark(384, "c")), 2);
        assert_eq!(track.push(Mark(192, "d")), 1);
        assert_eq!(track.push(Mark(0, "e")), 1);

        assert_eq!(
            track.iter().map(|mark| mark.1).collect::<String>(),
            "bedac"
        );
    }

    #[test]
    fn collect_sorts() {
        let track: Track<_> = [Mark(3, "x"), Mark(1, "y"), Mark(3, "z"), Mark(2, "w")]
            .into_iter()
            .collect();
        assert!(track.windows(2).all(|pair| pair[0].0 <= pair[1].0));
        assert_eq!(track.iter().map(|mark| mark.1).collect::<String>(), "ywxz");
    }

    #[test]
    fn remove_out_of_range() {
        let mut track: Track<_> = [Mark(1, "a")].into_iter().collect();
        assert_eq!(track.remove(1), None);
        assert_eq!(track.remove(0), Some(Mark(1, "a")));
        assert!(track.is_empty());
    }
}
