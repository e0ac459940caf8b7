//! Prompting interface and utilities.
//!
//! An object implementing [`Prompter`] is consulted by
//! [`load_with_prompter`](crate::chart::load_with_prompter) when a metadata key or a section
//! appears twice. The plain [`load`](crate::chart::load) uses [`AlwaysUseNewer`].

use std::fmt;

use crate::chart::{command::SectionName, model::metadata::MetadataValue};

use super::ParseError;

/// An interface to prompt about handling conflicts on the `.chart` file.
pub trait Prompter {
    /// Determines a [`DuplicationWorkaround`] for duplicating conflicts.
    fn handle_duplication(&mut self, duplication: Duplication<'_>) -> DuplicationWorkaround;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn handle_duplication(&mut self, duplication: Duplication<'_>) -> DuplicationWorkaround {
        (**self).handle_duplication(duplication)
    }
}

/// It represents that there is a duplicated definition on the `.chart` file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Duplication<'a> {
    /// A key of `[Song]` is defined again, in the same section or in another `[Song]`.
    Metadata {
        /// Duplicated key.
        key: &'a str,
        /// Existing value.
        older: &'a MetadataValue,
        /// Incoming value.
        newer: &'a MetadataValue,
    },
    /// A section other than `[Song]` appears again. The whole section is kept or replaced.
    Section {
        /// Duplicated section.
        name: SectionName,
    },
}

impl fmt::Display for Duplication<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metadata { key, .. } => write!(f, "metadata key `{key}`"),
            Self::Section { name } => write!(f, "section `[{name}]`"),
        }
    }
}

/// A choice to handle the duplicated definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DuplicationWorkaround {
    /// Choose to use the existing one.
    UseOlder,
    /// Choose to use the incoming one.
    UseNewer,
    /// Choose to interrupt this parsing.
    Halt,
}

impl DuplicationWorkaround {
    /// Keeps `target` or replaces it with `newer`, or fails with [`ParseError::Duplicated`]
    /// describing `what`.
    pub(crate) fn apply<T>(self, target: &mut T, newer: T, what: String) -> Result<(), ParseError> {
        match self {
            Self::UseOlder => Ok(()),
            Self::UseNewer => {
                *target = newer;
                Ok(())
            }
            Self::Halt => Err(ParseError::Duplicated { what }),
        }
    }
}

/// The strategy that always using older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseOlder;

impl Prompter for AlwaysUseOlder {
    fn handle_duplication(&mut self, _: Duplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseOlder
    }
}

/// The strategy that always using newer ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseNewer;

impl Prompter for AlwaysUseNewer {
    fn handle_duplication(&mut self, _: Duplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseNewer
    }
}

/// The strategy that always halts parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysHalt;

impl Prompter for AlwaysHalt {
    fn handle_duplication(&mut self, _: Duplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::Halt
    }
}
