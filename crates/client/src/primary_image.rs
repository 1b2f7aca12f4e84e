//! Primary image selection over class-coded media entries.

use promostandards_types::MediaEntry;

/// One rule of a precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecedenceTier<'a> {
    /// Matches an entry carrying this class code.
    Code(&'a str),
    /// Matches an entry carrying every listed class code.
    AllOf(&'a [&'a str]),
}

impl PrecedenceTier<'_> {
    pub fn matches(&self, entry: &MediaEntry) -> bool {
        match self {
            Self::Code(code) => entry.has_class_code(code),
            Self::AllOf(codes) => codes.iter().all(|code| entry.has_class_code(code)),
        }
    }
}

/// Default precedence, highest priority first.
pub const PRIMARY_IMAGE_PRECEDENCE: &[PrecedenceTier<'static>] = &[
    PrecedenceTier::Code("1006"),
    PrecedenceTier::AllOf(&["1007", "1001", "2001"]),
    PrecedenceTier::AllOf(&["1007", "1001"]),
    PrecedenceTier::Code("1007"),
    PrecedenceTier::AllOf(&["1001", "2001"]),
    PrecedenceTier::Code("1001"),
    PrecedenceTier::Code("1003"),
];

/// Picks one primary entry using an ordered precedence table.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryImageSelector<'a> {
    tiers: &'a [PrecedenceTier<'a>],
}

impl Default for PrimaryImageSelector<'static> {
    fn default() -> Self {
        Self::new(PRIMARY_IMAGE_PRECEDENCE)
    }
}

impl<'a> PrimaryImageSelector<'a> {
    pub fn new(tiers: &'a [PrecedenceTier<'a>]) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &'a [PrecedenceTier<'a>] {
        self.tiers
    }

    /// Return the first entry, in input order, matching the highest tier that
    /// any entry matches. `None` when no tier matches, including for no entries.
    pub fn select<'e>(&self, entries: &'e [MediaEntry]) -> Option<&'e MediaEntry> {
        self.tiers
            .iter()
            .find_map(|tier| entries.iter().find(|entry| tier.matches(entry)))
    }
}
