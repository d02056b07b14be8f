use std::fmt;

/// Number of observable page sections. Fixed: the page always has an
/// intro header, a work timeline and a connect section.
pub const SECTION_COUNT: usize = 3;

/// Identifier of an observable page section, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Intro,
    Work,
    Connect,
}

impl SectionId {
    pub const ALL: [SectionId; SECTION_COUNT] = [SectionId::Intro, SectionId::Work, SectionId::Connect];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Intro => "intro",
            SectionId::Work => "work",
            SectionId::Connect => "connect",
        }
    }

    /// Position of this section in the registry (document order).
    pub fn index(&self) -> usize {
        match self {
            SectionId::Intro => 0,
            SectionId::Work => 1,
            SectionId::Connect => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<SectionId> {
        SectionId::ALL.get(index).copied()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row range a mounted section occupies in the laid-out document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First document row of the section.
    pub top: usize,
    /// Number of rows the section occupies. Always > 0 for real content.
    pub height: usize,
}

impl Region {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    /// One past the last row of the section.
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// Ordered, fixed-size collection of section slots.
///
/// A slot is empty until its region is laid out ("mounted") and again
/// after `clear` (teardown/remount). The collection itself never grows
/// or shrinks.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    slots: [Option<Region>; SECTION_COUNT],
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the bounds of a mounted section.
    pub fn mount(&mut self, id: SectionId, region: Region) {
        self.slots[id.index()] = Some(region);
    }

    pub fn get(&self, id: SectionId) -> Option<Region> {
        self.slots[id.index()]
    }

    /// Empty every slot (regions unmounted).
    pub fn clear(&mut self) {
        self.slots = [None; SECTION_COUNT];
    }

    /// Slots in document order, mounted or not.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, Option<Region>)> + '_ {
        SectionId::ALL.iter().map(|id| (*id, self.slots[id.index()]))
    }

    pub fn mounted_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
