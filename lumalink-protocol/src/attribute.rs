//! Attribute identifiers exposed by the lighting peripheral

/// Single-byte attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScalarId {
    /// Index into the pattern list
    PatternIndex,
    /// Index into the color list
    ColorIndex,
    /// LED brightness
    Brightness,
    /// Animation speed
    Speed,
}

/// Newline-delimited name lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ListId {
    /// Available animation patterns
    Patterns,
    /// Available color palettes
    Colors,
}

/// Any attribute the core can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttributeId {
    Scalar(ScalarId),
    List(ListId),
}

impl ScalarId {
    /// All scalar attributes, in storage order
    pub const ALL: [ScalarId; 4] = [
        ScalarId::PatternIndex,
        ScalarId::ColorIndex,
        ScalarId::Brightness,
        ScalarId::Speed,
    ];

    /// Position of this attribute in [`ScalarId::ALL`]
    pub const fn slot(self) -> usize {
        match self {
            ScalarId::PatternIndex => 0,
            ScalarId::ColorIndex => 1,
            ScalarId::Brightness => 2,
            ScalarId::Speed => 3,
        }
    }

    /// The list this attribute indexes into, if it is an index
    pub const fn indexed_list(self) -> Option<ListId> {
        match self {
            ScalarId::PatternIndex => Some(ListId::Patterns),
            ScalarId::ColorIndex => Some(ListId::Colors),
            ScalarId::Brightness | ScalarId::Speed => None,
        }
    }

    /// Returns true for pattern and color indices
    pub const fn is_index(self) -> bool {
        self.indexed_list().is_some()
    }
}

impl ListId {
    /// All list attributes, in storage order
    pub const ALL: [ListId; 2] = [ListId::Patterns, ListId::Colors];

    /// Position of this list in [`ListId::ALL`]
    pub const fn slot(self) -> usize {
        match self {
            ListId::Patterns => 0,
            ListId::Colors => 1,
        }
    }

    /// The index attribute paired with this list
    pub const fn index(self) -> ScalarId {
        match self {
            ListId::Patterns => ScalarId::PatternIndex,
            ListId::Colors => ScalarId::ColorIndex,
        }
    }
}

impl From<ScalarId> for AttributeId {
    fn from(id: ScalarId) -> Self {
        AttributeId::Scalar(id)
    }
}

impl From<ListId> for AttributeId {
    fn from(id: ListId) -> Self {
        AttributeId::List(id)
    }
}
