//! Pattern and pattern-group model.
//!
//! A [`Pattern`] is one accepted shape of positional input for a command:
//! an ordered sequence of [`PatternGroup`]s, each a contiguous run of
//! slots that match or repeat together as a unit.

use std::fmt;

use parlance_foundation::ArgKind;

/// One named slot backed by an argument spec.
///
/// The kind is resolved from the owning command's argument set when the
/// command is built, so matching never needs a name lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Canonical argument name.
    pub name: String,
    /// The argument's declared kind.
    pub kind: ArgKind,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A contiguous run of one or more slots consumed as one atomic unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternGroup {
    /// The slots, in match order.
    pub slots: Vec<Slot>,
    /// How many consecutive times the whole group may appear.
    pub max_repetitions: u32,
}

impl PatternGroup {
    /// Creates a group from slots and a repetition budget.
    #[must_use]
    pub fn new(slots: Vec<Slot>, max_repetitions: u32) -> Self {
        Self {
            slots,
            max_repetitions,
        }
    }

    /// A single-slot group that appears exactly once.
    #[must_use]
    pub fn single(name: impl Into<String>, kind: ArgKind) -> Self {
        Self::new(vec![Slot::new(name, kind)], 1)
    }

    /// Number of slots consumed per appearance.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a group with no slots (rejected at definition time).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The kind of the group's final slot, which decides whether trailing
    /// input may be slurped as free text.
    #[must_use]
    pub fn last_kind(&self) -> Option<ArgKind> {
        self.slots.last().map(|slot| slot.kind)
    }
}

impl fmt::Display for PatternGroup {
    /// Renders the group the way command help presents it: `[a] [b]`,
    /// with repeatable groups braced as `{[a] [b] x3}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .slots
            .iter()
            .map(|slot| format!("[{}]", slot.name))
            .collect::<Vec<_>>()
            .join(" ");
        if self.max_repetitions > 1 {
            write!(f, "{{{body} x{}}}", self.max_repetitions)
        } else {
            write!(f, "{body}")
        }
    }
}

/// One accepted shape of positional input for a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// The groups, in match order.
    pub groups: Vec<PatternGroup>,
    /// 1-based position among the command's declared patterns. Display
    /// only; matching never consults it.
    pub index: usize,
}

impl Pattern {
    /// Creates a pattern.
    #[must_use]
    pub fn new(groups: Vec<PatternGroup>, index: usize) -> Self {
        Self { groups, index }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .groups
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{body}")
    }
}
