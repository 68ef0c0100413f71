//! Greedy pattern matching with single-step backtracking.
//!
//! Decides whether a sequence of classified tokens fits a [`Pattern`],
//! and which slot names the tokens land in. Repetition is handled by a
//! bounded retreat: when the current group fails, the matcher steps back
//! exactly one group if that group still has repetition budget, so the
//! walk never becomes exponential.

use parlance_foundation::ArgKind;

use crate::pattern::{Pattern, PatternGroup};

/// Cursor state threaded through one matching attempt.
#[derive(Clone, Copy, Debug)]
struct MatchState {
    /// Index of the group being attempted.
    group: usize,
    /// Index of the next unconsumed token.
    token: usize,
    /// Extra appearances already granted to the group being repeated.
    repeats: u32,
    /// Which group the repeat counter currently refers to.
    repeating: Option<usize>,
}

impl MatchState {
    /// Steps back to re-attempt the previous group as a repetition.
    fn retreat(mut self) -> Self {
        self.group -= 1;
        self.repeats += 1;
        self.repeating = Some(self.group);
        self
    }
}

/// Matches classified token streams against patterns.
pub struct Matcher;

impl Matcher {
    /// Attempts to match classified tokens against one pattern.
    ///
    /// Returns the ordered slot names consumed, length-expanded for
    /// repeated groups, or `None` if the pattern does not fit. A failed
    /// match is a normal negative result, never an error.
    ///
    /// Success requires every token consumed. Groups left unvisited once
    /// the tokens run out are fine; their slots simply go unbound and
    /// fall back to defaults later. When tokens outlast the groups and
    /// the final slot is Text, the remainder is considered absorbed by
    /// that slot; the resolver reassembles it from the original input.
    #[must_use]
    pub fn match_pattern(pattern: &Pattern, token_kinds: &[ArgKind]) -> Option<Vec<String>> {
        // A pattern with no groups matches exactly the empty invocation.
        if token_kinds.is_empty() && pattern.groups.is_empty() {
            return Some(Vec::new());
        }
        if token_kinds.is_empty() || pattern.groups.is_empty() {
            return None;
        }

        let mut names = Vec::new();
        let mut state = MatchState {
            group: 0,
            token: 0,
            repeats: 0,
            repeating: None,
        };

        while state.token < token_kinds.len() {
            // The previous group can absorb another appearance while it
            // still has repetition budget.
            let can_repeat = state.group > 0
                && pattern.groups[state.group - 1].max_repetitions > state.repeats + 1;

            if state.group >= pattern.groups.len() {
                if can_repeat {
                    state = state.retreat();
                    continue;
                }
                // Tokens remain past the last group: a final Text slot
                // absorbs them all; anything else is a mismatch.
                let last = &pattern.groups[state.group - 1];
                if last.last_kind() == Some(ArgKind::Text) {
                    return Some(names);
                }
                return None;
            }

            let group = &pattern.groups[state.group];
            if Self::group_fits(group, &token_kinds[state.token..]) {
                // Keep the repeat counter only while re-entering the group
                // it refers to; forward progress elsewhere resets it.
                if state.repeating != Some(state.group) {
                    state.repeats = 0;
                }
                for slot in &group.slots {
                    names.push(slot.name.clone());
                }
                state.token += group.len();
                state.group += 1;
                continue;
            }

            if can_repeat {
                state = state.retreat();
                continue;
            }
            return None;
        }

        Some(names)
    }

    /// Whether every slot kind in the group accepts the next tokens, in
    /// order. Too few remaining tokens is an ordinary failure; repetition
    /// of the previous group may still rescue the attempt.
    fn group_fits(group: &PatternGroup, upcoming: &[ArgKind]) -> bool {
        upcoming.len() >= group.len()
            && group
                .slots
                .iter()
                .zip(upcoming)
                .all(|(slot, kind)| slot.kind.accepts(*kind))
    }
}
