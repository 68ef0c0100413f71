//! Command definitions.
//!
//! A [`CommandDef`] owns a command's argument specs and its declared
//! patterns, fully resolved and validated at construction. A malformed
//! declaration fails here, loudly, before the command can ever be
//! registered; nothing a user types at call time can surface a
//! definition problem.

use parlance_foundation::{DefinitionError, ResolutionError};

use crate::argument::ArgumentSpec;
use crate::binder::{BoundValue, ValueBinder};
use crate::pattern::{Pattern, PatternGroup, Slot};
use crate::resolver::{ResolvedCall, Resolver};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One group of slot names as declared, before resolution against the
/// argument set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupDef {
    /// Slot names consumed together as one atomic unit.
    pub names: Vec<String>,
    /// How many consecutive times the group may appear.
    pub max_repetitions: u32,
}

impl GroupDef {
    /// A group from names and a repetition budget.
    #[must_use]
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>, max_repetitions: u32) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            max_repetitions,
        }
    }

    /// A single-slot group that appears exactly once.
    #[must_use]
    pub fn slot(name: impl Into<String>) -> Self {
        Self::new([name.into()], 1)
    }
}

/// A declared command: its argument specs plus its accepted patterns.
///
/// Immutable after construction and free of interior mutability, so one
/// definition can serve any number of concurrent invocations.
#[derive(Clone, Debug)]
pub struct CommandDef {
    name: String,
    arguments: Vec<ArgumentSpec>,
    patterns: Vec<Pattern>,
    /// Defaults pre-bound through the normal coercion rules, so runtime
    /// fallback can never fail.
    defaults: Vec<BoundValue>,
}

impl CommandDef {
    /// Builds and validates a command definition.
    ///
    /// Every slot name in every pattern is resolved against the argument
    /// set (case-insensitively) and replaced with the argument's
    /// canonical name; every argument's constraints and declared default
    /// are checked.
    ///
    /// # Errors
    ///
    /// Returns the first [`DefinitionError`] found. A command that fails
    /// here must not be registered.
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<ArgumentSpec>,
        pattern_defs: Vec<Vec<GroupDef>>,
    ) -> Result<Self, DefinitionError> {
        let mut defaults = Vec::new();
        for (i, argument) in arguments.iter().enumerate() {
            if arguments[..i].iter().any(|seen| seen.matches(argument.name())) {
                return Err(DefinitionError::DuplicateArgument(
                    argument.name().to_string(),
                ));
            }
            argument.check()?;
            if let Some(default) = argument.default_value() {
                // A default must survive its own argument's rules.
                let bound = ValueBinder::bind(argument, default).map_err(|source| {
                    DefinitionError::InvalidDefault {
                        name: argument.name().to_string(),
                        raw: default.to_string(),
                        source,
                    }
                })?;
                defaults.push(bound);
            }
        }

        let mut patterns = Vec::with_capacity(pattern_defs.len());
        for (i, groups) in pattern_defs.into_iter().enumerate() {
            let index = i + 1; // patterns are 1-indexed for display
            let mut compiled = Vec::with_capacity(groups.len());
            for group in groups {
                if group.names.is_empty() {
                    return Err(DefinitionError::EmptyGroup { pattern: index });
                }
                if group.max_repetitions == 0 {
                    return Err(DefinitionError::ZeroRepetitions { pattern: index });
                }
                let mut slots = Vec::with_capacity(group.names.len());
                for name in group.names {
                    let spec = arguments
                        .iter()
                        .find(|argument| argument.matches(&name))
                        .ok_or(DefinitionError::UnknownArgument(name))?;
                    slots.push(Slot::new(spec.name(), spec.kind()));
                }
                compiled.push(PatternGroup::new(slots, group.max_repetitions));
            }
            patterns.push(Pattern::new(compiled, index));
        }

        Ok(Self {
            name: name.into(),
            arguments,
            patterns,
            defaults,
        })
    }

    /// The command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared argument specs.
    #[must_use]
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// The compiled patterns, in declaration order.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Looks up an argument spec by name (case-insensitive).
    #[must_use]
    pub fn argument(&self, key: &str) -> Option<&ArgumentSpec> {
        self.arguments.iter().find(|argument| argument.matches(key))
    }

    /// Pre-bound default values for every argument that declares one.
    #[must_use]
    pub(crate) fn defaults(&self) -> &[BoundValue] {
        &self.defaults
    }

    /// Resolves one invocation's argument text against this command's
    /// patterns, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] when no pattern both matches and
    /// validates: the first cached validation failure if some pattern
    /// matched by shape, otherwise a generic shape mismatch.
    pub fn resolve(&self, input: &str) -> Result<ResolvedCall, ResolutionError> {
        Resolver::resolve(self, input)
    }
}
