//! Pattern resolution.
//!
//! Tries each of a command's declared patterns in order against one
//! invocation, returning the first pattern that both matches by shape
//! and validates every value. When nothing succeeds, the first cached
//! validation failure wins over a generic shape mismatch: the user's
//! shape was probably right and one value was wrong.

use parlance_foundation::{ResolutionError, ValidationError};

use crate::binder::{BoundValue, ValueBinder};
use crate::classify::classify;
use crate::command::CommandDef;
use crate::invocation::Invocation;
use crate::matcher::Matcher;

/// Resolves invocations against a command's declared patterns.
pub struct Resolver;

impl Resolver {
    /// Resolves raw argument text against the command's patterns.
    ///
    /// Tokens are classified once; each pattern is then tried strictly in
    /// declaration order. A pattern that does not match by shape is
    /// skipped silently. The first pattern whose values all validate wins
    /// immediately; later patterns are never attempted.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Invalid`] with the first cached
    /// validation failure when some pattern matched by shape, otherwise
    /// [`ResolutionError::NoPatternMatched`].
    pub fn resolve(command: &CommandDef, input: &str) -> Result<ResolvedCall, ResolutionError> {
        let invocation = Invocation::new(input);
        let kinds: Vec<_> = invocation.tokens().iter().map(|t| classify(t)).collect();

        let mut cached: Option<(usize, ValidationError)> = None;

        for pattern in command.patterns() {
            let Some(slots) = Matcher::match_pattern(pattern, &kinds) else {
                continue;
            };
            match Self::bind_all(command, &invocation, &slots) {
                Ok(values) => {
                    return Ok(ResolvedCall {
                        pattern: pattern.index,
                        values,
                        defaults: command.defaults().to_vec(),
                    });
                }
                Err(error) => {
                    // Only the first matching-but-invalid pattern is kept.
                    if cached.is_none() {
                        cached = Some((pattern.index, error));
                    }
                }
            }
        }

        match cached {
            Some((pattern, source)) => Err(ResolutionError::Invalid { pattern, source }),
            None => Err(ResolutionError::NoPatternMatched {
                pattern_count: command.patterns().len(),
            }),
        }
    }

    /// Binds every matched slot, giving the final slot the original,
    /// whitespace-preserving tail when it absorbed trailing tokens.
    fn bind_all(
        command: &CommandDef,
        invocation: &Invocation<'_>,
        slots: &[String],
    ) -> Result<Vec<BoundValue>, ValidationError> {
        let tokens = invocation.tokens();
        let mut values = Vec::with_capacity(slots.len());
        for (i, slot) in slots.iter().enumerate() {
            let spec = command
                .argument(slot)
                .expect("pattern slots are resolved against the argument set at definition time");
            let raw = if i == slots.len() - 1 && i < tokens.len() - 1 {
                invocation.tail_from(i).unwrap_or(tokens[i])
            } else {
                tokens[i]
            };
            values.push(ValueBinder::bind(spec, raw)?);
        }
        Ok(values)
    }
}

/// The winning pattern plus its ordered bound values.
///
/// Created once per invocation and immutable thereafter. Accessors come
/// in two layers: [`ResolvedCall::value`] reports exactly what was bound,
/// while the typed conveniences fall back to the argument's declared
/// default and then to a type-appropriate zero or empty value, never
/// failing.
#[derive(Clone, Debug)]
pub struct ResolvedCall {
    pattern: usize,
    values: Vec<BoundValue>,
    defaults: Vec<BoundValue>,
}

impl ResolvedCall {
    /// 1-based index of the pattern that won.
    #[must_use]
    pub fn pattern(&self) -> usize {
        self.pattern
    }

    /// Every bound value, in consumption order.
    #[must_use]
    pub fn values(&self) -> &[BoundValue] {
        &self.values
    }

    /// The first bound value answering to `key`, if the winning pattern
    /// produced one. Defaults do not participate.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&BoundValue> {
        self.values.iter().find(|value| value.matches(key))
    }

    /// Whether the winning pattern bound a value for `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    fn fallback(&self, key: &str) -> Option<&BoundValue> {
        self.defaults.iter().find(|value| value.matches(key))
    }

    /// The raw text bound to `key`, falling back to the declared default
    /// text. Absent entirely is `None`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.value(key)
            .or_else(|| self.fallback(key))
            .map(BoundValue::raw)
    }

    /// The integer bound to `key`, falling back to the declared default,
    /// then to zero.
    #[must_use]
    pub fn integer(&self, key: &str) -> i64 {
        self.value(key)
            .and_then(|v| v.value().as_integer())
            .or_else(|| self.fallback(key).and_then(|v| v.value().as_integer()))
            .unwrap_or(0)
    }

    /// The real number bound to `key` (integers promote), falling back to
    /// the declared default, then to zero.
    #[must_use]
    pub fn real(&self, key: &str) -> f64 {
        self.value(key)
            .and_then(|v| v.value().as_real())
            .or_else(|| self.fallback(key).and_then(|v| v.value().as_real()))
            .unwrap_or(0.0)
    }

    /// The boolean bound to `key`, falling back to the declared default,
    /// then to `false`.
    #[must_use]
    pub fn boolean(&self, key: &str) -> bool {
        self.value(key)
            .and_then(|v| v.value().as_boolean())
            .or_else(|| self.fallback(key).and_then(|v| v.value().as_boolean()))
            .unwrap_or(false)
    }

    /// Every integer bound to `key`, in order, for repeated groups.
    /// Defaults never participate.
    #[must_use]
    pub fn integers(&self, key: &str) -> Vec<i64> {
        self.values
            .iter()
            .filter(|value| value.matches(key))
            .filter_map(|value| value.value().as_integer())
            .collect()
    }

    /// Every real bound to `key`, in order (integers promote).
    #[must_use]
    pub fn reals(&self, key: &str) -> Vec<f64> {
        self.values
            .iter()
            .filter(|value| value.matches(key))
            .filter_map(|value| value.value().as_real())
            .collect()
    }

    /// Every raw text bound to `key`, in order.
    #[must_use]
    pub fn texts(&self, key: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|value| value.matches(key))
            .map(BoundValue::raw)
            .collect()
    }

    /// Every boolean bound to `key`, in order.
    #[must_use]
    pub fn booleans(&self, key: &str) -> Vec<bool> {
        self.values
            .iter()
            .filter(|value| value.matches(key))
            .filter_map(|value| value.value().as_boolean())
            .collect()
    }
}
