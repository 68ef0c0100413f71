//! Invocation splitting.
//!
//! Splits one user invocation on whitespace while remembering where each
//! token started, so a trailing free-text slot can recover the original
//! spacing of the input instead of a collapsed rejoin.

/// A whitespace-split view of one invocation's argument text.
#[derive(Clone, Debug)]
pub struct Invocation<'a> {
    input: &'a str,
    tokens: Vec<&'a str>,
    starts: Vec<usize>,
}

impl<'a> Invocation<'a> {
    /// Splits raw input into whitespace-delimited tokens.
    ///
    /// Any Unicode whitespace delimits; leading and trailing whitespace
    /// produce no tokens.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut starts = Vec::new();
        let mut current: Option<usize> = None;

        for (i, ch) in input.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = current.take() {
                    tokens.push(&input[start..i]);
                    starts.push(start);
                }
            } else if current.is_none() {
                current = Some(i);
            }
        }
        if let Some(start) = current {
            tokens.push(&input[start..]);
            starts.push(start);
        }

        Self {
            input,
            tokens,
            starts,
        }
    }

    /// The tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the input held no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The original input from the start of token `index` onward, with
    /// interior spacing preserved and trailing whitespace trimmed.
    ///
    /// This is what a trailing text slot receives when it absorbs the rest
    /// of the input.
    #[must_use]
    pub fn tail_from(&self, index: usize) -> Option<&'a str> {
        self.starts
            .get(index)
            .map(|&start| self.input[start..].trim_end())
    }
}
