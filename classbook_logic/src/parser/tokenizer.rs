//! Splits an argument string into prefixed values
//!
//! A prefix is recognised only where it directly follows whitespace, so `ec/`
//! never yields a `c/` value and a `t/` inside a word is left alone. Values
//! run until the next recognised prefix and are trimmed.

use super::cli_syntax::Prefix;
use std::collections::HashMap;

/// Prefix to values mapping produced by [`ArgumentTokenizer`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, prefix: Prefix, value: String) {
        self.values.entry(prefix).or_default().push(value);
    }

    pub fn set_preamble(&mut self, preamble: String) {
        self.preamble = preamble;
    }

    /// Last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn are_prefixes_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.contains(*prefix))
    }

    /// Trimmed text before the first recognised prefix
    pub fn preamble(&self) -> &str {
        &self.preamble
    }
}

/// Where a recognised prefix starts in the argument string
#[derive(Debug, Clone, Copy)]
struct PrefixPosition {
    prefix: Option<Prefix>,
    start: usize,
}

pub struct ArgumentTokenizer;

impl ArgumentTokenizer {
    /// Tokenize `args` against the recognised `prefixes`; never fails
    pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
        let positions = Self::find_all_prefix_positions(args, prefixes);
        Self::extract_arguments(args, positions)
    }

    fn find_all_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<PrefixPosition> {
        let mut positions = Vec::new();
        for prefix in prefixes {
            for (start, _) in args.match_indices(prefix.as_str()) {
                let follows_whitespace = args[..start]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace);
                if follows_whitespace {
                    positions.push(PrefixPosition {
                        prefix: Some(*prefix),
                        start,
                    });
                }
            }
        }
        positions
    }

    fn extract_arguments(args: &str, mut positions: Vec<PrefixPosition>) -> ArgumentMultimap {
        positions.sort_by_key(|position| position.start);

        // Preamble marker at the front, end marker at the back
        positions.insert(
            0,
            PrefixPosition {
                prefix: None,
                start: 0,
            },
        );
        positions.push(PrefixPosition {
            prefix: None,
            start: args.len(),
        });

        let mut multimap = ArgumentMultimap::new();
        for window in positions.windows(2) {
            let (current, next) = (window[0], window[1]);
            match current.prefix {
                Some(prefix) => {
                    let value = args[current.start + prefix.len()..next.start].trim();
                    multimap.put(prefix, value.to_string());
                }
                None => {
                    let preamble = args[current.start..next.start].trim();
                    multimap.set_preamble(preamble.to_string());
                }
            }
        }
        multimap
    }
}
