//! Column resolution for semantic fields.
//!
//! Resolution runs three token tiers against normalized headers (exact,
//! starts-with, contains); the first tier with any hit wins. Exact hits are
//! trusted. Weaker hits, and the postcode column-0 fallback, are validated by
//! sampling cell values against the field's plausibility predicate. When
//! validation fails every column is re-scored by the same predicate.

use std::fmt;

use wind_ingest::RawTable;

use crate::field::SemanticField;

/// Maximum number of non-empty values sampled per column.
pub const SAMPLE_LIMIT: usize = 200;

/// Share of sampled values that must pass for a prefix/contains match.
pub const MIN_HIT_RATIO: f64 = 0.1;

/// How a column was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStrength {
    /// Header equals a token.
    Exact,
    /// Header starts with a token.
    Prefix,
    /// Header contains a token.
    Contains,
    /// No header matched; the field's default column was used.
    Fallback,
    /// Header matching failed; the column with most plausible values won.
    Rescored,
}

impl MatchStrength {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Prefix => "prefix",
            Self::Contains => "contains",
            Self::Fallback => "fallback",
            Self::Rescored => "rescored",
        }
    }
}

impl fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plausibility sample for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleCount {
    /// Values passing the predicate.
    pub hits: usize,
    /// Non-empty values examined.
    pub considered: usize,
}

/// A header token match before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    pub index: usize,
    pub strength: MatchStrength,
    pub token: Option<&'static str>,
}

/// The resolved column for a semantic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMatch {
    pub index: usize,
    pub strength: MatchStrength,
    /// Token that matched the header, if any.
    pub token: Option<&'static str>,
    pub sample: SampleCount,
}

/// Lowercases and keeps only ASCII alphanumerics.
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

/// Finds the first header matching a token, tier by tier.
///
/// Within a tier tokens are tried in priority order and, for each token,
/// headers left to right.
pub fn find_token_match(
    normalized_headers: &[String],
    tokens: &'static [&'static str],
) -> Option<TokenMatch> {
    let tiers: [(MatchStrength, fn(&str, &str) -> bool); 3] = [
        (MatchStrength::Exact, |header, token| header == token),
        (MatchStrength::Prefix, |header, token| header.starts_with(token)),
        (MatchStrength::Contains, |header, token| header.contains(token)),
    ];
    for (strength, matches) in tiers {
        for &token in tokens {
            if let Some(index) = normalized_headers
                .iter()
                .position(|header| matches(header, token))
            {
                return Some(TokenMatch {
                    index,
                    strength,
                    token: Some(token),
                });
            }
        }
    }
    None
}

/// Counts plausible values among the first [`SAMPLE_LIMIT`] non-empty cells.
pub fn count_valid_samples(table: &RawTable, column: usize, field: SemanticField) -> SampleCount {
    let mut sample = SampleCount::default();
    for value in table
        .column_values(column)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .take(SAMPLE_LIMIT)
    {
        sample.considered += 1;
        if field.is_plausible(value) {
            sample.hits += 1;
        }
    }
    sample
}

/// Resolves semantic columns of one parsed table.
#[derive(Debug, Clone)]
pub struct SchemaResolver<'a> {
    table: &'a RawTable,
    normalized_headers: Vec<String>,
}

impl<'a> SchemaResolver<'a> {
    pub fn new(table: &'a RawTable) -> Self {
        let normalized_headers = table.headers.iter().map(|h| normalize_header(h)).collect();
        Self {
            table,
            normalized_headers,
        }
    }

    pub fn table(&self) -> &'a RawTable {
        self.table
    }

    /// Raw header text of a column (`""` when out of range).
    pub fn header(&self, index: usize) -> &'a str {
        self.table.headers.get(index).map_or("", String::as_str)
    }

    /// Normalized header text of a column (`""` when out of range).
    pub fn normalized_header(&self, index: usize) -> &str {
        self.normalized_headers.get(index).map_or("", String::as_str)
    }

    /// Picks the column for `field`, or `None` when no column is plausible.
    ///
    /// The postcode field falls back to column 0 when nothing better exists.
    pub fn resolve(&self, field: SemanticField) -> Option<ColumnMatch> {
        let width = self.table.width();
        if width == 0 {
            return None;
        }
        let profile = field.profile();

        let candidate = find_token_match(&self.normalized_headers, profile.tokens).or_else(|| {
            profile
                .fallback_column
                .filter(|&index| index < width)
                .map(|index| TokenMatch {
                    index,
                    strength: MatchStrength::Fallback,
                    token: None,
                })
        });

        if let Some(candidate) = candidate {
            let sample = count_valid_samples(self.table, candidate.index, field);
            if candidate.strength == MatchStrength::Exact
                || passes_validation(sample, candidate.strength)
            {
                let resolved = ColumnMatch {
                    index: candidate.index,
                    strength: candidate.strength,
                    token: candidate.token,
                    sample,
                };
                self.log_resolution(field, &resolved);
                return Some(resolved);
            }
            tracing::debug!(
                %field,
                header = self.header(candidate.index),
                strength = %candidate.strength,
                hits = sample.hits,
                considered = sample.considered,
                "Header match rejected by value sampling"
            );
        }

        if let Some(resolved) = self.rescore(field) {
            self.log_resolution(field, &resolved);
            return Some(resolved);
        }

        match profile.fallback_column.filter(|&index| index < width) {
            Some(index) => {
                let resolved = ColumnMatch {
                    index,
                    strength: MatchStrength::Fallback,
                    token: None,
                    sample: count_valid_samples(self.table, index, field),
                };
                self.log_resolution(field, &resolved);
                Some(resolved)
            }
            None => {
                tracing::debug!(%field, "No plausible column");
                None
            }
        }
    }

    /// Column with the most plausible values; ties go to the lowest index.
    fn rescore(&self, field: SemanticField) -> Option<ColumnMatch> {
        let mut best: Option<ColumnMatch> = None;
        for index in 0..self.table.width() {
            let sample = count_valid_samples(self.table, index, field);
            if sample.hits == 0 {
                continue;
            }
            if best.is_none_or(|current| sample.hits > current.sample.hits) {
                best = Some(ColumnMatch {
                    index,
                    strength: MatchStrength::Rescored,
                    token: None,
                    sample,
                });
            }
        }
        best
    }

    fn log_resolution(&self, field: SemanticField, resolved: &ColumnMatch) {
        tracing::debug!(
            %field,
            column = resolved.index,
            header = self.header(resolved.index),
            strength = %resolved.strength,
            token = resolved.token.unwrap_or("-"),
            hits = resolved.sample.hits,
            considered = resolved.sample.considered,
            "Resolved column"
        );
    }
}

fn passes_validation(sample: SampleCount, strength: MatchStrength) -> bool {
    if sample.hits == 0 {
        return false;
    }
    if strength == MatchStrength::Fallback {
        return true;
    }
    let required = ((sample.considered as f64) * MIN_HIT_RATIO).ceil() as usize;
    sample.hits >= required.max(1)
}
