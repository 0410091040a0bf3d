//! Result aggregation types.
//!
//! A validation run produces a [`ValidationReport`]: one [`FieldErrors`]
//! entry per field that failed at least one rule, ordered by the data map's
//! own key order. Fields with zero failures are omitted entirely.

use serde::Serialize;

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// The failures accumulated for one field, in rule-declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    /// The field name as it appears in the data map.
    pub field: String,
    /// One rendered message per failing rule.
    pub errors: Vec<String>,
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// The full error report for one validation call.
///
/// Empty means valid. The report doubles as the error type of the deferred
/// [`validate`](crate::engine::validate) adapter, so it implements
/// [`std::error::Error`].
///
/// # Examples
///
/// ```
/// use verdict::{data_map, rules_map, validate_sync};
///
/// let report = validate_sync(
///     &data_map! { "cat" => "" },
///     &rules_map! { "cat" => "required" },
/// );
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].errors, ["The cat field is required."]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    entries: Vec<FieldErrors>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one field's failures.
    pub fn push(&mut self, entry: FieldErrors) {
        self.entries.push(entry);
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entries, in data-key order.
    pub fn entries(&self) -> &[FieldErrors] {
        &self.entries
    }

    /// The entry for a field, if that field failed.
    pub fn field(&self, name: &str) -> Option<&FieldErrors> {
        self.entries.iter().find(|e| e.field == name)
    }

    /// Converts to a `Result`: `Ok(())` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::ops::Index<usize> for ValidationReport {
    type Output = FieldErrors;

    fn index(&self, index: usize) -> &FieldErrors {
        &self.entries[index]
    }
}

impl IntoIterator for ValidationReport {
    type Item = FieldErrors;
    type IntoIter = std::vec::IntoIter<FieldErrors>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a FieldErrors;
    type IntoIter = std::slice::Iter<'a, FieldErrors>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<FieldErrors> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = FieldErrors>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "validation failed for {} field(s):", self.entries.len())?;
        for entry in &self.entries {
            for error in &entry.errors {
                writeln!(f, "  {}: {error}", entry.field)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

// ============================================================================
// TESTS
// ============================================================================
