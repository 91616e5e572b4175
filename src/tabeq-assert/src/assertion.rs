//! The table equality engine.

use tabeq_table::{Table, render_rows};

use crate::diff::unified_diff;
use crate::error::{CompareError, CompareResult};

/// Default label for the missing-rows block of mismatch messages.
pub const DEFAULT_MISSING_ROWS_LABEL: &str = "Missing rows";

/// Default label for the unexpected-rows block of mismatch messages.
pub const DEFAULT_UNEXPECTED_ROWS_LABEL: &str = "Unexpected rows";

/// Notice used when the tables are unequal but the membership diff
/// cannot itemize the differences (duplicate-count mismatches).
pub const UNSPECIFIED_DIFFERENCE_NOTICE: &str =
    "Tables are unequal, but the differences cannot be itemized.";

/// Asserts equality between two tables.
///
/// Configuration is builder-style: setters consume and return the
/// assertion so calls can be chained before [`assert_equal`] runs. The
/// comparison itself is a one-shot, side-effect-free decision procedure;
/// nothing persists beyond the call.
///
/// ```
/// use tabeq_assert::{Table, TableEqualityAssertion};
///
/// let expected = Table::from_rows([["id1", "Label one"], ["id2", "Label two"]]);
/// let actual = Table::from_rows([["id2", "Label two"], ["id1", "Label one"]]);
///
/// TableEqualityAssertion::new(expected, actual)
///     .ignore_row_order()
///     .assert_equal()
///     .unwrap();
/// ```
///
/// [`assert_equal`]: TableEqualityAssertion::assert_equal
#[derive(Debug, Clone)]
pub struct TableEqualityAssertion {
    expected: Table,
    actual: Table,
    expected_header: Vec<String>,
    respect_row_order: bool,
    missing_rows_label: String,
    unexpected_rows_label: String,
}

impl TableEqualityAssertion {
    /// Create an assertion over an expected and an actual table.
    ///
    /// Defaults: no header expected, row order respected, standard
    /// block labels.
    pub fn new(expected: Table, actual: Table) -> Self {
        Self {
            expected,
            actual,
            expected_header: Vec::new(),
            respect_row_order: true,
            missing_rows_label: DEFAULT_MISSING_ROWS_LABEL.to_string(),
            unexpected_rows_label: DEFAULT_UNEXPECTED_ROWS_LABEL.to_string(),
        }
    }

    /// The expected table.
    pub fn expected(&self) -> &Table {
        &self.expected
    }

    /// The actual table.
    pub fn actual(&self) -> &Table {
        &self.actual
    }

    /// The label used for the missing-rows block of mismatch messages.
    pub fn missing_rows_label(&self) -> &str {
        &self.missing_rows_label
    }

    /// Set the missing-rows label.
    ///
    /// Fails with [`CompareError::Configuration`] if `label` is empty.
    pub fn set_missing_rows_label(mut self, label: impl Into<String>) -> CompareResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(CompareError::configuration(
                "missing rows label must not be empty",
            ));
        }
        self.missing_rows_label = label;
        Ok(self)
    }

    /// The label used for the unexpected-rows block of mismatch messages.
    pub fn unexpected_rows_label(&self) -> &str {
        &self.unexpected_rows_label
    }

    /// Set the unexpected-rows label.
    ///
    /// Fails with [`CompareError::Configuration`] if `label` is empty.
    pub fn set_unexpected_rows_label(mut self, label: impl Into<String>) -> CompareResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(CompareError::configuration(
                "unexpected rows label must not be empty",
            ));
        }
        self.unexpected_rows_label = label;
        Ok(self)
    }

    /// The configured header expectation; empty when none is expected.
    pub fn expected_header(&self) -> &[String] {
        &self.expected_header
    }

    /// Expect the table to begin with `header`.
    ///
    /// The header is validated against the first row of the expected
    /// table; the actual table is assumed to arrive without a header
    /// row and is never consulted by the header check. An empty header
    /// is equivalent to [`expect_no_header`](Self::expect_no_header).
    pub fn expect_header<I, S>(mut self, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_header = header.into_iter().map(Into::into).collect();
        self
    }

    /// Expect no header row.
    pub fn expect_no_header(mut self) -> Self {
        self.expected_header.clear();
        self
    }

    /// Whether the comparison is order-sensitive.
    pub fn is_row_order_respected(&self) -> bool {
        self.respect_row_order
    }

    /// Compare rows position by position (the default).
    pub fn respect_row_order(mut self) -> Self {
        self.respect_row_order = true;
        self
    }

    /// Compare rows as a multiset, ignoring their order.
    pub fn ignore_row_order(mut self) -> Self {
        self.respect_row_order = false;
        self
    }

    /// Perform the comparison.
    ///
    /// Returns `Ok(())` when the tables are equal under the configured
    /// policy. On mismatch, the error carries a fully formatted message;
    /// callers are expected to report it verbatim. A failed header check
    /// is fatal: the bodies are not compared afterwards.
    pub fn assert_equal(&self) -> CompareResult<()> {
        self.check_header()?;
        self.check_body()
    }

    fn check_header(&self) -> CompareResult<()> {
        if self.expected_header.is_empty() {
            return Ok(());
        }

        // The observed header comes from the expected table; the actual
        // table is assumed to be header-free.
        let observed = self.expected.row(0);
        if observed == Some(self.expected_header.as_slice()) {
            return Ok(());
        }

        let expected_block = render_rows(std::slice::from_ref(&self.expected_header));
        let observed_block = match observed {
            Some(row) => render_rows(&[row.to_vec()]),
            None => String::new(),
        };
        Err(CompareError::header_mismatch(format!(
            "--- Expected header\n{expected_block}\n+++ Given\n{observed_block}"
        )))
    }

    fn check_body(&self) -> CompareResult<()> {
        let expected_body = self.expected_body();
        let actual_body = self.actual.rows();

        tracing::debug!(
            expected_rows = expected_body.len(),
            actual_rows = actual_body.len(),
            respect_row_order = self.respect_row_order,
            "comparing table bodies"
        );

        if self.respect_row_order {
            self.check_body_ordered(expected_body, actual_body)
        } else {
            self.check_body_unordered(expected_body, actual_body)
        }
    }

    /// The expected table's rows with any configured header row removed.
    fn expected_body(&self) -> &[Vec<String>] {
        let rows = self.expected.rows();
        if self.expected_header.is_empty() || rows.is_empty() {
            rows
        } else {
            &rows[1..]
        }
    }

    fn check_body_ordered(
        &self,
        expected: &[Vec<String>],
        actual: &[Vec<String>],
    ) -> CompareResult<()> {
        // Render both bodies as one block so column widths stay
        // consistent between the two sides, then split at the row-count
        // boundary. Diffing two independently rendered blocks would
        // report pure padding differences as row changes.
        let mut combined: Vec<Vec<String>> = Vec::with_capacity(expected.len() + actual.len());
        combined.extend_from_slice(expected);
        combined.extend_from_slice(actual);
        let block = render_rows(&combined);

        let lines: Vec<&str> = block.lines().collect();
        let (expected_lines, actual_lines) = lines.split_at(expected.len());
        let expected_block = expected_lines.join("\n");
        let actual_block = actual_lines.join("\n");

        if expected_block == actual_block {
            return Ok(());
        }

        Err(CompareError::body_mismatch(unified_diff(
            &expected_block,
            &actual_block,
            "Expected",
            "Actual",
        )))
    }

    fn check_body_unordered(
        &self,
        expected: &[Vec<String>],
        actual: &[Vec<String>],
    ) -> CompareResult<()> {
        let expected_sorted = sorted_rows(expected);
        let actual_sorted = sorted_rows(actual);

        if expected_sorted == actual_sorted {
            return Ok(());
        }

        let missing: Vec<Vec<String>> = expected_sorted
            .iter()
            .filter(|row| !actual_sorted.contains(row))
            .cloned()
            .collect();
        let unexpected: Vec<Vec<String>> = actual_sorted
            .iter()
            .filter(|row| !expected_sorted.contains(row))
            .cloned()
            .collect();

        let mut sections = Vec::new();
        if !missing.is_empty() {
            sections.push(format!(
                "--- {}\n{}",
                self.missing_rows_label,
                Table::new(missing)
            ));
        }
        if !unexpected.is_empty() {
            sections.push(format!(
                "+++ {}\n{}",
                self.unexpected_rows_label,
                Table::new(unexpected)
            ));
        }

        if sections.is_empty() {
            // Membership matches on both sides, so the inequality is a
            // duplicate-count mismatch the set difference cannot show.
            // Never fail with an empty message.
            return Err(CompareError::body_mismatch(format!(
                "{UNSPECIFIED_DIFFERENCE_NOTICE}\n*** Given\n{}",
                self.actual
            )));
        }

        Err(CompareError::body_mismatch(sections.join("\n")))
    }
}

/// Copy of `rows` sorted with the natural lexicographic ordering over
/// cells. Total and deterministic; not user-configurable.
fn sorted_rows(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut rows = rows.to_vec();
    rows.sort();
    rows
}
