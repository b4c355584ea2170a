//! Unvalidated command-line values.

/// What the user typed, before any checks.
///
/// Built once per invocation and only read afterwards. Empty strings are
/// treated the same as absent values, so `--type ""` falls back to the
/// default type just like omitting the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub name: Option<String>,
    pub options_csv: Option<String>,
    pub silent: bool,
    pub type_csv: Option<String>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_options_csv(mut self, csv: impl Into<String>) -> Self {
        self.options_csv = Some(csv.into());
        self
    }

    pub fn with_type_csv(mut self, csv: impl Into<String>) -> Self {
        self.type_csv = Some(csv.into());
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Project name, or `""` when none was given.
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Option tokens in the order given. Absent means none.
    pub fn option_tokens(&self) -> Vec<&str> {
        split_csv(self.options_csv.as_deref()).unwrap_or_default()
    }

    /// Type tokens in the order given. Absent means `["standard"]`.
    pub fn type_tokens(&self) -> Vec<&str> {
        split_csv(self.type_csv.as_deref()).unwrap_or_else(|| vec![DEFAULT_TYPE])
    }
}

const DEFAULT_TYPE: &str = "standard";

/// Split on `,` without trimming. Inner empty tokens are kept so that
/// `"yarn,,edge"` reports the empty token as unknown.
fn split_csv(csv: Option<&str>) -> Option<Vec<&str>> {
    csv.filter(|s| !s.is_empty())
        .map(|s| s.split(',').collect())
}
