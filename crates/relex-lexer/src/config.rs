//! Scanner configuration.
//! 扫描器配置。

/// Options applied to every rule pattern when a [`Scanner`](crate::Scanner)
/// compiles its rule table.
/// 扫描器编译规则表时应用于每个模式的选项。
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Match letters regardless of case.
    pub case_insensitive: bool,
    /// Enable Unicode-aware classes such as `\w` and `\d`.
    pub unicode: bool,
    /// Let `.` match `\n`.
    pub dot_matches_new_line: bool,
    /// Upper bound on the compiled size of each pattern, in bytes.
    pub size_limit: Option<usize>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            unicode: true,
            dot_matches_new_line: false,
            size_limit: None,
        }
    }
}

impl ScannerConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match letters regardless of case.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Enable or disable Unicode-aware classes.
    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    /// Let `.` match `\n`.
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Cap the compiled size of each pattern.
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }
}
