//! Rule-table driven lexical analysis.
//! 基于规则表的词法分析。
//!
//! A [`Scanner`] is built from an ordered list of [`Rule`]s. Scanning tries
//! the rules in order at each position, emits [`Token`]s according to each
//! rule's [`Emission`] policy, and stops at the first character no rule
//! matches. The resulting tokens are consumed through the [`Tokens`] cursor.
//!
//! ```ignore
//! let rules = [Rule::emit(r"\d+", 1), Rule::emit(r"\+", 2)];
//! let mut tokens = relex_lexer::scan("12+34", &rules)?.into_stream()?;
//! assert_eq!(tokens.get()?.text, "12");
//! ```

mod config;
mod error;
mod rule;
mod scanner;
mod stream;
mod token;

pub use config::ScannerConfig;
pub use error::{LexError, RuleError, StreamError};
pub use rule::{Category, Emission, Rule};
pub use scanner::{ScanOutcome, Scanner};
pub use stream::Tokens;
pub use token::Token;

/// Compile `rules` and scan `source` in one step.
/// 一步完成规则编译与源码扫描。
///
/// Prefer building a [`Scanner`] once when the same table is used repeatedly.
pub fn scan(source: &str, rules: &[Rule]) -> Result<ScanOutcome, RuleError> {
    Ok(Scanner::new(rules)?.scan(source))
}
