//! The rule-table scanner.
//! 规则表扫描器。

use regex::{Regex, RegexBuilder};
use relex_common::line_and_column;

use crate::config::ScannerConfig;
use crate::error::{LexError, RuleError};
use crate::rule::{Emission, Rule};
use crate::stream::Tokens;
use crate::token::Token;

/// A rule with its pattern compiled and anchored.
#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    emission: Emission,
}

/// Turns source text into tokens using an ordered rule table.
/// 使用有序规则表将源码转换为词法单元。
///
/// Every pattern is compiled once, up front. At each position the rules are
/// tried in table order and the first one matching at that exact position
/// wins, even if a later rule would match more text.
///
/// A rule that can match the empty string must not be reachable when no
/// other rule makes progress, otherwise `scan` never terminates.
#[derive(Debug, Clone)]
pub struct Scanner {
    rules: Vec<CompiledRule>,
}

impl Scanner {
    /// Compile a rule table with the default configuration.
    pub fn new(rules: &[Rule]) -> Result<Self, RuleError> {
        Self::with_config(rules, &ScannerConfig::default())
    }

    /// Compile a rule table, applying `config` to every pattern.
    pub fn with_config(rules: &[Rule], config: &ScannerConfig) -> Result<Self, RuleError> {
        let rules = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                compile(&rule.pattern, config)
                    .map(|regex| CompiledRule {
                        regex,
                        emission: rule.emission,
                    })
                    .map_err(|source| RuleError::InvalidPattern {
                        index,
                        pattern: rule.pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rules = rules.len(), "compiled rule table");
        Ok(Self { rules })
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Scan `source` to completion or to the first character no rule matches.
    /// 扫描 `source` 直到结束，或直到第一个无规则匹配的字符。
    ///
    /// On failure the outcome still carries every token emitted before the
    /// offending character.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn scan(&self, source: &str) -> ScanOutcome {
        let mut tokens: Vec<Token> = Vec::new();
        let mut pos = 0;

        while pos < source.len() {
            let rest = &source[pos..];

            let Some((emission, len)) = self
                .rules
                .iter()
                .find_map(|rule| rule.regex.find(rest).map(|m| (rule.emission, m.end())))
            else {
                let error = illegal_character(source, pos);
                tracing::debug!(%error, tokens = tokens.len(), "scan failed");
                return ScanOutcome {
                    tokens,
                    error: Some(error),
                };
            };

            let text = &rest[..len];
            match emission {
                Emission::Discard => {}
                Emission::EmitEach(category) => tokens.push(Token::new(text, category, pos)),
                Emission::EmitCollapsed(category) => {
                    // Discarded matches in between do not break a run.
                    if let Some(last) = tokens
                        .last_mut()
                        .filter(|last| last.collapsible && last.category == category)
                    {
                        last.occurrences += 1;
                        tracing::trace!(
                            %category,
                            occurrences = last.occurrences,
                            "collapsed repeat"
                        );
                    } else {
                        tokens.push(Token::collapsed(text, category, pos));
                    }
                }
            }

            pos += len;
        }

        tracing::debug!(tokens = tokens.len(), "scan finished");
        ScanOutcome {
            tokens,
            error: None,
        }
    }
}

fn compile(pattern: &str, config: &ScannerConfig) -> Result<Regex, regex::Error> {
    // Multi-line mode stays off so `^` only matches at the scan position.
    let mut builder = RegexBuilder::new(&format!("^(?:{pattern})"));
    builder
        .case_insensitive(config.case_insensitive)
        .unicode(config.unicode)
        .dot_matches_new_line(config.dot_matches_new_line)
        .multi_line(false);
    if let Some(limit) = config.size_limit {
        builder.size_limit(limit);
    }
    builder.build()
}

fn illegal_character(source: &str, offset: usize) -> LexError {
    let position = line_and_column(source, offset);
    let character = source[offset..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    LexError::IllegalCharacter {
        line: position.line,
        column: position.column,
        offset,
        character,
    }
}

/// The result of one [`Scanner::scan`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Tokens emitted before the scan ended.
    pub tokens: Vec<Token>,
    /// Set when the scan stopped at an unmatched character.
    pub error: Option<LexError>,
}

impl ScanOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Discard the partial tokens of a failed scan.
    pub fn into_result(self) -> Result<Vec<Token>, LexError> {
        match self.error {
            None => Ok(self.tokens),
            Some(error) => Err(error),
        }
    }

    /// Wrap the tokens of a successful scan in a cursor.
    pub fn into_stream(self) -> Result<Tokens, LexError> {
        self.into_result().map(Tokens::new)
    }
}
