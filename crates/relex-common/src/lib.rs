//! Common data structures for relex.
//! relex 的公共数据结构。
//!
//! This crate provides the source-location types used across the workspace:
//! 本 crate 提供整个工作区共用的源码位置类型：
//! - `Span`: byte ranges in the scanned source
//! - `LineCol`: the line/column pair reported for lexing errors

mod position;
mod span;

pub use position::{LineCol, line_and_column};
pub use span::Span;
