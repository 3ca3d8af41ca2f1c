/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Token Definitions
 * 
 * Lexical token categories and the token record shared by the lexer, the
 * parser and any external tool that hands the parser a pre-built stream.
 * 
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the PAWX programming language project.
 * 
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the **category of a lexical token** in the Jack language.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → Parse Tree
/// ```
///
/// The string form of each kind (`keyword`, `integerConstant`, ...) is the
/// label a terminal node carries in the parse tree, so it is part of the
/// tree's output format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// A reserved word such as `class`, `let` or `true`.
    ///
    /// Keyword detection is handled by `keywords.rs`.
    Keyword,

    /// A user-defined name: class, subroutine and variable names.
    Identifier,

    /// A single punctuation or operator character.
    ///
    /// Includes:
    /// - Structural symbols: `{`, `}`, `(`, `)`, `[`, `]`, `.`, `,`, `;`
    /// - Operators: `+`, `-`, `*`, `/`, `&`, `|`, `<`, `>`, `=`, `~`
    Symbol,

    /// A decimal integer literal in the range `0..=32767`.
    IntegerConstant,

    /// A double-quoted string literal. The value excludes the quotes.
    StringConstant,
}

impl TokenKind {
    /// The label used for this kind in diagnostics and parse trees.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Symbol => "symbol",
            TokenKind::IntegerConstant => "integerConstant",
            TokenKind::StringConstant => "stringConstant",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Represents a **single lexical token**.
///
/// A `Token` consists of:
/// - A token category (`TokenKind`)
/// - The literal lexeme (`value`)
/// - The source position for error reporting (`span`)
///
/// # Example Tokens
/// ```text
/// class  →  { kind: Keyword,         value: "class" }
/// Main   →  { kind: Identifier,      value: "Main"  }
/// 42     →  { kind: IntegerConstant, value: "42"    }
/// ```
///
/// Two tokens are equal when their kind and value match. The span is
/// metadata only and never takes part in grammar decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub value: String,

    /// Where the token appeared, when known.
    #[serde(default, skip_serializing_if = "is_unknown")]
    pub span: Span,
}

fn is_unknown(span: &Span) -> bool {
    !span.is_known()
}

impl Token {
    /// Builds a token with no source position.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            span: Span::default(),
        }
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, value)
    }

    pub fn identifier(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, value)
    }

    pub fn symbol(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Symbol, value)
    }

    pub fn integer(value: impl Into<String>) -> Self {
        Self::new(TokenKind::IntegerConstant, value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(TokenKind::StringConstant, value)
    }

    /// Attaches a source position, builder-style.
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns `true` if this token has the given kind and value.
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    /// Returns `true` if this is a symbol that appears in `set`.
    pub fn is_symbol_in(&self, set: &[&str]) -> bool {
        self.kind == TokenKind::Symbol && set.contains(&self.value.as_str())
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    /// Formats a token as `kind:value`, the form used in syntax errors:
    /// ```text
    /// expected symbol:=, found symbol:;
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}
