/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Error Types
 * 
 * Every failure the front end can report: lexical errors raised while
 * scanning source text and syntax errors raised by the parser. Each error
 * carries a stable code, an optional source span and optional help text
 * so the diagnostic printer can render it.
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

use crate::lexer::token::Token;
use crate::span::Span;
use thiserror::Error;

/// Result type for front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A syntax error. Parsing stops at the first one; there is no recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no tokens to parse")]
    EmptyInput,

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: Token },

    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: String },

    #[error("unexpected {found} after the end of the class")]
    TrailingTokens { found: Token },

    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },
}

impl ParseError {
    pub fn unexpected(expected: impl Into<String>, found: &Token) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.clone(),
        }
    }

    pub fn end_of_input(expected: impl Into<String>) -> Self {
        Self::UnexpectedEnd {
            expected: expected.into(),
        }
    }

    /// Stable error code (E0001, E0002, …)
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "E0001",
            ParseError::UnexpectedToken { .. } => "E0002",
            ParseError::UnexpectedEnd { .. } => "E0003",
            ParseError::TrailingTokens { .. } => "E0004",
            ParseError::NestingTooDeep { .. } => "E0005",
        }
    }

    /// Primary source location, when the offending token has one.
    pub fn span(&self) -> Option<Span> {
        let span = match self {
            ParseError::UnexpectedToken { found, .. } | ParseError::TrailingTokens { found } => {
                found.span
            }
            ParseError::NestingTooDeep { span, .. } => *span,
            ParseError::EmptyInput | ParseError::UnexpectedEnd { .. } => return None,
        };
        span.is_known().then_some(span)
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyInput => Some("a program must contain a single class declaration"),
            ParseError::UnexpectedEnd { .. } => Some("the input ends before the class is closed"),
            ParseError::TrailingTokens { .. } => {
                Some("a file holds exactly one class; remove the tokens after its closing `}`")
            }
            ParseError::NestingTooDeep { .. } => {
                Some("raise the limit with --max-depth or simplify the expression")
            }
            ParseError::UnexpectedToken { .. } => None,
        }
    }
}

/// A lexical error raised while scanning source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string constant")]
    UnterminatedString { span: Span },

    #[error("unterminated block comment")]
    UnterminatedComment { span: Span },

    #[error("integer constant {value} is out of range")]
    IntegerOutOfRange { value: String, span: Span },

    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter { ch: char, span: Span },
}

impl LexError {
    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnterminatedString { .. } => "E0101",
            LexError::UnterminatedComment { .. } => "E0102",
            LexError::IntegerOutOfRange { .. } => "E0103",
            LexError::UnexpectedCharacter { .. } => "E0104",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::UnterminatedComment { span }
            | LexError::IntegerOutOfRange { span, .. }
            | LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnterminatedString { .. } => {
                Some("string constants end with `\"` on the same line")
            }
            LexError::IntegerOutOfRange { .. } => Some("integer constants range from 0 to 32767"),
            LexError::UnterminatedComment { .. } | LexError::UnexpectedCharacter { .. } => None,
        }
    }
}

/// Any error produced between source text and a finished parse tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Lex(e) => e.code(),
            Error::Parse(e) => e.code(),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(e) => Some(e.span()),
            Error::Parse(e) => e.span(),
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            Error::Lex(e) => e.help(),
            Error::Parse(e) => e.help(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_token_names_both_sides() {
        let err = ParseError::unexpected("symbol:=", &Token::symbol(";"));
        assert_eq!(err.to_string(), "expected symbol:=, found symbol:;");
        assert_eq!(err.code(), "E0002");
    }

    #[test]
    fn span_is_hidden_when_unknown() {
        let err = ParseError::unexpected("identifier", &Token::symbol("{"));
        assert_eq!(err.span(), None);

        let placed = Token::symbol("{").at(Span::new(2, 5));
        let err = ParseError::unexpected("identifier", &placed);
        assert_eq!(err.span(), Some(Span::new(2, 5)));
    }

    #[test]
    fn wrapper_is_transparent() {
        let err: Error = ParseError::EmptyInput.into();
        assert_eq!(err.to_string(), "no tokens to parse");
        assert_eq!(err.code(), "E0001");
    }
}
