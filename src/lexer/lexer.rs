/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Lexer
 * 
 * Converts Jack source text into the flat token stream consumed by the
 * parser. Whitespace and comments are discarded; every emitted token
 * carries the line and column where it starts.
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

use crate::error::LexError;
use crate::lexer::keywords::{is_keyword, is_symbol};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Largest value an integer constant may hold.
pub const MAX_INTEGER: u32 = 32767;

pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    line_start: usize,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new lexer instance from raw source code.
    ///
    /// The cursor starts at position `0` on line `1` with an empty token
    /// output buffer.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// Results are written into `self.tokens`. Scanning stops at the first
    /// lexical error.
    pub fn scan_tokens(&mut self) -> Result<(), LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        Ok(())
    }

    /// Scans a single token, or skips a run of whitespace or a comment.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.span_here();
        let ch = self.advance();

        match ch {
            ' ' | '\r' | '\t' => {}
            '\n' => self.newline(),

            '/' if self.peek() == '/' => {
                while self.peek() != '\n' && !self.is_at_end() {
                    self.advance();
                }
            }
            '/' if self.peek() == '*' => {
                self.advance();
                self.block_comment(start)?;
            }

            '"' => self.string(start)?,
            '0'..='9' => self.integer(start)?,
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(start),

            c if is_symbol(c) => self.push(TokenKind::Symbol, c.to_string(), start),

            other => return Err(LexError::UnexpectedCharacter { ch: other, span: start }),
        }

        Ok(())
    }

    /// Scans a string constant. The opening quote is already consumed.
    ///
    /// A string may not span lines; reaching a newline or the end of input
    /// before the closing quote is an error.
    fn string(&mut self, start: Span) -> Result<(), LexError> {
        let from = self.current;

        while self.peek() != '"' {
            if self.is_at_end() || self.peek() == '\n' {
                return Err(LexError::UnterminatedString { span: start });
            }
            self.advance();
        }

        let value: String = self.chars[from..self.current].iter().collect();
        self.advance(); // closing quote

        self.push(TokenKind::StringConstant, value, start);
        Ok(())
    }

    /// Scans a decimal integer constant and checks its range.
    fn integer(&mut self, start: Span) -> Result<(), LexError> {
        let from = self.current - 1;

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let value: String = self.chars[from..self.current].iter().collect();
        match value.parse::<u32>() {
            Ok(n) if n <= MAX_INTEGER => {
                self.push(TokenKind::IntegerConstant, value, start);
                Ok(())
            }
            _ => Err(LexError::IntegerOutOfRange { value, span: start }),
        }
    }

    /// Scans an identifier or keyword.
    fn identifier(&mut self, start: Span) {
        let from = self.current - 1;

        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text: String = self.chars[from..self.current].iter().collect();
        let kind = if is_keyword(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        self.push(kind, text, start);
    }

    /// Skips a block comment delimited by `/* ... */`. This also covers
    /// `/** ... */` documentation comments.
    fn block_comment(&mut self, start: Span) -> Result<(), LexError> {
        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return Ok(());
            }

            if self.advance() == '\n' {
                self.newline();
            }
        }

        Err(LexError::UnterminatedComment { span: start })
    }

    fn push(&mut self, kind: TokenKind, value: String, span: Span) {
        self.tokens.push(Token { kind, value, span });
    }

    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }

    fn span_here(&self) -> Span {
        Span::new(self.line, self.current - self.line_start)
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character, or `'\0'` at end of input.
    fn peek(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.chars.get(self.current + 1).copied().unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

/// Tokenizes a whole source string.
///
/// # Example
/// ```text
/// let tokens = tokenize("class Main { }")?;
/// let tree = parse(tokens)?;
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens()?;
    tracing::debug!(tokens = lexer.tokens.len(), "lexed source");
    Ok(lexer.tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(source: &str) -> Vec<String> {
        tokenize(source).unwrap().into_iter().map(|t| t.value).collect()
    }

    #[test]
    fn classifies_words() {
        let tokens = tokenize("class Main").unwrap();
        assert_eq!(tokens, vec![Token::keyword("class"), Token::identifier("Main")]);
    }

    #[test]
    fn symbols_are_single_characters() {
        assert_eq!(values("a<=b"), vec!["a", "<", "=", "b"]);
        assert_eq!(values("x[i].y();"), vec!["x", "[", "i", "]", ".", "y", "(", ")", ";"]);
    }

    #[test]
    fn skips_all_comment_forms() {
        let source = "// line\nlet /* block */ x /** doc\n spanning */ = 1;";
        assert_eq!(values(source), vec!["let", "x", "=", "1", ";"]);
    }

    #[test]
    fn string_value_drops_quotes() {
        let tokens = tokenize(r#"do Output.printString("Hi there");"#).unwrap();
        assert_eq!(tokens[5], Token::string("Hi there"));
    }

    #[test]
    fn tracks_line_and_column() {
        let tokens = tokenize("class Main {\n  field int x;\n}").unwrap();
        assert_eq!(tokens[0].span, Span::new(1, 0));
        assert_eq!(tokens[2].span, Span::new(1, 11));
        assert_eq!(tokens[3].span, Span::new(2, 2));
        assert_eq!(tokens[5].span, Span::new(2, 12));
        assert_eq!(tokens[7].span, Span::new(3, 0));
    }

    #[test]
    fn integer_range_is_enforced() {
        assert_eq!(values("32767"), vec!["32767"]);
        let err = tokenize("32768").unwrap_err();
        assert!(matches!(err, LexError::IntegerOutOfRange { ref value, .. } if value == "32768"));
    }

    #[test]
    fn unterminated_string_stops_at_newline() {
        let err = tokenize("let s = \"abc\n\";").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { span: Span::new(1, 8) });
    }

    #[test]
    fn unterminated_comment_is_reported_at_its_start() {
        let err = tokenize("class /* never closed").unwrap_err();
        assert_eq!(err, LexError::UnterminatedComment { span: Span::new(1, 6) });
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = tokenize("let x = 1 % 2;").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { ch: '%', .. }));
    }
}
