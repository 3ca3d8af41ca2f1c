/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Parser Helpers
 * 
 * Cursor primitives shared by every grammar procedure: reading the current
 * token, non-consuming lookahead, consuming matches that fail with a syntax
 * error, and the nesting guard.
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

use crate::error::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::tree::ParseTree;

impl Parser {
    /// Returns the token at the cursor.
    ///
    /// # Errors
    /// `UnexpectedEnd` if every token has been consumed.
    pub fn current(&self) -> Result<&Token, ParseError> {
        self.tokens
            .get(self.current)
            .ok_or_else(|| ParseError::end_of_input("another token"))
    }

    /// Returns the token at the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Returns the token after the current one without consuming anything.
    pub fn peek_next(&self) -> Option<&Token> {
        self.tokens.get(self.current + 1)
    }

    /// Moves the cursor forward by one.
    ///
    /// Only called after the current token has been matched.
    pub fn advance(&mut self) {
        self.current += 1;
    }

    /// Checks the current token's kind and value without consuming it.
    ///
    /// Never fails: returns `false` at end of input.
    pub fn check(&self, kind: TokenKind, value: &str) -> bool {
        self.peek().is_some_and(|t| t.is(kind, value))
    }

    /// Like `check`, but accepts any value in `values`.
    pub fn check_any(&self, kind: TokenKind, values: &[&str]) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == kind && values.contains(&t.value.as_str()))
    }

    /// Checks only the current token's kind.
    pub fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Consumes the current token if it has the given kind and value.
    ///
    /// # Errors
    /// - `UnexpectedToken` naming the expected `kind:value` and the token found
    /// - `UnexpectedEnd` if the input is exhausted
    pub fn expect(&mut self, kind: TokenKind, value: &str) -> Result<Token, ParseError> {
        self.expect_where(&format!("{kind}:{value}"), |t| t.is(kind, value))
    }

    /// Consumes the current token if it has the given kind, whatever its value.
    ///
    /// `what` describes the expectation in the error message.
    pub fn expect_kind(&mut self, kind: TokenKind, what: &str) -> Result<Token, ParseError> {
        self.expect_where(what, |t| t.kind == kind)
    }

    fn expect_where(
        &mut self,
        expected: &str,
        accept: impl Fn(&Token) -> bool,
    ) -> Result<Token, ParseError> {
        let token = match self.peek() {
            Some(token) if accept(token) => token.clone(),
            Some(token) => return Err(ParseError::unexpected(expected, token)),
            None => return Err(ParseError::end_of_input(expected)),
        };
        self.advance();
        Ok(token)
    }

    /// `expect` that returns the matched token as a terminal leaf.
    pub(crate) fn terminal(&mut self, kind: TokenKind, value: &str) -> Result<ParseTree, ParseError> {
        Ok(ParseTree::leaf(&self.expect(kind, value)?))
    }

    /// Consumes whatever token is current and returns it as a leaf.
    ///
    /// The caller has already decided, by lookahead, that the token belongs
    /// to the production being parsed.
    pub(crate) fn take(&mut self) -> Result<ParseTree, ParseError> {
        let leaf = ParseTree::leaf(self.current()?);
        self.advance();
        Ok(leaf)
    }

    /// Runs `f` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` once `ParserConfig::max_depth` levels are open.
    pub(crate) fn descend<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                span: self.peek().map(|t| t.span).unwrap_or_default(),
            });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> Parser {
        Parser::new(vec![Token::keyword("let"), Token::identifier("x")])
    }

    #[test]
    fn check_does_not_consume() {
        let p = parser();
        assert!(p.check(TokenKind::Keyword, "let"));
        assert!(!p.check(TokenKind::Identifier, "let"));
        assert!(p.check_any(TokenKind::Keyword, &["do", "let"]));
        assert_eq!(p.position(), 0);
    }

    #[test]
    fn expect_advances_on_match() {
        let mut p = parser();
        let token = p.expect(TokenKind::Keyword, "let").unwrap();
        assert_eq!(token, Token::keyword("let"));
        assert_eq!(p.position(), 1);
    }

    #[test]
    fn expect_mismatch_reports_both_sides() {
        let mut p = parser();
        let err = p.expect(TokenKind::Keyword, "do").unwrap_err();
        assert_eq!(err.to_string(), "expected keyword:do, found keyword:let");
        assert_eq!(p.position(), 0);
    }

    #[test]
    fn exhausted_cursor_is_a_defined_failure() {
        let mut p = parser();
        p.advance();
        p.advance();
        assert!(p.is_at_end());
        assert!(!p.check(TokenKind::Symbol, ";"));
        assert!(matches!(p.current(), Err(ParseError::UnexpectedEnd { .. })));
        assert_eq!(
            p.expect(TokenKind::Symbol, ";"),
            Err(ParseError::end_of_input("symbol:;"))
        );
    }

    #[test]
    fn descend_enforces_the_limit() {
        let mut p = Parser::with_config(Vec::new(), crate::ParserConfig::default().max_depth(2));
        let ok = p.descend(|p| p.descend(|_| Ok(())));
        assert!(ok.is_ok());
        let err = p.descend(|p| p.descend(|p| p.descend(|_| Ok(()))));
        assert!(matches!(err, Err(ParseError::NestingTooDeep { limit: 2, .. })));
        assert_eq!(p.depth, 0);
    }
}
