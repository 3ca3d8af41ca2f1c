/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Expression Parsing
 * 
 * Expressions, terms and argument lists. Operators all share one precedence
 * level: an expression is a flat, left-to-right chain of terms joined by
 * operators, exactly as written.
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
use crate::lexer::keywords::{BINARY_OPERATORS, KEYWORD_CONSTANTS, UNARY_OPERATORS};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::tree::{NodeKind, ParseTree};

impl Parser {
    /// ```text
    /// expression → term (op term)*
    /// op         → '+' | '-' | '*' | '/' | '&' | '|' | '<' | '>' | '='
    /// ```
    ///
    /// `1 + 2 * 3` yields one `expression` node with five children; no
    /// operator binds tighter than another.
    ///
    /// With `ParserConfig::allow_skip`, a lone `skip` keyword stands in for
    /// the whole expression.
    pub fn expression(&mut self) -> Result<ParseTree, ParseError> {
        self.descend(|p| {
            let mut tree = ParseTree::new(NodeKind::Expression);

            if p.config.allow_skip && p.check(TokenKind::Keyword, "skip") {
                tree.push(p.take()?);
                return Ok(tree);
            }

            tree.push(p.term()?);

            while p.check_any(TokenKind::Symbol, BINARY_OPERATORS) {
                tree.push(p.take()?);
                tree.push(p.term()?);
            }

            Ok(tree)
        })
    }

    /// ```text
    /// term → integerConstant | stringConstant | keywordConstant
    ///      | '(' expression ')'
    ///      | ('-' | '~') term
    ///      | identifier
    ///      | identifier '[' expression ']'
    ///      | identifier '(' expressionList ')'
    ///      | identifier '.' identifier '(' expressionList ')'
    /// ```
    ///
    /// The current token picks the alternative; for identifiers the token
    /// after it decides between a variable, an array element and a call.
    pub fn term(&mut self) -> Result<ParseTree, ParseError> {
        self.descend(|p| {
            let mut tree = ParseTree::new(NodeKind::Term);
            let token = p.current()?.clone();

            match token.kind {
                TokenKind::IntegerConstant | TokenKind::StringConstant => {
                    tree.push(p.take()?);
                }
                TokenKind::Keyword if KEYWORD_CONSTANTS.contains(&token.value.as_str()) => {
                    tree.push(p.take()?);
                }
                TokenKind::Symbol if token.value == "(" => {
                    tree.push(p.take()?);
                    tree.push(p.expression()?);
                    tree.push(p.terminal(TokenKind::Symbol, ")")?);
                }
                TokenKind::Symbol if UNARY_OPERATORS.contains(&token.value.as_str()) => {
                    tree.push(p.take()?);
                    tree.push(p.term()?);
                }
                TokenKind::Identifier => {
                    tree.push(p.take()?);
                    p.identifier_suffix(&mut tree)?;
                }
                TokenKind::Keyword | TokenKind::Symbol => {
                    return Err(ParseError::unexpected("term", &token));
                }
            }

            Ok(tree)
        })
    }

    /// Parses whatever follows an identifier inside a term: an index, a
    /// direct call, a qualified call, or nothing.
    fn identifier_suffix(&mut self, tree: &mut ParseTree) -> Result<(), ParseError> {
        if self.check(TokenKind::Symbol, "[") {
            tree.push(self.take()?);
            tree.push(self.expression()?);
            tree.push(self.terminal(TokenKind::Symbol, "]")?);
        } else if self.check(TokenKind::Symbol, "(") {
            self.arguments(tree)?;
        } else if self.check(TokenKind::Symbol, ".") {
            tree.push(self.take()?);
            tree.push(ParseTree::leaf(
                &self.expect_kind(TokenKind::Identifier, "subroutine name")?,
            ));
            self.arguments(tree)?;
        }

        Ok(())
    }

    /// `'(' expressionList ')'`, pushed flat onto the term.
    fn arguments(&mut self, tree: &mut ParseTree) -> Result<(), ParseError> {
        tree.push(self.terminal(TokenKind::Symbol, "(")?);
        tree.push(self.expression_list()?);
        tree.push(self.terminal(TokenKind::Symbol, ")")?);
        Ok(())
    }

    /// ```text
    /// expressionList → ( expression (',' expression)* )?
    /// ```
    ///
    /// An empty list is detected by the closing `)` and yields a node with
    /// no children.
    pub fn expression_list(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::ExpressionList);

        if self.check(TokenKind::Symbol, ")") {
            return Ok(tree);
        }

        tree.push(self.expression()?);

        while self.check(TokenKind::Symbol, ",") {
            tree.push(self.take()?);
            tree.push(self.expression()?);
        }

        Ok(tree)
    }
}
