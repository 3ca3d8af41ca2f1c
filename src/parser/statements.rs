/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Statement Parsing
 * 
 * Statement sequences and the five statement forms: let, if, while, do and
 * return. A statement sequence ends, without consuming anything, at the
 * first token that does not open a statement.
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
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::tree::{NodeKind, ParseTree};

/// The statement a keyword introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatementKind {
    Let,
    If,
    While,
    Do,
    Return,
}

impl StatementKind {
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "let" => Some(Self::Let),
            "if" => Some(Self::If),
            "while" => Some(Self::While),
            "do" => Some(Self::Do),
            "return" => Some(Self::Return),
            _ => None,
        }
    }
}

impl Parser {
    /// ```text
    /// statements → statement*
    /// ```
    ///
    /// Dispatches on the current keyword and stops at the first token that
    /// opens no statement (normally the closing `}` of the block).
    pub fn statements(&mut self) -> Result<ParseTree, ParseError> {
        self.descend(|p| {
            let mut tree = ParseTree::new(NodeKind::Statements);

            while let Some(kind) = p.next_statement() {
                tracing::trace!(statement = ?kind, position = p.current, "statement");

                let statement = match kind {
                    StatementKind::Let => p.let_statement()?,
                    StatementKind::If => p.if_statement()?,
                    StatementKind::While => p.while_statement()?,
                    StatementKind::Do => p.do_statement()?,
                    StatementKind::Return => p.return_statement()?,
                };
                tree.push(statement);
            }

            Ok(tree)
        })
    }

    fn next_statement(&self) -> Option<StatementKind> {
        self.peek()
            .filter(|t| t.kind == TokenKind::Keyword)
            .and_then(|t| StatementKind::from_keyword(&t.value))
    }

    /// ```text
    /// letStatement → 'let' identifier ('[' expression ']')? '=' expression ';'
    /// ```
    pub fn let_statement(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::LetStatement);

        tree.push(self.terminal(TokenKind::Keyword, "let")?);
        tree.push(ParseTree::leaf(&self.expect_kind(TokenKind::Identifier, "variable name")?));

        if self.check(TokenKind::Symbol, "[") {
            tree.push(self.take()?);
            tree.push(self.expression()?);
            tree.push(self.terminal(TokenKind::Symbol, "]")?);
        }

        tree.push(self.terminal(TokenKind::Symbol, "=")?);
        tree.push(self.expression()?);
        tree.push(self.terminal(TokenKind::Symbol, ";")?);
        Ok(tree)
    }

    /// ```text
    /// ifStatement → 'if' '(' expression ')' '{' statements '}'
    ///               ('else' '{' statements '}')?
    /// ```
    pub fn if_statement(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::IfStatement);

        tree.push(self.terminal(TokenKind::Keyword, "if")?);
        self.condition(&mut tree)?;
        self.block(&mut tree)?;

        if self.check(TokenKind::Keyword, "else") {
            tree.push(self.take()?);
            self.block(&mut tree)?;
        }

        Ok(tree)
    }

    /// ```text
    /// whileStatement → 'while' '(' expression ')' '{' statements '}'
    /// ```
    pub fn while_statement(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::WhileStatement);

        tree.push(self.terminal(TokenKind::Keyword, "while")?);
        self.condition(&mut tree)?;
        self.block(&mut tree)?;
        Ok(tree)
    }

    /// ```text
    /// doStatement → 'do' expression ';'
    /// ```
    ///
    /// The expression is meant to be a subroutine call, but any expression
    /// is accepted here; later passes enforce the call shape.
    pub fn do_statement(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::DoStatement);

        tree.push(self.terminal(TokenKind::Keyword, "do")?);
        tree.push(self.expression()?);
        tree.push(self.terminal(TokenKind::Symbol, ";")?);
        Ok(tree)
    }

    /// ```text
    /// returnStatement → 'return' expression? ';'
    /// ```
    pub fn return_statement(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::ReturnStatement);

        tree.push(self.terminal(TokenKind::Keyword, "return")?);

        if !self.check(TokenKind::Symbol, ";") {
            tree.push(self.expression()?);
        }

        tree.push(self.terminal(TokenKind::Symbol, ";")?);
        Ok(tree)
    }

    /// `'(' expression ')'`, pushed flat onto the statement node.
    fn condition(&mut self, tree: &mut ParseTree) -> Result<(), ParseError> {
        tree.push(self.terminal(TokenKind::Symbol, "(")?);
        tree.push(self.expression()?);
        tree.push(self.terminal(TokenKind::Symbol, ")")?);
        Ok(())
    }

    /// `'{' statements '}'`, pushed flat onto the statement node.
    fn block(&mut self, tree: &mut ParseTree) -> Result<(), ParseError> {
        tree.push(self.terminal(TokenKind::Symbol, "{")?);
        tree.push(self.statements()?);
        tree.push(self.terminal(TokenKind::Symbol, "}")?);
        Ok(())
    }
}
