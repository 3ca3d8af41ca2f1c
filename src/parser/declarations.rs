/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Declaration Parsing
 * 
 * Program and class-level grammar: the class itself, static and field
 * declarations, subroutine signatures, parameter lists, subroutine bodies
 * and local variable declarations.
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
use crate::lexer::keywords::{CLASS_VAR_KINDS, PRIMITIVE_TYPES, SUBROUTINE_KINDS};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::tree::{NodeKind, ParseTree};

impl Parser {
    /// Parses a whole program: exactly one class.
    ///
    /// # Errors
    /// - `EmptyInput` when there are no tokens at all
    /// - `UnexpectedToken` when the first token is not `class`
    /// - `TrailingTokens` when tokens follow the class, unless
    ///   `ParserConfig::allow_trailing` is set
    pub fn program(&mut self) -> Result<ParseTree, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        tracing::debug!(tokens = self.tokens.len(), "parsing program");
        let class = self.class()?;

        if !self.config.allow_trailing {
            if let Some(extra) = self.peek() {
                return Err(ParseError::TrailingTokens {
                    found: extra.clone(),
                });
            }
        }

        tracing::debug!(
            class = class.child(1).map(|n| n.value()).unwrap_or_default(),
            consumed = self.current,
            "parsed program"
        );
        Ok(class)
    }

    /// ```text
    /// class → 'class' identifier '{' classVarDec* subroutineDec* '}'
    /// ```
    pub fn class(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::Class);

        tree.push(self.terminal(TokenKind::Keyword, "class")?);
        tree.push(ParseTree::leaf(&self.expect_kind(TokenKind::Identifier, "class name")?));
        tree.push(self.terminal(TokenKind::Symbol, "{")?);

        while self.check_any(TokenKind::Keyword, CLASS_VAR_KINDS) {
            tree.push(self.class_var_dec()?);
        }

        while self.check_any(TokenKind::Keyword, SUBROUTINE_KINDS) {
            tree.push(self.subroutine()?);
        }

        tree.push(self.terminal(TokenKind::Symbol, "}")?);
        Ok(tree)
    }

    /// ```text
    /// classVarDec → ('static' | 'field') type identifier (',' identifier)* ';'
    /// ```
    pub fn class_var_dec(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::ClassVarDec);

        if !self.check_any(TokenKind::Keyword, CLASS_VAR_KINDS) {
            return Err(self.mismatch("keyword:static or keyword:field"));
        }
        tree.push(self.take()?);

        self.declared_names(&mut tree)?;
        Ok(tree)
    }

    /// ```text
    /// subroutineDec → ('constructor' | 'function' | 'method') ('void' | type)
    ///                 identifier '(' parameterList ')' subroutineBody
    /// ```
    ///
    /// The node is labeled `subroutine`.
    pub fn subroutine(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::Subroutine);

        if !self.check_any(TokenKind::Keyword, SUBROUTINE_KINDS) {
            return Err(self.mismatch("keyword:constructor, keyword:function or keyword:method"));
        }
        tree.push(self.take()?);

        if self.check(TokenKind::Keyword, "void") {
            tree.push(self.take()?);
        } else {
            tree.push(self.type_name()?);
        }

        tree.push(ParseTree::leaf(&self.expect_kind(TokenKind::Identifier, "subroutine name")?));
        tree.push(self.terminal(TokenKind::Symbol, "(")?);
        tree.push(self.parameter_list()?);
        tree.push(self.terminal(TokenKind::Symbol, ")")?);
        tree.push(self.subroutine_body()?);
        Ok(tree)
    }

    /// ```text
    /// parameterList → ( type identifier (',' type identifier)* )?
    /// ```
    ///
    /// An empty list is detected by the closing `)` and yields a node with
    /// no children. The `)` itself is left for the caller.
    pub fn parameter_list(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::ParameterList);

        if self.check(TokenKind::Symbol, ")") {
            return Ok(tree);
        }

        tree.push(self.type_name()?);
        tree.push(ParseTree::leaf(&self.expect_kind(TokenKind::Identifier, "parameter name")?));

        while self.check(TokenKind::Symbol, ",") {
            tree.push(self.take()?);
            tree.push(self.type_name()?);
            tree.push(ParseTree::leaf(&self.expect_kind(TokenKind::Identifier, "parameter name")?));
        }

        Ok(tree)
    }

    /// ```text
    /// subroutineBody → '{' varDec* statements '}'
    /// ```
    pub fn subroutine_body(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::SubroutineBody);

        tree.push(self.terminal(TokenKind::Symbol, "{")?);

        while self.check(TokenKind::Keyword, "var") {
            tree.push(self.var_dec()?);
        }

        tree.push(self.statements()?);
        tree.push(self.terminal(TokenKind::Symbol, "}")?);
        Ok(tree)
    }

    /// ```text
    /// varDec → 'var' type identifier (',' identifier)* ';'
    /// ```
    pub fn var_dec(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new(NodeKind::VarDec);

        tree.push(self.terminal(TokenKind::Keyword, "var")?);
        self.declared_names(&mut tree)?;
        Ok(tree)
    }

    /// Parses the tail shared by `classVarDec` and `varDec`:
    ///
    /// ```text
    /// type identifier (',' identifier)* ';'
    /// ```
    fn declared_names(&mut self, tree: &mut ParseTree) -> Result<(), ParseError> {
        tree.push(self.type_name()?);
        tree.push(ParseTree::leaf(&self.expect_kind(TokenKind::Identifier, "variable name")?));

        while self.check(TokenKind::Symbol, ",") {
            tree.push(self.take()?);
            tree.push(ParseTree::leaf(&self.expect_kind(TokenKind::Identifier, "variable name")?));
        }

        tree.push(self.terminal(TokenKind::Symbol, ";")?);
        Ok(())
    }

    /// ```text
    /// type → 'int' | 'char' | 'boolean' | identifier
    /// ```
    ///
    /// Yields the matched leaf directly; `type` has no node of its own.
    fn type_name(&mut self) -> Result<ParseTree, ParseError> {
        if self.check_any(TokenKind::Keyword, PRIMITIVE_TYPES) {
            return self.take();
        }
        Ok(ParseTree::leaf(&self.expect_kind(TokenKind::Identifier, "type")?))
    }

    /// Builds the error for a token that cannot start the expected form.
    pub(crate) fn mismatch(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(found) => ParseError::unexpected(expected, found),
            None => ParseError::end_of_input(expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parser(source: &str) -> Parser {
        Parser::new(tokenize(source).unwrap())
    }

    fn labels(tree: &ParseTree) -> Vec<String> {
        tree.children()
            .iter()
            .map(|c| if c.is_terminal() { c.value() } else { c.label() })
            .map(String::from)
            .collect()
    }

    #[test]
    fn empty_class() {
        let tree = parser("class Main { }").program().unwrap();
        assert_eq!(tree.label(), "class");
        assert_eq!(labels(&tree), vec!["class", "Main", "{", "}"]);
        assert_eq!(tree.child(1).unwrap().label(), "identifier");
    }

    #[test]
    fn static_declaration() {
        let tree = parser("class A { static int a ; }").program().unwrap();
        let dec = tree.child(3).unwrap();
        assert_eq!(dec.label(), "classVarDec");
        assert_eq!(labels(dec), vec!["static", "int", "a", ";"]);
    }

    #[test]
    fn field_declaration_with_several_names() {
        let mut p = parser("field Point p, q, r;");
        let dec = p.class_var_dec().unwrap();
        assert_eq!(labels(&dec), vec!["field", "Point", "p", ",", "q", ",", "r", ";"]);
        assert_eq!(dec.child(1).unwrap().label(), "identifier");
        assert!(p.is_at_end());
    }

    #[test]
    fn members_in_grammar_order() {
        let tree = parser("class A { field int x; static boolean b; method void m() { } }")
            .program()
            .unwrap();
        let kinds: Vec<&str> = tree.children().iter().map(|c| c.label()).collect();
        assert_eq!(
            kinds,
            vec!["keyword", "identifier", "symbol", "classVarDec", "classVarDec", "subroutine", "symbol"]
        );
    }

    #[test]
    fn field_after_subroutine_is_rejected() {
        let err = parser("class A { function void f() { } field int x; }")
            .program()
            .unwrap_err();
        assert_eq!(err, ParseError::unexpected("symbol:}", &crate::Token::keyword("field")));
    }

    #[test]
    fn subroutine_shape() {
        let mut p = parser("function void main() { return; }");
        let sub = p.subroutine().unwrap();
        assert_eq!(
            labels(&sub),
            vec!["function", "void", "main", "(", "parameterList", ")", "subroutineBody"]
        );
        assert!(sub.child(4).unwrap().children().is_empty());
    }

    #[test]
    fn constructor_returns_class_type() {
        let mut p = parser("constructor Point new(int ax, int ay) { return this; }");
        let sub = p.subroutine().unwrap();
        assert_eq!(sub.child(1).unwrap().label(), "identifier");
        assert_eq!(labels(sub.child(4).unwrap()), vec!["int", "ax", ",", "int", "ay"]);
    }

    #[test]
    fn parameter_list_with_class_types() {
        let mut p = parser("Array a, char c)");
        let list = p.parameter_list().unwrap();
        assert_eq!(labels(&list), vec!["Array", "a", ",", "char", "c"]);
        assert!(p.check(TokenKind::Symbol, ")"));
    }

    #[test]
    fn body_with_locals() {
        let mut p = parser("{ var int i, j; var String s; let i = 0; }");
        let body = p.subroutine_body().unwrap();
        assert_eq!(labels(&body), vec!["{", "varDec", "varDec", "statements", "}"]);
        assert_eq!(labels(body.child(1).unwrap()), vec!["var", "int", "i", ",", "j", ";"]);
    }

    #[test]
    fn void_is_not_a_variable_type() {
        let err = parser("var void x;").var_dec().unwrap_err();
        assert_eq!(err.to_string(), "expected type, found keyword:void");
    }

    #[test]
    fn empty_input() {
        assert_eq!(Parser::new(Vec::new()).program(), Err(ParseError::EmptyInput));
    }

    #[test]
    fn program_must_start_with_class() {
        let err = parser("function void f() { }").program().unwrap_err();
        assert_eq!(err.to_string(), "expected keyword:class, found keyword:function");
    }

    #[test]
    fn trailing_tokens() {
        let err = parser("class A { } class B { }").program().unwrap_err();
        assert_eq!(err.code(), "E0004");

        let config = crate::ParserConfig::default().allow_trailing(true);
        let mut p = Parser::with_config(tokenize("class A { } }").unwrap(), config);
        assert!(p.program().is_ok());
        assert_eq!(p.remaining().len(), 1);
    }
}
