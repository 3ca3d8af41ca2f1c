/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Parse Tree
 * 
 * The concrete, unreduced derivation tree produced by the parser. Every
 * grammar production maps to exactly one node shape; keywords and symbols
 * consumed along the way stay in the tree as terminal leaves, in the order
 * they were matched. Downstream passes read labels, values and children
 * and never mutate a finished tree.
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

use crate::lexer::token::{Token, TokenKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write};

/// The label of a parse tree node.
///
/// One variant per grammar nonterminal, plus `Terminal` for leaves that
/// hold a consumed token. `as_str` gives the exact label downstream
/// consumers match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Class,
    ClassVarDec,
    /// A constructor, function or method declaration.
    Subroutine,
    ParameterList,
    SubroutineBody,
    VarDec,
    Statements,
    LetStatement,
    IfStatement,
    WhileStatement,
    DoStatement,
    ReturnStatement,
    Expression,
    Term,
    ExpressionList,
    Terminal(TokenKind),
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Class => "class",
            NodeKind::ClassVarDec => "classVarDec",
            NodeKind::Subroutine => "subroutine",
            NodeKind::ParameterList => "parameterList",
            NodeKind::SubroutineBody => "subroutineBody",
            NodeKind::VarDec => "varDec",
            NodeKind::Statements => "statements",
            NodeKind::LetStatement => "letStatement",
            NodeKind::IfStatement => "ifStatement",
            NodeKind::WhileStatement => "whileStatement",
            NodeKind::DoStatement => "doStatement",
            NodeKind::ReturnStatement => "returnStatement",
            NodeKind::Expression => "expression",
            NodeKind::Term => "term",
            NodeKind::ExpressionList => "expressionList",
            NodeKind::Terminal(kind) => kind.as_str(),
        }
    }

    /// Inverse of `as_str`.
    pub fn from_label(label: &str) -> Option<Self> {
        let kind = match label {
            "class" => NodeKind::Class,
            "classVarDec" => NodeKind::ClassVarDec,
            "subroutine" => NodeKind::Subroutine,
            "parameterList" => NodeKind::ParameterList,
            "subroutineBody" => NodeKind::SubroutineBody,
            "varDec" => NodeKind::VarDec,
            "statements" => NodeKind::Statements,
            "letStatement" => NodeKind::LetStatement,
            "ifStatement" => NodeKind::IfStatement,
            "whileStatement" => NodeKind::WhileStatement,
            "doStatement" => NodeKind::DoStatement,
            "returnStatement" => NodeKind::ReturnStatement,
            "expression" => NodeKind::Expression,
            "term" => NodeKind::Term,
            "expressionList" => NodeKind::ExpressionList,
            "keyword" => NodeKind::Terminal(TokenKind::Keyword),
            "identifier" => NodeKind::Terminal(TokenKind::Identifier),
            "symbol" => NodeKind::Terminal(TokenKind::Symbol),
            "integerConstant" => NodeKind::Terminal(TokenKind::IntegerConstant),
            "stringConstant" => NodeKind::Terminal(TokenKind::StringConstant),
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeKind::Terminal(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        NodeKind::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown node label `{label}`")))
    }
}

/// A node of the concrete parse tree.
///
/// Nonterminal nodes have an empty `value` and one child per grammar symbol
/// they matched. Terminal nodes are leaves holding a token's lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseTree {
    #[serde(rename = "label")]
    kind: NodeKind,

    #[serde(default)]
    value: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ParseTree>,
}

impl ParseTree {
    /// Creates an empty nonterminal node.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: String::new(),
            children: Vec::new(),
        }
    }

    /// Creates a terminal leaf for a consumed token.
    pub fn leaf(token: &Token) -> Self {
        Self {
            kind: NodeKind::Terminal(token.kind),
            value: token.value.clone(),
            children: Vec::new(),
        }
    }

    /// Appends a child. Children are never removed or reordered.
    pub fn push(&mut self, child: ParseTree) {
        self.children.push(child);
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn children(&self) -> &[ParseTree] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&ParseTree> {
        self.children.get(index)
    }

    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Returns `true` for a terminal leaf with this exact label and value.
    pub fn is_leaf(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == NodeKind::Terminal(kind) && self.value == value
    }

    /// Iterates over the terminal leaves in source order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Number of tokens this subtree accounts for.
    pub fn token_count(&self) -> usize {
        self.leaves().count()
    }

    /// Rebuilds the token stream this subtree was parsed from.
    pub fn tokens(&self) -> Vec<Token> {
        self.leaves()
            .filter_map(|leaf| match leaf.kind {
                NodeKind::Terminal(kind) => Some(Token::new(kind, leaf.value.clone())),
                _ => None,
            })
            .collect()
    }

    /// Renders the tree in the XML layout used by the course tooling:
    ///
    /// ```text
    /// <class>
    ///   <keyword> class </keyword>
    ///   <identifier> Main </identifier>
    /// ...
    /// </class>
    /// ```
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_xml(&mut out, 0);
        out
    }

    fn write_xml(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let label = self.label();

        if self.is_terminal() {
            let _ = writeln!(out, "{indent}<{label}> {} </{label}>", escape_xml(&self.value));
            return;
        }

        let _ = writeln!(out, "{indent}<{label}>");
        for child in &self.children {
            child.write_xml(out, depth + 1);
        }
        let _ = writeln!(out, "{indent}</{label}>");
    }

    fn write_text(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);

        if self.is_terminal() {
            writeln!(f, "{indent}{} {}", self.label(), self.value)?;
        } else {
            writeln!(f, "{indent}{}", self.label())?;
        }

        for child in &self.children {
            child.write_text(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ParseTree {
    /// Indented outline, one node per line:
    ///
    /// ```text
    /// class
    ///   keyword class
    ///   identifier Main
    ///   symbol {
    ///   symbol }
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, 0)
    }
}

/// Depth-first iterator over the terminal leaves of a tree.
pub struct Leaves<'a> {
    stack: Vec<&'a ParseTree>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a ParseTree;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.is_terminal() {
                return Some(node);
            }
            self.stack.extend(node.children.iter().rev());
        }
        None
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseTree {
        let mut term = ParseTree::new(NodeKind::Term);
        term.push(ParseTree::leaf(&Token::identifier("a")));

        let mut expr = ParseTree::new(NodeKind::Expression);
        expr.push(term);
        expr.push(ParseTree::leaf(&Token::symbol("<")));

        let mut rhs = ParseTree::new(NodeKind::Term);
        rhs.push(ParseTree::leaf(&Token::integer("3")));
        expr.push(rhs);
        expr
    }

    #[test]
    fn nonterminals_have_no_value() {
        let tree = sample();
        assert_eq!(tree.label(), "expression");
        assert_eq!(tree.value(), "");
        assert!(!tree.is_terminal());
        assert!(tree.child(1).unwrap().is_leaf(TokenKind::Symbol, "<"));
    }

    #[test]
    fn leaves_come_out_in_source_order() {
        let tree = sample();
        let values: Vec<&str> = tree.leaves().map(|l| l.value()).collect();
        assert_eq!(values, vec!["a", "<", "3"]);
        assert_eq!(tree.token_count(), 3);
        assert_eq!(
            tree.tokens(),
            vec![Token::identifier("a"), Token::symbol("<"), Token::integer("3")]
        );
    }

    #[test]
    fn labels_round_trip() {
        for label in ["class", "subroutine", "expressionList", "integerConstant"] {
            assert_eq!(NodeKind::from_label(label).unwrap().as_str(), label);
        }
        assert_eq!(NodeKind::from_label("subroutineDec"), None);
    }

    #[test]
    fn text_rendering_is_indented() {
        let expected = "expression\n  term\n    identifier a\n  symbol <\n  term\n    integerConstant 3\n";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn xml_rendering_escapes_symbols() {
        let xml = sample().to_xml();
        assert!(xml.starts_with("<expression>\n  <term>\n    <identifier> a </identifier>\n"));
        assert!(xml.contains("  <symbol> &lt; </symbol>\n"));
        assert!(xml.ends_with("</expression>\n"));
    }

    #[test]
    fn json_uses_label_value_children() {
        let mut list = ParseTree::new(NodeKind::ExpressionList);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json, serde_json::json!({ "label": "expressionList", "value": "" }));

        list.push(ParseTree::leaf(&Token::keyword("this")));
        let text = serde_json::to_string(&list).unwrap();
        let back: ParseTree = serde_json::from_str(&text).unwrap();
        assert_eq!(back, list);
    }
}
