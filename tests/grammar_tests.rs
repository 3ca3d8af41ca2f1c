/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
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

use indoc::indoc;
use jack_parser::{
    parse, parse_source, parse_with, tokenize, NodeKind, ParseError, ParseTree, Parser,
    ParserConfig, Token, TokenKind,
};

const SQUARE: &str = include_str!("fixtures/Square.jack");

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source).expect("fixture should lex")
}

/// Child labels, with terminals shown as `label"value"`.
fn shape(tree: &ParseTree) -> Vec<String> {
    tree.children()
        .iter()
        .map(|c| match c.kind() {
            NodeKind::Terminal(kind) => format!("{kind}\"{}\"", c.value()),
            other => other.to_string(),
        })
        .collect()
}

#[test]
fn empty_class() {
    let tree = parse(tokens("class Main { }")).unwrap();
    assert_eq!(tree.label(), "class");
    assert_eq!(
        shape(&tree),
        vec![r#"keyword"class""#, r#"identifier"Main""#, r#"symbol"{""#, r#"symbol"}""#]
    );
}

#[test]
fn class_with_static_variable() {
    let tree = parse(tokens("class A { static int a ; }")).unwrap();
    let dec = tree.child(3).unwrap();
    assert_eq!(dec.label(), "classVarDec");
    assert_eq!(
        shape(dec),
        vec![r#"keyword"static""#, r#"keyword"int""#, r#"identifier"a""#, r#"symbol";""#]
    );
}

#[test]
fn if_else_inside_statements() {
    let tree = Parser::new(tokens("if ( x ) { } else { }")).statements().unwrap();
    let stmt = tree.child(0).unwrap();
    assert_eq!(stmt.label(), "ifStatement");

    let empty_blocks = stmt
        .children()
        .iter()
        .filter(|c| c.label() == "statements" && c.children().is_empty())
        .count();
    assert_eq!(empty_blocks, 2);
    assert!(stmt.children().iter().any(|c| c.is_leaf(TokenKind::Keyword, "else")));
}

#[test]
fn flat_binary_expression() {
    let tree = Parser::new(tokens("1 + 2")).expression().unwrap();
    assert_eq!(shape(&tree), vec!["term", r#"symbol"+""#, "term"]);
    assert_eq!(shape(tree.child(0).unwrap()), vec![r#"integerConstant"1""#]);
    assert_eq!(shape(tree.child(2).unwrap()), vec![r#"integerConstant"2""#]);
}

#[test]
fn call_without_arguments() {
    let tree = Parser::new(tokens("foo ( )")).term().unwrap();
    assert_eq!(
        shape(&tree),
        vec![r#"identifier"foo""#, r#"symbol"(""#, "expressionList", r#"symbol")""#]
    );
    assert!(tree.child(2).unwrap().children().is_empty());
}

#[test]
fn let_missing_assignment() {
    let err = Parser::new(tokens("let x ;")).let_statement().unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "symbol:="));
    assert!(err.to_string().contains("symbol:="));
}

#[test]
fn whole_class_parses() {
    let tree = parse_source(SQUARE).unwrap();

    let members: Vec<&str> = tree.children()[3..tree.children().len() - 1]
        .iter()
        .map(|c| c.label())
        .collect();
    assert_eq!(
        members,
        vec!["classVarDec", "classVarDec", "subroutine", "subroutine", "subroutine", "subroutine", "subroutine"]
    );

    let move_up = tree.child(9).unwrap();
    assert_eq!(move_up.child(2).unwrap().value(), "moveUp");
    let body = move_up.child(6).unwrap();
    assert_eq!(
        shape(body),
        vec![r#"symbol"{""#, "varDec", "varDec", "statements", r#"symbol"}""#]
    );
    let statements: Vec<String> = shape(body.child(3).unwrap());
    assert_eq!(statements, vec!["ifStatement", "whileStatement", "returnStatement"]);
}

#[test]
fn xml_output() {
    let tree = parse(tokens("class P { method int get() { return x[0]; } }")).unwrap();

    assert_eq!(
        tree.to_xml(),
        indoc! {"
            <class>
              <keyword> class </keyword>
              <identifier> P </identifier>
              <symbol> { </symbol>
              <subroutine>
                <keyword> method </keyword>
                <keyword> int </keyword>
                <identifier> get </identifier>
                <symbol> ( </symbol>
                <parameterList>
                </parameterList>
                <symbol> ) </symbol>
                <subroutineBody>
                  <symbol> { </symbol>
                  <statements>
                    <returnStatement>
                      <keyword> return </keyword>
                      <expression>
                        <term>
                          <identifier> x </identifier>
                          <symbol> [ </symbol>
                          <expression>
                            <term>
                              <integerConstant> 0 </integerConstant>
                            </term>
                          </expression>
                          <symbol> ] </symbol>
                        </term>
                      </expression>
                      <symbol> ; </symbol>
                    </returnStatement>
                  </statements>
                  <symbol> } </symbol>
                </subroutineBody>
              </subroutine>
              <symbol> } </symbol>
            </class>
        "}
    );
}

#[test]
fn text_output() {
    let tree = parse(tokens("class Main { field char c; }")).unwrap();

    assert_eq!(
        tree.to_string(),
        indoc! {"
            class
              keyword class
              identifier Main
              symbol {
              classVarDec
                keyword field
                keyword char
                identifier c
                symbol ;
              symbol }
        "}
    );
}

#[test]
fn skip_stands_in_for_expressions_when_enabled() {
    let source = indoc! {"
        class Main {
            static int a ;
            function void myFunc ( int a ) {
                var int a ;
                let a = skip ;
                do skip ;
                if ( skip ) { } else { }
                while ( skip ) { }
                return skip ;
            }
        }
    "};
    let stream: Vec<Token> = tokens(source)
        .into_iter()
        .map(|t| if t.is(TokenKind::Identifier, "skip") { Token::keyword("skip") } else { t })
        .collect();

    assert!(parse(stream.clone()).is_err());

    let tree = parse_with(stream, ParserConfig::default().allow_skip(true)).unwrap();
    let body = tree.child(4).unwrap().child(6).unwrap();
    let statements = body.child(2).unwrap();
    assert_eq!(
        shape(statements),
        vec!["letStatement", "doStatement", "ifStatement", "whileStatement", "returnStatement"]
    );

    let skips = tree
        .leaves()
        .filter(|leaf| leaf.is_leaf(TokenKind::Keyword, "skip"))
        .count();
    assert_eq!(skips, 5);
}

#[test]
fn tree_round_trips_through_json() {
    let tree = parse_source(SQUARE).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: ParseTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn token_stream_from_json() {
    let stream = r#"[
        {"kind": "keyword", "value": "class"},
        {"kind": "identifier", "value": "Main"},
        {"kind": "symbol", "value": "{"},
        {"kind": "symbol", "value": "}"}
    ]"#;
    let tokens: Vec<Token> = serde_json::from_str(stream).unwrap();
    let tree = parse(tokens).unwrap();
    assert_eq!(tree.token_count(), 4);
}
