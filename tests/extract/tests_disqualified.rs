//! Statements that must not yield variables.

use crate::helpers::extract_helpers::*;
use crate::helpers::source_fixtures::*;
use crate::helpers::tag_assertions::*;
use cxxtags::parser::{GroupKind, Token};
use cxxtags::{
    ExtractionContext, FileContext, KeywordState, Language, Position, ScopeStack, TagCollector,
    TagKinds, TextRange, TextSize, TokenChain, TokenKind, extract_variable_declarations, tokenize,
};
use rstest::rstest;

#[rstest]
#[case::assignment("x = 5;")]
#[case::call(PLAIN_CALL)]
#[case::member_access("a.b = 3;")]
#[case::pointer_member("p->x = 1;")]
#[case::stream("std::cout << x;")]
#[case::comparison("a < b;")]
#[case::logical_and("a && b;")]
#[case::prototype("void f(int a);")]
#[case::operator_overload("bool operator==(const Foo &) const;")]
#[case::leading_string("\"text\" x;")]
#[case::leading_star("*p = 3;")]
#[case::unmatched_closer("int x ) ;")]
#[case::variadic_macro("LOG(...) x;")]
fn test_statement_is_rejected(#[case] source: &str) {
    let result = extract_cpp(source);
    assert!(!result.found, "{source}");
    assert_no_tags(&result.tags);
    assert_eq!(result.scopes.depth(), 0);
}

#[test]
fn test_nothing_after_type() {
    let result = extract_cpp("int;");
    assert!(!result.found);
}

#[test]
fn test_missing_terminator() {
    let result = extract_cpp("int x");
    assert!(!result.found);
}

fn run(chain: &mut TokenChain) -> (bool, TagCollector) {
    let file = FileContext::new(Language::Cpp, false);
    let mut scopes = ScopeStack::new();
    let mut tags = TagCollector::new(TagKinds::all());
    let mut cx = ExtractionContext::new(&file, KeywordState::empty(), &mut scopes, &mut tags);
    let found = extract_variable_declarations(chain, &mut cx);
    (found, tags)
}

#[test]
fn test_folded_angle_group_rejects_prefix() {
    let mut chain = tokenize("std::vector<int> v;", Language::Cpp).unwrap();
    assert!(chain.fold_angle_brackets(3));

    let (found, tags) = run(&mut chain);
    assert!(!found);
    assert_no_tags(tags.tags());
}

fn token(kind: TokenKind, text: &str) -> Token {
    Token::new(
        kind,
        text,
        TextRange::empty(TextSize::from(0)),
        Position::default(),
    )
}

#[test]
fn test_brace_group_rejects_prefix() {
    // `int {0} x;` with the braces already folded
    let mut chain = TokenChain::new();
    chain.push(token(TokenKind::Keyword(cxxtags::Keyword::Int), "int"));
    let open = chain.alloc(token(TokenKind::OpeningBrace, "{"));
    let zero = chain.alloc(token(TokenKind::Number, "0"));
    let close = chain.alloc(token(TokenKind::ClosingBrace, "}"));
    chain.push_group(
        token(TokenKind::Group(GroupKind::Brace), "{ 0 }"),
        vec![open, zero, close],
    );
    chain.push(token(TokenKind::Identifier, "x"));
    chain.push(token(TokenKind::Semicolon, ";"));

    let (found, tags) = run(&mut chain);
    assert!(!found);
    assert_no_tags(tags.tags());
}

#[test]
fn test_rejection_after_first_declarator_keeps_found() {
    // the second declarator has no name, the first still counts
    let result = extract_cpp("int a, 3;");
    assert!(result.found);
    assert_tag_names(&result.tags, &["a"]);
}
