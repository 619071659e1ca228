//! Declarator names qualified with `::`.

use crate::helpers::extract_helpers::*;
use crate::helpers::source_fixtures::*;
use crate::helpers::tag_assertions::*;
use cxxtags::{ScopeKind, TagKind};

#[test]
fn test_static_member_definition() {
    let result = extract_cpp(STATIC_MEMBER_DEFINITION);
    assert!(result.found);
    let tag = get_tag(&result.tags, "bar");
    assert_tag_kind(tag, TagKind::Member);
    assert_tag_scope(tag, Some("Foo"));
    assert_eq!(tag.scope_kind, Some(ScopeKind::Class));
    assert_eq!(result.scopes.depth(), 0);
}

#[test]
fn test_nested_qualifiers() {
    let result = extract_cpp(NESTED_MEMBER_DEFINITION);
    let tag = get_tag(&result.tags, "name");
    assert_tag_kind(tag, TagKind::Member);
    assert_tag_scope(tag, Some("ns::Outer"));
    assert_eq!(result.scopes.depth(), 0);
}

#[test]
fn test_qualified_type_is_not_a_scope() {
    let result = extract_cpp(QUALIFIED_TYPE);
    let tag = get_tag(&result.tags, "s");
    assert_tag_kind(tag, TagKind::Variable);
    assert_tag_scope(tag, None);
}

#[test]
fn test_qualified_type_and_name() {
    let result = extract_cpp("const std::string Config::name = \"x\";");
    let tag = get_tag(&result.tags, "name");
    assert_tag_scope(tag, Some("Config"));
    assert_tag_kind(tag, TagKind::Member);
}

#[test]
fn test_qualifiers_nest_under_enclosing_scope() {
    let result = extract_in_scope("int Foo::bar;", ScopeKind::Namespace);
    assert_tag_scope(get_tag(&result.tags, "bar"), Some("the_namespace::Foo"));
    assert_eq!(result.scopes.depth(), 1);
}

#[test]
fn test_each_declarator_has_own_qualifiers() {
    let result = extract_cpp("int Foo::a, Bar::b;");
    assert_tag_names(&result.tags, &["a", "b"]);
    assert_tag_scope(get_tag(&result.tags, "a"), Some("Foo"));
    assert_tag_scope(get_tag(&result.tags, "b"), Some("Bar"));
    assert_eq!(result.scopes.depth(), 0);
}

#[test]
fn test_qualified_name_without_type() {
    let result = extract_cpp("x::y;");
    assert!(!result.found);
    assert_no_tags(&result.tags);
    assert_eq!(result.scopes.depth(), 0);
}

#[test]
fn test_qualifier_after_keyword_is_rejected() {
    let result = extract_cpp("int ::global = 1;");
    assert!(!result.found);
    assert_no_tags(&result.tags);
}

#[test]
fn test_repeated_extraction_is_stable() {
    let first = extract_in_scope(NESTED_MEMBER_DEFINITION, ScopeKind::Namespace);
    let second = extract_with(
        NESTED_MEMBER_DEFINITION,
        cxxtags::FileContext::new(cxxtags::Language::Cpp, false),
        first.scopes,
    );
    assert_eq!(first.tags, second.tags);
    assert_eq!(second.scopes.depth(), 1);
}
