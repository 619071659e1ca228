//! Plain declarations: one or more declarators after a type.

use crate::helpers::extract_helpers::*;
use crate::helpers::source_fixtures::*;
use crate::helpers::tag_assertions::*;
use cxxtags::{Position, ScopeKind, TagKind};
use rstest::rstest;

#[test]
fn test_simple_declaration() {
    let result = extract_cpp(SIMPLE_INT);
    assert!(result.found);
    assert_tag_names(&result.tags, &["x"]);
    let tag = get_tag(&result.tags, "x");
    assert_tag_kind(tag, TagKind::Variable);
    assert_tag_scope(tag, None);
    assert!(tag.type_ref.is_none());
}

#[test]
fn test_two_declarators() {
    let result = extract_cpp(TWO_INTS);
    assert!(result.found);
    assert_tag_names(&result.tags, &["x", "y"]);
}

#[test]
fn test_mixed_declarators() {
    let result = extract_cpp(MIXED_DECLARATORS);
    assert_tag_names(&result.tags, &["a", "b", "c"]);
}

#[rstest]
#[case("const char *names[] = {\"a\", \"b\"};", "names")]
#[case("std::map<std::string, int> index;", "index")]
#[case("int value {42};", "value")]
#[case("unsigned long long total = 0;", "total")]
#[case("const Widget &ref = other;", "ref")]
#[case("int grid[3][4];", "grid")]
#[case("int a[] = {", "a")]
fn test_single_declarator_shapes(#[case] source: &str, #[case] name: &str) {
    let result = extract_cpp(source);
    assert!(result.found, "{source}");
    assert_tag_names(&result.tags, &[name]);
}

#[rstest]
#[case("int /* w */ x;")]
#[case("int /** doc */ x; // trailing")]
#[case("/* leading */ int x;")]
fn test_comments_do_not_hide_declaration(#[case] source: &str) {
    let result = extract_cpp(source);
    assert!(result.found, "{source}");
    assert_tag_names(&result.tags, &["x"]);
}

#[test]
fn test_unclosed_opener_in_later_declarator() {
    // `(` has no partner so it stays a plain token in the lead-in
    let result = extract_cpp("int x, ( y;");
    assert_tag_names(&result.tags, &["x", "y"]);
}

#[test]
fn test_bit_field_members() {
    let result = extract_in_scope("unsigned int flags : 3, mode : 2;", ScopeKind::Struct);
    assert_tag_names(&result.tags, &["flags", "mode"]);
    assert_tag_kind(get_tag(&result.tags, "flags"), TagKind::Member);
}

#[test]
fn test_initializer_with_commas_in_call() {
    let result = extract_cpp("int x = max(1, 2), y;");
    assert_tag_names(&result.tags, &["x", "y"]);
}

#[test]
fn test_brace_initializer_ends_scan() {
    let result = extract_cpp("int a[] = {1, 2}, b;");
    assert_tag_names(&result.tags, &["a"]);
}

#[rstest]
#[case(SIMPLE_STRUCT, "struct", "X")]
#[case("union Value v;", "union", "Value")]
#[case("enum Color c;", "enum", "Color")]
#[case("class Widget w;", "class", "Widget")]
fn test_type_ref_recorded(#[case] source: &str, #[case] keyword: &str, #[case] name: &str) {
    let result = extract_cpp(source);
    assert_eq!(result.tags.len(), 1);
    assert_type_ref(&result.tags[0], keyword, name);
}

#[test]
fn test_type_ref_in_c() {
    let result = extract_c("struct point origin;");
    assert_type_ref(get_tag(&result.tags, "origin"), "struct", "point");
}

#[rstest]
#[case("struct X *y;")]
#[case("struct X y, z;")]
#[case("const struct X y;")]
#[case("Foo y;")]
fn test_type_ref_needs_exact_shape(#[case] source: &str) {
    let result = extract_cpp(source);
    assert!(result.found, "{source}");
    assert!(result.tags.iter().all(|t| t.type_ref.is_none()), "{source}");
}

#[test]
fn test_position_of_declarator_name() {
    let result = extract_cpp("static int\n    first,\n  second;");
    assert_eq!(get_tag(&result.tags, "first").position, Position::new(1, 4));
    assert_eq!(get_tag(&result.tags, "second").position, Position::new(2, 2));
}

#[test]
fn test_member_inside_union() {
    let result = extract_in_scope("float as_float;", ScopeKind::Union);
    let tag = get_tag(&result.tags, "as_float");
    assert_tag_kind(tag, TagKind::Member);
    assert_tag_scope(tag, Some("the_union"));
    assert_eq!(tag.scope_kind, Some(ScopeKind::Union));
}
