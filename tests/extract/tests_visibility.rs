//! Tag kinds and file-scope marking by storage keyword and enclosing scope.

use crate::helpers::extract_helpers::*;
use crate::helpers::tag_assertions::*;
use cxxtags::{
    FileContext, IndexerOptions, Language, ScopeKind, ScopeStack, TagCollector, TagKind,
    TagKinds, extract_statement,
};
use rstest::rstest;

#[test]
fn test_extern_declaration() {
    let result = extract_cpp("extern int counter;");
    let tag = get_tag(&result.tags, "counter");
    assert_tag_kind(tag, TagKind::ExternVariable);
    assert!(!tag.file_scope);
}

#[rstest]
#[case("static int counter;", false, true)]
#[case("static int counter;", true, false)]
#[case("int counter;", false, false)]
#[case("int counter;", true, false)]
fn test_namespace_level_file_scope(
    #[case] source: &str,
    #[case] is_header: bool,
    #[case] file_scope: bool,
) {
    let result = extract_with(source, FileContext::new(Language::Cpp, is_header), ScopeStack::new());
    assert_eq!(get_tag(&result.tags, "counter").file_scope, file_scope);
}

#[rstest]
#[case(ScopeKind::Class)]
#[case(ScopeKind::Struct)]
#[case(ScopeKind::Union)]
fn test_members_hidden_only_outside_headers(#[case] kind: ScopeKind) {
    let source = extract_in_scope("int count;", kind);
    let tag = get_tag(&source.tags, "count");
    assert_tag_kind(tag, TagKind::Member);
    assert!(tag.file_scope);

    let header = extract_in_header("int count;", kind);
    assert!(!get_tag(&header.tags, "count").file_scope);
}

#[test]
fn test_locals_are_always_file_scoped() {
    let result = extract_in_header("int i = 0;", ScopeKind::Function);
    let tag = get_tag(&result.tags, "i");
    assert_tag_kind(tag, TagKind::Local);
    assert!(tag.file_scope);
}

#[test]
fn test_qualified_definition_in_header_is_visible() {
    let result = extract_in_header("int Foo::bar = 1;", ScopeKind::Namespace);
    let tag = get_tag(&result.tags, "bar");
    assert_tag_kind(tag, TagKind::Member);
    assert!(!tag.file_scope);
}

#[test]
fn test_default_kinds_refuse_locals() {
    let file = FileContext::new(Language::Cpp, false);
    let mut scopes = scope_of(ScopeKind::Function);
    let mut tags = TagCollector::from_options(&IndexerOptions::default());

    let found = extract_statement("int i = 0;", &file, &mut scopes, &mut tags).unwrap();

    assert!(found);
    assert_no_tags(tags.tags());
}

#[test]
fn test_enabled_kinds_filter_externs() {
    let file = FileContext::new(Language::C, false);
    let mut scopes = ScopeStack::new();
    let mut tags = TagCollector::new(TagKinds::VARIABLE);

    assert!(extract_statement("extern int a;", &file, &mut scopes, &mut tags).unwrap());
    assert!(extract_statement("int b;", &file, &mut scopes, &mut tags).unwrap());

    assert_tag_names(tags.tags(), &["b"]);
}
