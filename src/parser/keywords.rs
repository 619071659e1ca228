//! C and C++ keyword table.
//!
//! Keywords are looked up per language: C++-only spellings such as `class`
//! or `namespace` lex as plain identifiers in C mode.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Source language of the file being indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    C,
    #[default]
    Cpp,
}

impl Language {
    pub fn is_cpp(self) -> bool {
        self == Language::Cpp
    }
}

/// A reserved word of C or C++
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Alignas,
    Alignof,
    Auto,
    Bool,
    Break,
    Case,
    Catch,
    Char,
    Char16T,
    Char32T,
    Class,
    Const,
    Consteval,
    Constexpr,
    Constinit,
    ConstCast,
    Continue,
    Decltype,
    Default,
    Delete,
    Do,
    Double,
    DynamicCast,
    Else,
    Enum,
    Explicit,
    Export,
    Extern,
    False,
    Float,
    For,
    Friend,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Mutable,
    Namespace,
    New,
    Noexcept,
    Nullptr,
    Operator,
    Private,
    Protected,
    Public,
    Register,
    ReinterpretCast,
    Restrict,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    StaticAssert,
    StaticCast,
    Struct,
    Switch,
    Template,
    This,
    ThreadLocal,
    Throw,
    True,
    Try,
    Typedef,
    Typeid,
    Typename,
    Union,
    Unsigned,
    Using,
    Virtual,
    Void,
    Volatile,
    WcharT,
    While,
}

/// Which languages reserve a spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reserved {
    Both,
    COnly,
    CppOnly,
}

impl Reserved {
    fn includes(self, language: Language) -> bool {
        match self {
            Reserved::Both => true,
            Reserved::COnly => language == Language::C,
            Reserved::CppOnly => language == Language::Cpp,
        }
    }
}

const KEYWORDS: &[(&str, Keyword, Reserved)] = &[
    ("alignas", Keyword::Alignas, Reserved::CppOnly),
    ("alignof", Keyword::Alignof, Reserved::CppOnly),
    ("auto", Keyword::Auto, Reserved::Both),
    ("bool", Keyword::Bool, Reserved::CppOnly),
    ("_Bool", Keyword::Bool, Reserved::COnly),
    ("break", Keyword::Break, Reserved::Both),
    ("case", Keyword::Case, Reserved::Both),
    ("catch", Keyword::Catch, Reserved::CppOnly),
    ("char", Keyword::Char, Reserved::Both),
    ("char16_t", Keyword::Char16T, Reserved::CppOnly),
    ("char32_t", Keyword::Char32T, Reserved::CppOnly),
    ("class", Keyword::Class, Reserved::CppOnly),
    ("const", Keyword::Const, Reserved::Both),
    ("consteval", Keyword::Consteval, Reserved::CppOnly),
    ("constexpr", Keyword::Constexpr, Reserved::CppOnly),
    ("constinit", Keyword::Constinit, Reserved::CppOnly),
    ("const_cast", Keyword::ConstCast, Reserved::CppOnly),
    ("continue", Keyword::Continue, Reserved::Both),
    ("decltype", Keyword::Decltype, Reserved::CppOnly),
    ("default", Keyword::Default, Reserved::Both),
    ("delete", Keyword::Delete, Reserved::CppOnly),
    ("do", Keyword::Do, Reserved::Both),
    ("double", Keyword::Double, Reserved::Both),
    ("dynamic_cast", Keyword::DynamicCast, Reserved::CppOnly),
    ("else", Keyword::Else, Reserved::Both),
    ("enum", Keyword::Enum, Reserved::Both),
    ("explicit", Keyword::Explicit, Reserved::CppOnly),
    ("export", Keyword::Export, Reserved::CppOnly),
    ("extern", Keyword::Extern, Reserved::Both),
    ("false", Keyword::False, Reserved::CppOnly),
    ("float", Keyword::Float, Reserved::Both),
    ("for", Keyword::For, Reserved::Both),
    ("friend", Keyword::Friend, Reserved::CppOnly),
    ("goto", Keyword::Goto, Reserved::Both),
    ("if", Keyword::If, Reserved::Both),
    ("inline", Keyword::Inline, Reserved::Both),
    ("int", Keyword::Int, Reserved::Both),
    ("long", Keyword::Long, Reserved::Both),
    ("mutable", Keyword::Mutable, Reserved::CppOnly),
    ("namespace", Keyword::Namespace, Reserved::CppOnly),
    ("new", Keyword::New, Reserved::CppOnly),
    ("noexcept", Keyword::Noexcept, Reserved::CppOnly),
    ("nullptr", Keyword::Nullptr, Reserved::CppOnly),
    ("operator", Keyword::Operator, Reserved::CppOnly),
    ("private", Keyword::Private, Reserved::CppOnly),
    ("protected", Keyword::Protected, Reserved::CppOnly),
    ("public", Keyword::Public, Reserved::CppOnly),
    ("register", Keyword::Register, Reserved::Both),
    ("reinterpret_cast", Keyword::ReinterpretCast, Reserved::CppOnly),
    ("restrict", Keyword::Restrict, Reserved::COnly),
    ("return", Keyword::Return, Reserved::Both),
    ("short", Keyword::Short, Reserved::Both),
    ("signed", Keyword::Signed, Reserved::Both),
    ("sizeof", Keyword::Sizeof, Reserved::Both),
    ("static", Keyword::Static, Reserved::Both),
    ("static_assert", Keyword::StaticAssert, Reserved::CppOnly),
    ("_Static_assert", Keyword::StaticAssert, Reserved::COnly),
    ("static_cast", Keyword::StaticCast, Reserved::CppOnly),
    ("struct", Keyword::Struct, Reserved::Both),
    ("switch", Keyword::Switch, Reserved::Both),
    ("template", Keyword::Template, Reserved::CppOnly),
    ("this", Keyword::This, Reserved::CppOnly),
    ("thread_local", Keyword::ThreadLocal, Reserved::CppOnly),
    ("_Thread_local", Keyword::ThreadLocal, Reserved::COnly),
    ("throw", Keyword::Throw, Reserved::CppOnly),
    ("true", Keyword::True, Reserved::CppOnly),
    ("try", Keyword::Try, Reserved::CppOnly),
    ("typedef", Keyword::Typedef, Reserved::Both),
    ("typeid", Keyword::Typeid, Reserved::CppOnly),
    ("typename", Keyword::Typename, Reserved::CppOnly),
    ("union", Keyword::Union, Reserved::Both),
    ("unsigned", Keyword::Unsigned, Reserved::Both),
    ("using", Keyword::Using, Reserved::CppOnly),
    ("virtual", Keyword::Virtual, Reserved::CppOnly),
    ("void", Keyword::Void, Reserved::Both),
    ("volatile", Keyword::Volatile, Reserved::Both),
    ("wchar_t", Keyword::WcharT, Reserved::CppOnly),
    ("while", Keyword::While, Reserved::Both),
];

static TABLE: LazyLock<FxHashMap<&'static str, (Keyword, Reserved)>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|&(text, keyword, reserved)| (text, (keyword, reserved)))
        .collect()
});

impl Keyword {
    /// Look up a spelling in the given language's keyword set
    pub fn lookup(text: &str, language: Language) -> Option<Keyword> {
        TABLE
            .get(text)
            .filter(|(_, reserved)| reserved.includes(language))
            .map(|&(keyword, _)| keyword)
    }

    /// `struct`, `union`, `class` and `enum`: keywords that introduce a type
    /// name usable as a type reference.
    pub fn is_type_ref_marker(self) -> bool {
        matches!(
            self,
            Keyword::Struct | Keyword::Union | Keyword::Class | Keyword::Enum
        )
    }
}
