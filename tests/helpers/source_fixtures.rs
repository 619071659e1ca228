//! Common statement fixtures for tests.

// Single declarators
pub const SIMPLE_INT: &str = "int x;";
pub const SIMPLE_STRUCT: &str = "struct X y;";
pub const QUALIFIED_TYPE: &str = "std::string s;";

// Multiple declarators
pub const TWO_INTS: &str = "int x, y;";
pub const MIXED_DECLARATORS: &str = "int *a, b[3], c = 1;";

// Parenthesis forms
pub const CONSTRUCTOR_CALL: &str = "Foo bar(1, 2);";
pub const PROTOTYPE: &str = "Foo bar(int a, char b);";
pub const FUNCTION_POINTER: &str = "int (*fp)(int);";
pub const PLAIN_CALL: &str = "bar(1, 2);";

// Qualified declarator names
pub const STATIC_MEMBER_DEFINITION: &str = "int Foo::bar = 1;";
pub const NESTED_MEMBER_DEFINITION: &str = "const char *ns::Outer::name = \"x\";";
