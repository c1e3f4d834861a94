//! Common source fixtures for tests.

pub const EMPTY: &str = "";

pub const SIMPLE_LET: &str = "let x = 1;\n";

pub const STATEMENTS: &str = r#"let total = add(1, 2) * 3;
#define LIMIT 10
print("done");
"#;

pub const DIRECTIVE_ONLY: &str = "#pragma once\n";

pub const COMMENTED: &str = "// header\nlet a = /* inline */ 1;\n";

// Invalid input
pub const CONTROL_CHAR: &str = "a\x01b";

pub const MISSING_NAME: &str = "let = 1;\nlet y = 2;\n";

pub const TWO_BAD_STATEMENTS: &str = "let = 1;\nlet y = ;\n";

pub const UNTERMINATED: &str = "let x = 1";
