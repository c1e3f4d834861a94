mod tests_standard_lexer;
