#![no_main]

use libfuzzer_sys::fuzz_target;
use tern::dump::dump_program;
use tern::format::{FormatConfig, format_program};
use tern::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(tokens) = lexer::lex(s) else {
        return;
    };
    let Ok(ast) = parser::parse(&tokens) else {
        return;
    };

    // Anything that parses must survive a trip through the formatter unchanged
    let printed = format_program(&ast, &FormatConfig::default());
    let reparsed = parser::parse_source(&printed).unwrap_or_else(|e| panic!("formatted source rejected: {e}\n{printed}"));
    assert_eq!(dump_program(&ast), dump_program(&reparsed));
});
