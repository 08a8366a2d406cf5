//! Error reporting: every error kind surfaces with its code and location.

use pretty_assertions::assert_eq;
use xaml_diagnostic::emitter::render as render_error;
use xamlc::{compile, render, Args, CompileOptions, DocType, ErrorCode};

use crate::common::{document, lines, render_err};

fn compile_code(source: &str) -> ErrorCode {
    compile(source, &CompileOptions::default()).unwrap_err().code()
}

// === Parse errors ===

#[test]
fn inline_colon_without_data() {
    assert_eq!(compile_code("~record:"), ErrorCode::E1001);
    assert_eq!(compile_code("@record:"), ErrorCode::E1001);
}

#[test]
fn tag_must_start_with_a_letter() {
    assert_eq!(compile_code("~7hmm"), ErrorCode::E1001);
}

#[test]
fn unrecognised_doctype() {
    assert_eq!(compile_code("!!! xaml1.0"), ErrorCode::E1001);
}

#[test]
fn unknown_filter() {
    assert_eq!(compile_code(":markdown\n    # title"), ErrorCode::E1001);
}

#[test]
fn class_line_needs_html() {
    let source = lines(&["~div", "    .container"]);
    let err = compile(source.as_str(), &CompileOptions::default()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.location().line, 2);

    let html = CompileOptions::new().with_doc_type(DocType::Html);
    assert!(compile(source.as_str(), &html).is_ok());
}

#[test]
fn doctype_after_content() {
    assert_eq!(compile_code("~data\n!!! xml"), ErrorCode::E1001);
}

#[test]
fn unsupported_statement() {
    assert_eq!(compile_code("-import os"), ErrorCode::E1001);
}

// === Indentation and encoding ===

#[test]
fn dedent_to_an_unknown_level() {
    let source = lines(&["~a", "    ~b", "  ~c"]);
    let err = compile(source.as_str(), &CompileOptions::default()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0001);
    assert_eq!(err.location().line, 3);
}

#[test]
fn mixed_tabs_and_spaces() {
    assert_eq!(compile_code("~a\n \t~b"), ErrorCode::E0001);
}

#[test]
fn tabs_and_spaces_on_different_lines() {
    for source in ["~a\n\t~b\n ~c", "~a\n\t~b\n    ~c"] {
        let err = compile(source, &CompileOptions::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E0001);
        assert_eq!(err.location().line, 3);
    }
}

#[test]
fn malformed_pragmas() {
    for source in [
        &b"!!! coding: blah"[..],
        b"!!! coding:",
        b"!!! coding:   ",
        b"!!! coding =   ",
        b"!!! coding = nope  ",
    ] {
        let err = compile(source, &CompileOptions::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E0002);
    }
}

#[test]
fn undecodable_bytes() {
    let err = compile(&b"~name\n    caf\xe9"[..], &CompileOptions::default()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0003);
    assert_eq!(err.location().line, 2);
}

// === Evaluation errors ===

#[test]
fn unbound_name() {
    let err = render_err("~record model=nowhere");
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.summary(), "name `nowhere` is not bound");
}

#[test]
fn looping_over_a_string() {
    let source = lines(&["-word = 'abc'", "-for c in word:", "    ~letter"]);
    let err = render_err(&source);
    assert_eq!(err.code(), ErrorCode::E2002);
    assert_eq!(err.location().line, 2);
}

#[test]
fn writing_a_list_as_text() {
    let args = Args::new().with("rows", xamlc::Value::list(["a"]));
    let err = render("~table: =rows", &CompileOptions::default(), &args).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2002);
}

// === Rendering errors ===

#[test]
fn void_element_with_content() {
    let err = document("!!! html\n~br: text").string().unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3001);
    assert_eq!(err.summary(), "void element <br> cannot have content");
}

// === Reports ===

#[test]
fn report_points_at_the_column() {
    let source = "~record:";
    let err = compile(source, &CompileOptions::default()).unwrap_err();
    let report = render_error(&err, Some(source), Some("views.xaml"));
    let expected = lines(&[
        "error[E1001]: `:` must be followed by data",
        "  --> views.xaml:1:8",
        "  |",
        "1 | ~record:",
        "  |        ^",
        "",
        "",
    ]);
    assert_eq!(report, expected);
}

#[test]
fn every_code_has_an_explanation() {
    for code in ErrorCode::ALL {
        assert!(!code.explanation().is_empty(), "{code}");
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}
