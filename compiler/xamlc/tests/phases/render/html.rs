//! HTML output: doctypes, `head` injection, void and raw-text elements.

use pretty_assertions::assert_eq;
use xamlc::{render, Args, CompileOptions, DocType, ErrorCode};

use crate::common::{document, lines, string, string_as};

const HTML4_STRICT: &str =
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#;
const HTML4_LOOSE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#;

// === Doctypes ===

#[test]
fn html5_spellings() {
    for source in ["!!! html", "!!! html5", "!!!html"] {
        let doc = document(source);
        assert_eq!(doc.string().unwrap(), "<!DOCTYPE html>\n", "{source}");
        assert_eq!(doc.bytes().unwrap(), b"<!DOCTYPE html>\n".to_vec(), "{source}");
    }
}

#[test]
fn html4_strict_spellings() {
    for source in ["!!! html4", "!!! html4-strict"] {
        let doc = document(source);
        assert_eq!(doc.string().unwrap(), format!("{HTML4_STRICT}\n"), "{source}");
        assert_eq!(doc.bytes().unwrap(), format!("{HTML4_STRICT}\n").into_bytes());
    }
}

#[test]
fn html4_transitional() {
    assert_eq!(
        document("!!! html4-transitional").string().unwrap(),
        format!("{HTML4_LOOSE}\n")
    );
}

#[test]
fn html4_document_gets_no_head() {
    let source = lines(&["!!! html4", "~html", "    ~body"]);
    let expected = lines(&[HTML4_STRICT, "<html>", "    <body></body>", "</html>"]);
    assert_eq!(string(&source), expected);
}

// === Head injection ===

#[test]
fn head_and_meta_are_added() {
    let source = lines(&["!!! html5", "~html", "    ~body", "        ~canvas"]);
    let expected = lines(&[
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
        "    </head>",
        "    <body>",
        "        <canvas></canvas>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(string(&source), expected);
}

fn page_with_container(head: &[&str]) -> String {
    let mut source = vec!["!!! html5", "~html"];
    source.extend_from_slice(head);
    source.extend_from_slice(&[
        "    ~body",
        "        ~div .container",
        "            This is a test of something.",
    ]);
    lines(&source)
}

fn container_page(head: &[&str]) -> String {
    let mut expected = vec![
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
    ];
    expected.extend_from_slice(head);
    expected.extend_from_slice(&[
        "    </head>",
        "    <body>",
        "        <div class=\"container\">",
        "            This is a test of something.",
        "        </div>",
        "    </body>",
        "</html>",
    ]);
    lines(&expected)
}

#[test]
fn missing_head() {
    assert_eq!(string(&page_with_container(&[])), container_page(&[]));
}

#[test]
fn empty_head() {
    assert_eq!(
        string(&page_with_container(&["    ~head"])),
        container_page(&[])
    );
}

#[test]
fn head_with_title() {
    assert_eq!(
        string(&page_with_container(&["    ~head", "        ~title: my cool app!"])),
        container_page(&["        <title>my cool app!</title>"])
    );
}

#[test]
fn head_written_after_body_moves_first() {
    let source = lines(&[
        "!!! html5",
        "~html",
        "    ~body",
        "    ~head",
        "        ~title: late",
    ]);
    let expected = lines(&[
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
        "        <title>late</title>",
        "    </head>",
        "    <body></body>",
        "</html>",
    ]);
    assert_eq!(string(&source), expected);
}

#[test]
fn matching_override_keeps_the_declaration() {
    let source = lines(&["!!! html", "~html", "    ~body", "        ~div", "            Hello!"]);
    let expected = lines(&[
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
        "    </head>",
        "    <body>",
        "        <div>",
        "            Hello!",
        "        </div>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(string_as(&source, DocType::Html), expected);
}

#[test]
fn xml_override_drops_the_html_declaration() {
    let source = lines(&[
        "!!! html",
        "!!! vim: fileencoding=utf-8",
        "~html",
        "    ~body",
        "        ~div",
        "            Hello!",
    ]);
    let options = CompileOptions::new().with_doc_type(DocType::Xml);
    let doc = render(source.as_bytes(), &options, &Args::new()).unwrap();
    let expected = lines(&[
        "<html>",
        "    <body>",
        "        <div>",
        "            Hello!",
        "        </div>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(doc.string().unwrap(), expected);
}

// === Class lines ===

#[test]
fn class_line_is_a_div() {
    let source = lines(&["!!! html", "~html", "    ~body", "        .container", "            Hello!"]);
    let expected = lines(&[
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
        "    </head>",
        "    <body>",
        "        <div class=\"container\">",
        "            Hello!",
        "        </div>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(string(&source), expected);
}

#[test]
fn class_line_in_an_html_snippet() {
    let source = lines(&[".container", "    Hello!"]);
    let expected = lines(&["<div class=\"container\">", "    Hello!", "</div>"]);
    assert_eq!(string_as(&source, DocType::Html), expected);
}

#[test]
fn classes_join_in_source_order() {
    for (classes, joined) in [(".logo .circle", "logo circle"), (".circle .logo", "circle logo")] {
        let source = lines(&[
            "!!! html",
            &format!("~div {classes}"),
            "    ~img src='images/my_logo.svg' alt='logo'",
        ]);
        let expected = lines(&[
            "<!DOCTYPE html>",
            &format!("<div class=\"{joined}\">"),
            "    <img src=\"images/my_logo.svg\" alt=\"logo\">",
            "</div>",
        ]);
        assert_eq!(string(&source), expected);
    }
}

// === Void elements ===

#[test]
fn void_elements_have_no_end_tag() {
    let source = lines(&[
        "!!!html",
        "~html",
        "    ~head",
        "        ~title: Effective JavaScript: Frogger",
        "        ~link rel='stylesheet' href='css/style.css'",
        "    ~body",
        "        ~script src='js/resources.js'",
        "        ~script src='js/app.js'",
        "        ~script src='js/engine.js'",
    ]);
    let expected = lines(&[
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
        "        <title>Effective JavaScript: Frogger</title>",
        "        <link rel=\"stylesheet\" href=\"css/style.css\">",
        "    </head>",
        "    <body>",
        "        <script src=\"js/resources.js\"></script>",
        "        <script src=\"js/app.js\"></script>",
        "        <script src=\"js/engine.js\"></script>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(string(&source), expected);
}

#[test]
fn void_element_with_inline_text_fails_on_output() {
    let source = lines(&[
        "!!! html5",
        "~html",
        "    ~head",
        "        ~title: my cool app!",
        "    ~body",
        "        ~area: This is a test of something.",
    ]);
    let doc = document(&source);
    let err = doc.string().unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3001);
    assert_eq!(err.location().line, 6);
    assert_eq!(doc.bytes().unwrap_err().code(), ErrorCode::E3001);
}

#[test]
fn void_element_with_child_text_fails_on_output() {
    let source = lines(&[
        "!!! html5",
        "~html",
        "    ~body",
        "        ~area",
        "            This is a test of something.",
    ]);
    let err = document(&source).string().unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3001);
}

#[test]
fn void_names_are_ordinary_in_xml() {
    let source = lines(&[
        "~html",
        "    ~area",
        "        ~title: my cool app!",
        "    ~body",
        "        ~div",
        "            This is a test of something.",
    ]);
    let expected = lines(&[
        "<html>",
        "    <area>",
        "        <title>my cool app!</title>",
        "    </area>",
        "    <body>",
        "        <div>",
        "            This is a test of something.",
        "        </div>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(string(&source), expected);
}

// === Raw text elements ===

#[test]
fn style_body_is_not_escaped() {
    let source = lines(&[
        "~style",
        "    #image-container {",
        "        .display: flex;",
        "    }",
        "~body",
        "    <howdy!>",
    ]);
    let expected = lines(&[
        "<style>",
        "    #image-container {",
        "        .display: flex;",
        "    }",
        "</style>",
        "<body>",
        "    &lt;howdy!&gt;",
        "</body>",
    ]);
    assert_eq!(string_as(&source, DocType::Html), expected);

    let source = lines(&["~style", "    body > ul {", "        .display: flex;", "    }"]);
    let expected = lines(&[
        "<style>",
        "    body > ul {",
        "        .display: flex;",
        "    }",
        "</style>",
    ]);
    assert_eq!(string_as(&source, DocType::Html), expected);
}

#[test]
fn script_body_is_not_escaped() {
    let source = lines(&[
        "~script",
        "    if ( 5 < 7 &&",
        "         .3 > .5) {",
        "             a = false & true;",
        "    }",
    ]);
    let expected = lines(&[
        "<script>",
        "    if ( 5 < 7 &&",
        "         .3 > .5) {",
        "             a = false & true;",
        "    }",
        "</script>",
    ]);
    assert_eq!(string_as(&source, DocType::Html), expected);
}

#[test]
fn script_body_keeps_interior_blank_lines() {
    let source = lines(&[
        "~script",
        "    if ( 5 < 7 &&",
        "",
        "    .3 > .5) {",
        "             a = false & true;",
        "    }",
    ]);
    let expected = lines(&[
        "<script>",
        "    if ( 5 < 7 &&",
        "",
        "    .3 > .5) {",
        "             a = false & true;",
        "    }",
        "</script>",
    ]);
    assert_eq!(string_as(&source, DocType::Html), expected);
}

#[test]
fn empty_scripts_close_explicitly() {
    let source = lines(&[
        "!!! html",
        "~html",
        "    ~head",
        "        ~script src='cool_script.js'",
        "    ~body",
        "        ~div #main",
        "            ~script src='some_script.js'",
        "        ~div #content",
    ]);
    let expected = lines(&[
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
        "        <script src=\"cool_script.js\"></script>",
        "    </head>",
        "    <body>",
        "        <div id=\"main\">",
        "            <script src=\"some_script.js\"></script>",
        "        </div>",
        "        <div id=\"content\"></div>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(string(&source), expected);
}

#[test]
fn consecutive_scripts() {
    let source = lines(&[
        "!!! html",
        "~html",
        "    ~body",
        "        ~script src='some_script.js'",
        "        ~script src='more_script.js'",
    ]);
    let expected = lines(&[
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
        "    </head>",
        "    <body>",
        "        <script src=\"some_script.js\"></script>",
        "        <script src=\"more_script.js\"></script>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(string(&source), expected);
}
