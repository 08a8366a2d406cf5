//! `:filter` blocks: verbatim bodies wrapped in their delimiters.

use pretty_assertions::assert_eq;
use xamlc::DocType;

use crate::common::{bytes, lines, string, string_as};

#[test]
fn python_block_followed_by_a_sibling() {
    let source = lines(&[
        "~opentag",
        "    ~data",
        "        :python",
        "            1 & 2",
        "            5 < 9",
        "",
        "    ~data",
    ]);
    let expected = lines(&[
        "<opentag>",
        "    <data>",
        "        <script type=\"text/python\">",
        "            1 & 2",
        "            5 < 9",
        "        </script>",
        "    </data>",
        "    <data/>",
        "</opentag>",
    ]);
    assert_eq!(bytes(source.as_bytes()), expected.into_bytes());
}

#[test]
fn python_block_at_end_of_input() {
    let source = lines(&[
        "~opentag",
        "    ~data",
        "        :python",
        "            1 & 2",
        "            5 < 9",
    ]) + "\n";
    let expected = lines(&[
        "<opentag>",
        "    <data>",
        "        <script type=\"text/python\">",
        "            1 & 2",
        "            5 < 9",
        "        </script>",
        "    </data>",
        "</opentag>",
    ]);
    assert_eq!(bytes(source.as_bytes()), expected.into_bytes());
}

fn head_block(filter: &[&str]) -> String {
    let mut source = vec!["!!!html", "~html", "    ~head"];
    source.extend_from_slice(filter);
    source.extend_from_slice(&["    ~body", "        <howdy!>"]);
    lines(&source)
}

fn head_page(block: &[&str]) -> String {
    let mut expected = vec![
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
    ];
    expected.extend_from_slice(block);
    expected.extend_from_slice(&[
        "    </head>",
        "    <body>",
        "        &lt;howdy!&gt;",
        "    </body>",
        "</html>",
    ]);
    lines(&expected)
}

const CSS_OUT: &[&str] = &[
    "        <style type=\"text/css\">",
    "            #image-container {",
    "                .display: flex;",
    "            }",
    "        </style>",
];

const JS_OUT: &[&str] = &[
    "        <script type=\"text/javascript\">",
    "            var container = document.querySelector('.a_class');",
    "            for (var i=0; i < 3000; i++) {",
    "                console.log('this is ' + i + '!');",
    "            }",
    "        </script>",
];

#[test]
fn css_without_blank_lines() {
    let source = head_block(&[
        "        :css",
        "            #image-container {",
        "                .display: flex;",
        "            }",
    ]);
    assert_eq!(string_as(&source, DocType::Html), head_page(CSS_OUT));
}

#[test]
fn css_with_a_leading_blank_line() {
    let source = head_block(&[
        "        :css",
        "",
        "            #image-container {",
        "                .display: flex;",
        "            }",
    ]);
    assert_eq!(string_as(&source, DocType::Html), head_page(CSS_OUT));
}

#[test]
fn javascript_without_blank_lines() {
    let source = head_block(&[
        "        :javascript",
        "            var container = document.querySelector('.a_class');",
        "            for (var i=0; i < 3000; i++) {",
        "                console.log('this is ' + i + '!');",
        "            }",
    ]);
    assert_eq!(string_as(&source, DocType::Html), head_page(JS_OUT));
}

#[test]
fn javascript_with_a_leading_blank_line() {
    let source = head_block(&[
        "        :javascript",
        "",
        "            var container = document.querySelector('.a_class');",
        "            for (var i=0; i < 3000; i++) {",
        "                console.log('this is ' + i + '!');",
        "            }",
    ]);
    assert_eq!(string_as(&source, DocType::Html), head_page(JS_OUT));
}

#[test]
fn javascript_between_text_lines() {
    let source = lines(&[
        "!!! html",
        "~html",
        "    ~body",
        "        ~p",
        "            Awesome page",
        "            :javascript",
        "                document.write(\" with JavaScript \");",
        "            is awesome",
    ]);
    let expected = lines(&[
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
        "    </head>",
        "    <body>",
        "        <p>",
        "            Awesome page",
        "            <script type=\"text/javascript\">",
        "                document.write(\" with JavaScript \");",
        "            </script>",
        "            is awesome",
        "        </p>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(string(&source), expected);
}

fn ssh_key_record(filter: &str) -> String {
    lines(&[
        "-types = 'ip_map.type'",
        "-commands = 'ip_map.command'",
        "~record #command_ssh_key model=commands",
        "    @name: ssh_key",
        "    @string: SSH Key",
        "    @type: text",
        "    @sequence: 90",
        "    @where: local",
        "    @command: /usr/bin/ssh-keygen -lv -f /home/openerp/.ssh/known_hosts",
        "    @script",
        &format!("        :{filter}"),
        "            for block in Blocks(text, 12):",
        "                _, hash, ip, _ = block[0].split()",
        "                ip = ip.split(',')[-1]",
        "                ascii_art = '\\n'.join(block[1:])",
        "                result[ip] = {cmd_name: {'value': '%s\\n\\n%s' % (hash, ascii_art)}}",
    ])
}

fn ssh_key_output() -> String {
    lines(&[
        "<record id=\"command_ssh_key\" model=\"ip_map.command\">",
        "    <field name=\"name\">ssh_key</field>",
        "    <field name=\"string\">SSH Key</field>",
        "    <field name=\"type\">text</field>",
        "    <field name=\"sequence\">90</field>",
        "    <field name=\"where\">local</field>",
        "    <field name=\"command\">/usr/bin/ssh-keygen -lv -f /home/openerp/.ssh/known_hosts</field>",
        "    <field name=\"script\">",
        "        <![CDATA[",
        "            for block in Blocks(text, 12):",
        "                _, hash, ip, _ = block[0].split()",
        "                ip = ip.split(',')[-1]",
        "                ascii_art = '\\n'.join(block[1:])",
        "                result[ip] = {cmd_name: {'value': '%s\\n\\n%s' % (hash, ascii_art)}}",
        "        ]]>",
        "    </field>",
        "</record>",
    ])
}

#[test]
fn cdata_block() {
    assert_eq!(string(&ssh_key_record("cdata")), ssh_key_output());
}

#[test]
fn cdata_python_block() {
    assert_eq!(string(&ssh_key_record("cdata-python")), ssh_key_output());
}

#[test]
fn every_filter_in_one_page() {
    let source = lines(&[
        "!!! html",
        "~html",
        "    ~head",
        "        ~title: Test Filters Page",
        "        ~script src='somefile.js' type='text/javascript'",
        "        ~link rel='stylesheet' href='anotherfile.css' type='text/css'",
        "        ~link href='that_file.css' type='text/css' rel='stylesheet'",
        "        :javascript",
        "            if (a < b) {",
        "                console.log('&');",
        "            }",
        "        :css",
        "            body {",
        "                background: #000;",
        "                text-align: center;",
        "            }",
        "    ~body",
        "        ~p",
        "            Awesome page",
        "            :javascript",
        "                document.write(\" with JavaScript \");",
        "            ~script src='this_file.js'",
        "            is awesome",
    ]);
    let expected = lines(&[
        "<!DOCTYPE html>",
        "<html>",
        "    <head>",
        "        <meta charset=\"utf-8\">",
        "        <title>Test Filters Page</title>",
        "        <script src=\"somefile.js\" type=\"text/javascript\"></script>",
        "        <link rel=\"stylesheet\" href=\"anotherfile.css\" type=\"text/css\">",
        "        <link href=\"that_file.css\" type=\"text/css\" rel=\"stylesheet\">",
        "        <script type=\"text/javascript\">",
        "            if (a < b) {",
        "                console.log('&');",
        "            }",
        "        </script>",
        "        <style type=\"text/css\">",
        "            body {",
        "                background: #000;",
        "                text-align: center;",
        "            }",
        "        </style>",
        "    </head>",
        "    <body>",
        "        <p>",
        "            Awesome page",
        "            <script type=\"text/javascript\">",
        "                document.write(\" with JavaScript \");",
        "            </script>",
        "            <script src=\"this_file.js\"></script>",
        "            is awesome",
        "        </p>",
        "    </body>",
        "</html>",
    ]);
    assert_eq!(string_as(&source, DocType::Html), expected);
}
