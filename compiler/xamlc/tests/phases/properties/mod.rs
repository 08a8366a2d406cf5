//! Properties over generated documents.

use proptest::prelude::*;
use xamlc::{compile, evaluate, Args, CompileOptions, Value};

fn attr_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("reserved shortcut name", |name| {
        !matches!(name.as_str(), "name" | "id" | "string" | "class")
    })
}

proptest! {
    #[test]
    fn shortcuts_lead_whatever_the_written_order(
        explicit in prop::collection::btree_set(attr_name(), 0..4),
        rotate in 0usize..8,
    ) {
        let mut fragments: Vec<String> = explicit.iter().map(|n| format!("{n}='v'")).collect();
        fragments.extend(["@n".to_owned(), "#i".to_owned(), "$s".to_owned(), ".c".to_owned()]);
        let len = fragments.len();
        fragments.rotate_left(rotate % len);
        let source = format!("~el {}", fragments.join(" "));

        let program = compile(source.as_str(), &CompileOptions::default()).unwrap();
        let out = evaluate(&program, &Args::new()).unwrap().string().unwrap();

        let head = "<el name=\"n\" id=\"i\" string=\"s\" class=\"c\"";
        prop_assert!(out.starts_with(head), "{}", out);
        let mut rest = &out[head.len()..];
        for name in fragments.iter().filter_map(|f| f.split_once('=').map(|(n, _)| n)) {
            let attr = format!(" {name}=\"v\"");
            prop_assert!(rest.starts_with(&attr), "{} in {}", attr, out);
            rest = &rest[attr.len()..];
        }
        prop_assert_eq!(rest, "/>");
    }

    #[test]
    fn evaluation_is_repeatable(items in prop::collection::vec("[a-z]{1,5}", 0..5)) {
        let source = "~list\n    -for item in args.items:\n        ~item value=item";
        let program = compile(source, &CompileOptions::default()).unwrap();
        let args = Args::new().with("items", Value::list(items.iter().map(String::as_str)));

        let first = evaluate(&program, &args).unwrap().string().unwrap();
        let second = evaluate(&program, &args).unwrap().string().unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.matches("<item ").count(), items.len());
    }
}
