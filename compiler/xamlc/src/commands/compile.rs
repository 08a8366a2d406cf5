//! The default command: compile a file to XML or HTML.

use std::path::{Path, PathBuf};

use tracing::debug;
use xamlc::{render, Args, CompileOptions, DocType, Value};

use super::{read_source, report_and_exit};

/// Options for compiling one file from the command line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompileFileOptions {
    /// `--type xml|html`
    pub doc_type: Option<DocType>,
    /// `--display`: print instead of writing a file.
    pub display: bool,
    /// `--dest PATH`
    pub dest: Option<PathBuf>,
    /// `--same-dir`: write next to the source instead of the current directory.
    pub same_dir: bool,
    /// `--encoding NAME`: source encoding when there is no pragma.
    pub encoding: Option<String>,
    /// `--arg k=v` and `--list k=a,b`
    pub args: Args,
}

/// Parse everything after the command name. Returns the source path (if
/// given) and the options, or a usage message.
pub fn parse_compile_options(args: &[String]) -> Result<(Option<String>, CompileFileOptions), String> {
    let mut options = CompileFileOptions::default();
    let mut file = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_owned())),
            _ => (arg.as_str(), None),
        };
        let mut value = |name: &str| {
            inline
                .clone()
                .or_else(|| iter.next().cloned())
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag {
            "--display" => options.display = true,
            "--same-dir" => options.same_dir = true,
            "--type" | "-t" => {
                let name = value("--type")?;
                let doc_type = DocType::from_name(&name)
                    .ok_or_else(|| format!("unknown document type '{name}' (expected xml or html)"))?;
                options.doc_type = Some(doc_type);
            }
            "--dest" | "-d" => options.dest = Some(PathBuf::from(value("--dest")?)),
            "--encoding" => options.encoding = Some(value("--encoding")?),
            "--arg" => {
                let pair = value("--arg")?;
                let (name, text) = split_pair(&pair)?;
                options.args.insert(name, text);
            }
            "--list" => {
                let pair = value("--list")?;
                let (name, items) = split_pair(&pair)?;
                let items: Vec<&str> = if items.is_empty() {
                    Vec::new()
                } else {
                    items.split(',').collect()
                };
                options.args.insert(name, Value::list(items));
            }
            _ if flag.starts_with('-') => return Err(format!("unknown option '{arg}'")),
            _ if file.is_none() => file = Some(arg.clone()),
            _ => return Err(format!("unexpected argument '{arg}'")),
        }
    }
    Ok((file, options))
}

fn split_pair(pair: &str) -> Result<(&str, &str), String> {
    match pair.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(format!("expected NAME=VALUE, got '{pair}'")),
    }
}

/// Where the output of `file` goes.
///
/// Without `dest`, the name is the source's with a `.xaml` extension
/// removed. Unless `same_dir` is set only the file name is kept, so the
/// output lands in the current directory. The document type is appended
/// as the extension.
pub fn output_path(file: &Path, dest: Option<&Path>, same_dir: bool, doc_type: DocType) -> PathBuf {
    let base = match dest {
        Some(dest) => dest.to_path_buf(),
        None if file
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xaml")) =>
        {
            file.with_extension("")
        }
        None => file.to_path_buf(),
    };
    let base = if same_dir {
        base
    } else {
        PathBuf::from(base.file_name().unwrap_or_default())
    };
    let mut name = base.into_os_string();
    name.push(".");
    name.push(doc_type.name());
    PathBuf::from(name)
}

/// Compile `path` and print or write the result.
pub fn compile_file(path: &str, options: &CompileFileOptions) {
    let source = read_source(path);
    let mut compile_options = CompileOptions {
        doc_type: options.doc_type,
        ..CompileOptions::default()
    };
    if let Some(encoding) = &options.encoding {
        compile_options.default_encoding.clone_from(encoding);
    }

    let document = match render(&source, &compile_options, &options.args) {
        Ok(document) => document,
        Err(e) => report_and_exit(&e, &source, path),
    };

    if options.display {
        match document.string() {
            Ok(text) => println!("{text}"),
            Err(e) => report_and_exit(&e, &source, path),
        }
        return;
    }

    let bytes = match document.bytes() {
        Ok(bytes) => bytes,
        Err(e) => report_and_exit(&e, &source, path),
    };
    let target = output_path(
        Path::new(path),
        options.dest.as_deref(),
        options.same_dir,
        document.ml().doc_type,
    );
    debug!(target = %target.display(), bytes = bytes.len(), "writing output");
    if let Err(e) = std::fs::write(&target, bytes) {
        eprintln!("error writing '{}': {e}", target.display());
        std::process::exit(1);
    }
}
