//! xaml Compiler CLI

mod commands;

use commands::{code_file, compile_file, explain_error, parse_compile_options, tokens_file};

fn main() {
    xamlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: xaml tokens <file.xaml>");
                std::process::exit(1);
            }
            tokens_file(&args[2]);
        }
        "code" => {
            if args.len() < 3 {
                eprintln!("Usage: xaml code <file.xaml>");
                std::process::exit(1);
            }
            code_file(&args[2]);
        }
        "help" | "--help" | "-h" => match args.get(2) {
            Some(code) => explain_error(code),
            None => print_usage(),
        },
        "version" | "--version" | "-V" => {
            println!("xaml {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            let (file, options) = match parse_compile_options(&args[1..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!();
                    print_usage();
                    std::process::exit(1);
                }
            };
            let Some(file) = file else {
                eprintln!("error: missing file path");
                eprintln!("Usage: xaml <file.xaml> [options]");
                std::process::exit(1);
            };
            compile_file(&file, &options);
        }
    }
}

fn print_usage() {
    println!("xaml - compile indentation-based markup to XML or HTML");
    println!();
    println!("Usage: xaml <file.xaml> [options]");
    println!("       xaml <command> [args]");
    println!();
    println!("Commands:");
    println!("  tokens <file.xaml>   Tokenize and display tokens");
    println!("  code <file.xaml>     Display the compiled program");
    println!("  help [code]          Show this help, or explain an error code (e.g., E1001)");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --type <xml|html>    Document type to produce (overrides `!!!`)");
    println!("  --display            Print the output instead of writing DEST");
    println!("  --dest <path>        Destination name [default: FILE without .xaml]");
    println!("  --same-dir           Write DEST next to FILE [default: current directory]");
    println!("  --encoding <name>    Source encoding when there is no `!!! coding` line");
    println!("  --arg <name=value>   Bind a string argument");
    println!("  --list <name=a,b>    Bind a list argument");
    println!();
    println!("Examples:");
    println!("  xaml views.xaml                      # writes views.xml");
    println!("  xaml page.xaml --type html --display");
    println!("  xaml rows.xaml --list order=first,second,third");
    println!("  xaml help E2001");
    println!();
    println!("Set RUST_LOG=debug for phase tracing.");
}
