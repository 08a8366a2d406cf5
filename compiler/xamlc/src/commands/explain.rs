//! `help <code>`: explain an error code.

use xamlc::ErrorCode;

pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}");
        }
        std::process::exit(1);
    };
    println!("{code}: {}", code.explanation());
}
