//! Verbatim block capture for filters and `script`/`style` bodies.
//!
//! Captured lines are never lexed. The block is normalised so that it can be
//! re-indented at any output level: the common leading indentation is
//! removed, outer blank lines are dropped, and interior blank lines become
//! empty strings.

/// Normalise raw captured lines (without line terminators).
pub(crate) fn normalize(lines: &[String]) -> Vec<String> {
    let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
        return Vec::new();
    };
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);
    let body = &lines[first..=last];
    let common = body
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| leading_width(l))
        .min()
        .unwrap_or(0);
    body.iter()
        .map(|line| {
            if is_blank(line) {
                String::new()
            } else {
                line.chars().skip(common).collect::<String>().trim_end().to_owned()
            }
        })
        .collect()
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Leading space/tab count in characters.
pub(crate) fn leading_width(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}
