//! String helpers shared by the class and style code.

/// Strip leading/trailing whitespace and byte-order marks
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn is_separator(c: char) -> bool {
    matches!(c, ':' | '-' | '_')
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Convert a `-`, `_` or `:` delimited name to its script form
///
/// `background-color` → `backgroundColor`, `-webkit-transition` →
/// `webkitTransition`, `-moz-opacity` → `MozOpacity`. A separator run followed
/// by a character collapses into that character, upper-cased unless the run
/// starts the string.
pub fn camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    while i < chars.len() {
        if !is_separator(chars[i]) {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i;
        while end < chars.len() && is_separator(chars[end]) {
            end += 1;
        }

        let (letter, next) = match chars.get(end) {
            Some(&c) if !is_line_terminator(c) => (c, end + 1),
            // Nothing usable follows: the run's last separator stands in as the letter
            _ if end - start >= 2 => (chars[end - 1], end),
            _ => {
                out.push(chars[i]);
                i += 1;
                continue;
            }
        };

        if start == 0 {
            out.push(letter);
        } else {
            out.extend(letter.to_uppercase());
        }
        i = next;
    }

    match out.strip_prefix("moz") {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_uppercase()) => format!("Moz{rest}"),
        _ => out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("  foo bar \t"), "foo bar");
        assert_eq!(trim("\u{FEFF} x \u{FEFF}"), "x");
        assert_eq!(trim(""), "");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn test_camel_case_delimiters() {
        assert_eq!(camel_case("background-color"), "backgroundColor");
        assert_eq!(camel_case("overflow_y"), "overflowY");
        assert_eq!(camel_case("xml:lang"), "xmlLang");
        assert_eq!(camel_case("border--top"), "borderTop");
        assert_eq!(camel_case("opacity"), "opacity");
        assert_eq!(camel_case("backgroundColor"), "backgroundColor");
    }

    #[test]
    fn test_camel_case_leading_separator() {
        assert_eq!(camel_case("-webkit-transition"), "webkitTransition");
        assert_eq!(camel_case("-moz-box-sizing"), "MozBoxSizing");
        assert_eq!(camel_case("mozilla"), "mozilla");
    }

    #[test]
    fn test_camel_case_trailing_separators() {
        assert_eq!(camel_case("a-"), "a-");
        assert_eq!(camel_case("a--"), "a-");
        assert_eq!(camel_case(""), "");
    }
}
