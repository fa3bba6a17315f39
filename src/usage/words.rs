//! Identifier word splitting
//!
//! @module usage/words

/// Split a camel-case identifier into lower-case words separated by spaces.
///
/// A space goes before an upper-case letter that follows a non-upper-case
/// character, between an acronym and the capitalised word after it
/// (`HTMLParser` -> `html parser`), and after a letter followed by a
/// non-letter (`value2` -> `value 2`).
pub fn split_camel_case(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + 8);

    for (i, &cur) in chars.iter().enumerate() {
        if i > 0 && is_boundary(chars[i - 1], cur, chars.get(i + 1).copied()) {
            out.push(' ');
        }
        out.push(cur);
    }

    out.to_lowercase()
}

fn is_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    let acronym_end = prev.is_ascii_uppercase()
        && cur.is_ascii_uppercase()
        && next.map_or(false, |n| n.is_ascii_lowercase());
    let hump = !prev.is_ascii_uppercase() && cur.is_ascii_uppercase();
    let letter_then_other = prev.is_ascii_alphabetic() && !cur.is_ascii_alphabetic();

    acronym_end || hump || letter_then_other
}

/// Word tokens of a readable name
pub fn tokens(readable: &str) -> Vec<&str> {
    readable.split(' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_camel_case() {
        assert_eq!(split_camel_case("setValue"), "set value");
        assert_eq!(split_camel_case("BrowserTest"), "browser test");
        assert_eq!(split_camel_case("HTMLParser"), "html parser");
        assert_eq!(split_camel_case("parseHTML"), "parse html");
        assert_eq!(split_camel_case("click"), "click");
        assert_eq!(split_camel_case(""), "");
    }

    #[test]
    fn test_split_digits() {
        assert_eq!(split_camel_case("value2"), "value 2");
        assert_eq!(split_camel_case("getX2"), "get x 2");
        assert_eq!(split_camel_case("value2Set"), "value 2 set");
    }

    #[test]
    fn test_split_underscore_stays_attached() {
        // The separator goes before the underscore, not after it
        assert_eq!(split_camel_case("get_value"), "get _value");
    }

    #[test]
    fn test_tokens() {
        assert_eq!(tokens("set value"), vec!["set", "value"]);
        assert_eq!(tokens("click"), vec!["click"]);
    }
}
