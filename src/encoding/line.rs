use super::{COMMENT_MARKER, SEPARATOR};

/// A single classified line of properties text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// Comment line, holding the trimmed text including the marker
    Comment(&'a str),
    /// `key=value` entry
    Entry { key: &'a str, value: &'a str },
}

impl<'a> Line<'a> {
    /// Classify one line (without its terminator)
    ///
    /// Only the ends of the whole line are trimmed; whitespace around the
    /// separator stays part of the key and value. Returns `None` for a
    /// non-blank, non-comment line that has no separator.
    pub fn parse(raw: &'a str) -> Option<Line<'a>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(Line::Blank);
        }
        if trimmed.starts_with(COMMENT_MARKER) {
            return Some(Line::Comment(trimmed));
        }
        let (key, value) = trimmed.split_once(SEPARATOR)?;
        Some(Line::Entry { key, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank() {
        assert_eq!(Line::parse(""), Some(Line::Blank));
        assert_eq!(Line::parse("   \t "), Some(Line::Blank));
    }

    #[test]
    fn test_parse_comment() {
        assert_eq!(Line::parse("# comment"), Some(Line::Comment("# comment")));
        assert_eq!(Line::parse("   #indented"), Some(Line::Comment("#indented")));
        assert_eq!(Line::parse("#a=b"), Some(Line::Comment("#a=b")));
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            Line::parse("name=coredb"),
            Some(Line::Entry {
                key: "name",
                value: "coredb"
            })
        );
    }

    #[test]
    fn test_parse_keeps_spaces_around_separator() {
        assert_eq!(
            Line::parse(" key1 = val1 "),
            Some(Line::Entry {
                key: "key1 ",
                value: " val1"
            })
        );
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        assert_eq!(
            Line::parse("a=b=c"),
            Some(Line::Entry {
                key: "a",
                value: "b=c"
            })
        );
    }

    #[test]
    fn test_parse_empty_key_or_value() {
        assert_eq!(
            Line::parse("=value"),
            Some(Line::Entry {
                key: "",
                value: "value"
            })
        );
        assert_eq!(
            Line::parse("key="),
            Some(Line::Entry {
                key: "key",
                value: ""
            })
        );
    }

    #[test]
    fn test_parse_hash_inside_value() {
        assert_eq!(
            Line::parse("color=#ff0000"),
            Some(Line::Entry {
                key: "color",
                value: "#ff0000"
            })
        );
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(Line::parse("novalueline"), None);
        assert_eq!(Line::parse("  spaced out  "), None);
    }
}
