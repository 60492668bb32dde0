//! Line-based INI parser.
//!
//! The parser is lenient by design: malformed lines (headers without a
//! closing `]`, value lines without `=`, empty keys or identifiers,
//! duplicate keys within a group) are dropped and the rest of the stream
//! is still parsed. Only I/O errors abort a parse.

use std::io::BufRead;

use crate::logging::{trace, warn};

use super::error::IniError;
use super::store::IniStore;

/// Maximum line length in bytes. Longer lines are truncated at a UTF-8
/// boundary, not rejected.
///
/// This is a documented limitation inherited from the original fixed-size
/// read chunk of the on-disk format.
pub const MAX_LINE_LEN: usize = 1024;

/// One classified input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    /// `[identifier]` - the identifier is the literal text between the
    /// brackets, with no escaping and no path splitting.
    Header(&'a str),
    /// `key=text` - split at the first `=`, text kept verbatim.
    Pair(&'a str, &'a str),
    Malformed(&'static str),
}

/// Classify a single line with its terminator already stripped.
fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(rest) = line.strip_prefix('[') {
        return match rest.strip_suffix(']') {
            Some("") => Line::Malformed("empty group identifier"),
            Some(ident) if ident.contains(']') => Line::Malformed("stray ']' in group identifier"),
            Some(ident) => Line::Header(ident),
            None => Line::Malformed("group header without closing ']'"),
        };
    }
    match line.split_once('=') {
        Some(("", _)) => Line::Malformed("value line with empty key"),
        Some((key, text)) => Line::Pair(key, text),
        None => Line::Malformed("value line without '='"),
    }
}

/// Decode a raw line: lossy UTF-8, strip the `\n`/`\r\n` terminator,
/// truncate to [`MAX_LINE_LEN`] bytes.
fn decode_line(raw: &[u8]) -> String {
    let mut line = String::from_utf8_lossy(raw).into_owned();
    if line.ends_with('\n') {
        line.pop();
    }
    if line.ends_with('\r') {
        line.pop();
    }
    if line.len() > MAX_LINE_LEN {
        let mut cut = MAX_LINE_LEN;
        while !line.is_char_boundary(cut) {
            cut -= 1;
        }
        warn!(limit = MAX_LINE_LEN, "truncating overlong line");
        line.truncate(cut);
    }
    line
}

/// Parse a line stream into a store with no backing path.
///
/// Never fails on malformed content; only I/O errors propagate.
pub(super) fn parse<R: BufRead>(mut reader: R) -> Result<IniStore, IniError> {
    let mut store = IniStore::new();
    // Current group: None addresses the root until the first header
    let mut current: Option<String> = None;
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let line = decode_line(&raw);

        match classify(&line) {
            Line::Blank => {}
            Line::Header(ident) => {
                trace!(group = ident, "entering group block");
                // Look up or create: a repeated header reuses the existing
                // group, so later blocks append after its values
                store.ensure_group(ident);
                current = Some(ident.to_string());
            }
            Line::Pair(key, text) => {
                match store.insert(current.as_deref(), key, text) {
                    Ok(()) => {}
                    Err(IniError::DuplicateKey(key)) => {
                        // First occurrence wins
                        warn!(key = %key, "dropping duplicate key");
                    }
                    Err(other) => return Err(other),
                }
            }
            Line::Malformed(reason) => {
                warn!(reason = reason, "dropping malformed line");
            }
        }
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("[g]"), Line::Header("g"));
        assert_eq!(classify("[parent::child]"), Line::Header("parent::child"));
        assert_eq!(classify("a=1"), Line::Pair("a", "1"));
        assert_eq!(classify("a=b=c"), Line::Pair("a", "b=c"));
        assert_eq!(classify("a="), Line::Pair("a", ""));
        assert!(matches!(classify("[g"), Line::Malformed(_)));
        assert!(matches!(classify("[]"), Line::Malformed(_)));
        assert!(matches!(classify("no equals"), Line::Malformed(_)));
        assert!(matches!(classify("=orphan"), Line::Malformed(_)));
    }

    #[test]
    fn test_parse_basic() {
        let store = parse("a=1\n[g]\nb=2\n".as_bytes()).unwrap();
        assert_eq!(store.get(None, "a"), Some("1"));
        assert_eq!(store.get(Some("g"), "b"), Some("2"));
    }

    #[test]
    fn test_parse_crlf_and_missing_final_newline() {
        let store = parse("a=1\r\n[g]\r\nb=2".as_bytes()).unwrap();
        assert_eq!(store.get(None, "a"), Some("1"));
        assert_eq!(store.get(Some("g"), "b"), Some("2"));
    }

    #[test]
    fn test_parse_value_kept_verbatim() {
        let store = parse("key= spaced = text \n".as_bytes()).unwrap();
        assert_eq!(store.get(None, "key"), Some(" spaced = text "));
    }

    #[test]
    fn test_parse_repeated_header_appends() {
        let store = parse("[g]\na=1\n[other]\nx=9\n[g]\nb=2\n".as_bytes()).unwrap();
        let group = store.group(Some("g")).unwrap();
        let keys: Vec<&str> = group.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        // Only one group named "g" exists
        assert_eq!(store.groups().filter(|g| g.name() == Some("g")).count(), 1);
    }

    #[test]
    fn test_parse_duplicate_key_first_wins() {
        let store = parse("[g]\na=first\na=second\n".as_bytes()).unwrap();
        assert_eq!(store.get(Some("g"), "a"), Some("first"));
        assert_eq!(store.group(Some("g")).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_drops_malformed_lines() {
        let store = parse("garbage\na=1\n[broken\nb=2\n=c\n".as_bytes()).unwrap();
        assert_eq!(store.get(None, "a"), Some("1"));
        // The broken header never switched groups
        assert_eq!(store.get(None, "b"), Some("2"));
        assert!(!store.exists(None, ""));
    }

    #[test]
    fn test_parse_empty_header_creates_no_group() {
        let store = parse("[]\na=1\n".as_bytes()).unwrap();
        assert!(store.group(Some("")).is_none());
        assert_eq!(store.get(None, "a"), Some("1"));
    }

    #[test]
    fn test_overlong_line_truncated() {
        let long_value = "v".repeat(MAX_LINE_LEN * 2);
        let input = format!("key={}\nafter=1\n", long_value);
        let store = parse(input.as_bytes()).unwrap();

        let text = store.get(None, "key").unwrap();
        assert_eq!(text.len(), MAX_LINE_LEN - "key=".len());
        // Truncation does not derail the rest of the stream
        assert_eq!(store.get(None, "after"), Some("1"));
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // Multi-byte char straddling the limit must not split
        let mut value = "a".repeat(MAX_LINE_LEN - "key=".len() - 1);
        value.push('\u{00e9}'); // 2 bytes, starts at the last allowed byte
        let input = format!("key={}\n", value);
        let store = parse(input.as_bytes()).unwrap();

        let text = store.get(None, "key").unwrap();
        assert!(text.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_parse_empty_stream() {
        let store = parse("".as_bytes()).unwrap();
        assert!(store.root().is_empty());
        assert_eq!(store.groups().count(), 1);
    }
}
