//! Keyword scan of captured output.
//!
//! Output is only worth showing when it contains `WARNING` or `ERROR`. The
//! excerpt starts at whichever keyword appears first and stops before the
//! next `[INFO]` line marker.

pub const WARNING: &[u8] = b"WARNING";
pub const ERROR: &[u8] = b"ERROR";
pub const INFO_MARKER: &[u8] = b"[INFO]";

/// Keyword that opened an excerpt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Warning,
    Error,
}

/// Part of the captured output to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub keyword: Keyword,
    /// Byte offset of the keyword in the scanned buffer.
    pub start: usize,
    /// Byte offset one past the last byte of the excerpt.
    pub end: usize,
    pub text: String,
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn first_keyword(buf: &[u8]) -> Option<(Keyword, usize)> {
    match (find_bytes(buf, WARNING), find_bytes(buf, ERROR)) {
        (None, None) => None,
        (Some(warning), None) => Some((Keyword::Warning, warning)),
        (None, Some(error)) => Some((Keyword::Error, error)),
        (Some(warning), Some(error)) if error < warning => Some((Keyword::Error, error)),
        (Some(warning), Some(_)) => Some((Keyword::Warning, warning)),
    }
}

/// Find the excerpt to display, if the output contains a keyword.
pub fn find_excerpt(buf: &[u8]) -> Option<Excerpt> {
    let (keyword, start) = first_keyword(buf)?;
    let end = find_bytes(&buf[start..], INFO_MARKER).map_or(buf.len(), |offset| start + offset);

    Some(Excerpt {
        keyword,
        start,
        end,
        text: String::from_utf8_lossy(&buf[start..end]).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keyword_no_excerpt() {
        assert_eq!(find_excerpt(b""), None);
        assert_eq!(find_excerpt(b"[INFO] Fetching https://dl.google.com\n"), None);
        assert_eq!(find_excerpt(b"warning: lowercase does not count"), None);
    }

    #[test]
    fn warning_only() {
        let buf = b"Fetching list\nWARNING: proxy not set\n";
        let excerpt = find_excerpt(buf).unwrap();
        assert_eq!(excerpt.keyword, Keyword::Warning);
        assert_eq!(excerpt.start, 14);
        assert_eq!(excerpt.text, "WARNING: proxy not set\n");
    }

    #[test]
    fn error_only() {
        let buf = b"ok\nERROR: SDK location not found\n";
        let excerpt = find_excerpt(buf).unwrap();
        assert_eq!(excerpt.keyword, Keyword::Error);
        assert_eq!(excerpt.start, 3);
        assert_eq!(excerpt.text, "ERROR: SDK location not found\n");
    }

    #[test]
    fn error_before_warning_starts_at_error() {
        let buf = b"ERROR: first\nWARNING: second\n";
        let excerpt = find_excerpt(buf).unwrap();
        assert_eq!(excerpt.keyword, Keyword::Error);
        assert_eq!(excerpt.start, 0);
        assert_eq!(excerpt.text, "ERROR: first\nWARNING: second\n");
    }

    #[test]
    fn warning_before_error_starts_at_warning() {
        let buf = b"xx WARNING: first\nERROR: second\n";
        let excerpt = find_excerpt(buf).unwrap();
        assert_eq!(excerpt.keyword, Keyword::Warning);
        assert_eq!(excerpt.start, 3);
        assert_eq!(excerpt.text, "WARNING: first\nERROR: second\n");
    }

    #[test]
    fn excerpt_ends_before_info_marker() {
        let buf = b"ERROR: no network\n[INFO] retrying\n[INFO] done\n";
        let excerpt = find_excerpt(buf).unwrap();
        assert_eq!(excerpt.text, "ERROR: no network\n");
        assert_eq!(excerpt.end, 18);
    }

    #[test]
    fn info_marker_before_keyword_is_ignored() {
        let buf = b"[INFO] starting\nWARNING: slow mirror\n";
        let excerpt = find_excerpt(buf).unwrap();
        assert_eq!(excerpt.text, "WARNING: slow mirror\n");
        assert_eq!(excerpt.end, buf.len());
    }

    #[test]
    fn info_marker_directly_after_keyword() {
        let excerpt = find_excerpt(b"ERROR[INFO]").unwrap();
        assert_eq!(excerpt.text, "ERROR");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let buf = b"WARNING: \xff bad byte";
        let excerpt = find_excerpt(buf).unwrap();
        assert_eq!(excerpt.text, "WARNING: \u{fffd} bad byte");
    }

    #[test]
    fn keyword_split_across_end_is_not_found() {
        assert_eq!(find_excerpt(b"output ends with WARN"), None);
    }

    #[test]
    fn find_bytes_cases() {
        assert_eq!(find_bytes(b"abcabc", b"ca"), Some(2));
        assert_eq!(find_bytes(b"abc", b"abcd"), None);
        assert_eq!(find_bytes(b"abc", b""), Some(0));
        assert_eq!(find_bytes(b"", b"a"), None);
    }
}
