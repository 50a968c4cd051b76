/// Bring an arbitrary string into fully percent-encoded form.
///
/// - no `%XX` anywhere: the whole input is encoded
/// - `%XX` present: decode, re-encode, keep the input only if nothing changed
/// - malformed escapes: the raw input is encoded, `%` taken literally
///
/// Applying it twice yields the same result as applying it once.
///
/// Only RFC 3986 unreserved characters stay literal, so `! * ' ( )` are
/// escaped too: `a(b%20` becomes `a%28b%20`.
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    if !has_escape(input) {
        return urlencoding::encode(input).into_owned();
    }

    match strict_decode(input) {
        Some(decoded) => {
            let re_encoded = urlencoding::encode(&decoded);
            if re_encoded != input {
                // partially encoded
                re_encoded.into_owned()
            } else {
                input.to_string()
            }
        }
        None => urlencoding::encode(input).into_owned(),
    }
}

/// True if `s` contains a `%` followed by two hex digits.
pub fn has_escape(s: &str) -> bool {
    s.as_bytes()
        .windows(3)
        .any(|w| w[0] == b'%' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit())
}

/// Percent-decode, failing on a dangling `%` or on bytes that are not UTF-8.
///
/// `urlencoding::decode` passes malformed escapes through untouched, so they
/// are rejected here first.
pub fn strict_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    urlencoding::decode(s).ok().map(|c| c.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_plain_input_is_encoded() {
        assert_eq!(
            normalize("solana-action:https://example.com/a?b=1"),
            "solana-action%3Ahttps%3A%2F%2Fexample.com%2Fa%3Fb%3D1"
        );
    }

    #[test]
    fn test_fully_encoded_is_untouched() {
        let s = "https%3A%2F%2Fexample.com%2Faction";
        assert_eq!(normalize(s), s);
    }

    #[test]
    fn test_partially_encoded_is_completed() {
        assert_eq!(
            normalize("https://example.com/a%20b"),
            "https%3A%2F%2Fexample.com%2Fa%20b"
        );
    }

    #[test]
    fn test_sub_delims_are_escaped() {
        assert_eq!(normalize("a(b%20"), "a%28b%20");
        assert_eq!(normalize("%21%2A%27%28%29"), "%21%2A%27%28%29");
    }

    #[test]
    fn test_malformed_escape_encodes_raw() {
        assert_eq!(normalize("%41%zz"), "%2541%25zz");
        assert_eq!(normalize("100%"), "100%25");
    }

    #[test]
    fn test_invalid_utf8_escape_encodes_raw() {
        assert_eq!(normalize("a%FFb"), "a%25FFb");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "abc",
            "A",
            "https://example.com/?a=b&c=d",
            "https%3A%2F%2Fexample.com",
            "https://example.com/a%20b",
            "%41%zz",
            "100%",
            "a%FFb",
            "%",
            "%%%",
            "ünïcødé/path",
            "%C3%BC",
            "sp ace+plus",
        ];
        for s in inputs {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn test_has_escape() {
        assert!(has_escape("a%2Fb"));
        assert!(has_escape("%af"));
        assert!(!has_escape("a%2"));
        assert!(!has_escape("%g1"));
        assert!(!has_escape("plain"));
    }

    #[test]
    fn test_strict_decode() {
        assert_eq!(strict_decode("a%2Fb").as_deref(), Some("a/b"));
        assert_eq!(strict_decode("%"), None);
        assert_eq!(strict_decode("ab%2"), None);
        assert_eq!(strict_decode("%FF"), None);
    }
}
