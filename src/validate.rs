//! Field validators for the trip forms.
//!
//! Both predicates are total: bad input yields `false`, and the caller picks
//! the message shown to the user.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: exactly one `@`, a dot in the domain, no whitespace anywhere.
static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").ok());

/// Absolute http(s) URL: host labels, optional port, optional path/query/fragment.
static URL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^https?://[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .ok()
});

fn pattern_matches(pattern: &LazyLock<Option<Regex>>, input: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(input))
}

/// Whether `input` is a single e-mail address such as `a@b.com`.
pub fn validate_email(input: &str) -> bool {
    pattern_matches(&EMAIL, input)
}

/// Whether `input` is an absolute `http` or `https` URL.
pub fn validate_url(input: &str) -> bool {
    pattern_matches(&URL, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(EMAIL.is_some());
        assert!(URL.is_some());
    }

    #[test]
    fn test_validate_email_cases() {
        struct TestCase {
            input:    &'static str,
            expected: bool,
        }

        let cases = [
            TestCase { input: "a@b.com", expected: true },
            TestCase { input: "First.Last+trip@Example.CO.uk", expected: true },
            TestCase { input: "guest@mail.example.com", expected: true },
            TestCase { input: "a@b", expected: false },
            TestCase { input: "a@b.", expected: false },
            TestCase { input: "a@.com", expected: false },
            TestCase { input: "@b.com", expected: false },
            TestCase { input: "a@@b.com", expected: false },
            TestCase { input: "a@b@c.com", expected: false },
            TestCase { input: "a b@c.com", expected: false },
            TestCase { input: " a@b.com", expected: false },
            TestCase { input: "a@b.com ", expected: false },
            TestCase { input: "", expected: false },
        ];

        for case in &cases {
            assert_eq!(validate_email(case.input), case.expected, "email {:?}", case.input);
        }
    }

    #[test]
    fn test_validate_url_cases() {
        struct TestCase {
            input:    &'static str,
            expected: bool,
        }

        let cases = [
            TestCase { input: "https://example.com", expected: true },
            TestCase { input: "http://example.com/", expected: true },
            TestCase { input: "HTTPS://Example.com/Path?q=1#top", expected: true },
            TestCase { input: "https://sub.example.co.uk:8443/a/b", expected: true },
            TestCase { input: "http://localhost:3333", expected: true },
            TestCase { input: "example.com", expected: false },
            TestCase { input: "ftp://example.com", expected: false },
            TestCase { input: "https://", expected: false },
            TestCase { input: "https://-bad.com", expected: false },
            TestCase { input: "https://exa mple.com", expected: false },
            TestCase { input: " https://example.com", expected: false },
            TestCase { input: "https://example.com/with space", expected: false },
            TestCase { input: "", expected: false },
        ];

        for case in &cases {
            assert_eq!(validate_url(case.input), case.expected, "url {:?}", case.input);
        }
    }
}
