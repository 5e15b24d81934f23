//! `show-options` output parser and its canonical re-serialization.

use std::collections::HashMap;
use std::fmt::Write as _;

/// Option name to option value, as reported by `tmux show-options`.
pub type Options = HashMap<String, String>;

/// Parse the raw output of `tmux show-options [flags]`.
///
/// Each line has the shape `<key><whitespace><value>`. Lines that do not
/// (blank lines, error text, single-character keys) are skipped. A later
/// line overwrites an earlier one with the same key.
pub fn parse_options(output: &[u8]) -> Options {
    let text = String::from_utf8_lossy(output);
    let mut options = Options::new();
    for (idx, line) in text.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match parse_option_line(line) {
            Some((key, value)) => {
                options.insert(key.to_string(), value.to_string());
            }
            None => {
                if !line.trim().is_empty() {
                    tracing::trace!(line_num = idx + 1, line, "skipping unrecognized option line");
                }
            }
        }
    }
    options
}

/// Split one output line into `(key, value)`.
///
/// The key is `@` or a word/hyphen character followed by at least one more
/// word/hyphen character. The value is everything after the first whitespace
/// run, untrimmed, with one layer of surrounding double quotes removed.
pub fn parse_option_line(line: &str) -> Option<(&str, &str)> {
    let s = line.trim_start_matches(is_space);
    let first = s.chars().next()?;
    if first != '@' && !is_key_char(first) {
        return None;
    }
    // `first` is ASCII, so byte 1 is a char boundary.
    let key_end = s[1..]
        .find(|c: char| !is_key_char(c))
        .map_or(s.len(), |i| i + 1);
    if key_end < 2 {
        return None;
    }
    let (key, rest) = s.split_at(key_end);
    let raw = rest.trim_start_matches(is_space);
    if raw.len() == rest.len() {
        return None;
    }
    Some((key, unquote(raw)))
}

/// Strip exactly one pair of surrounding double quotes, if present.
fn unquote(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Write options back out in `show-options` form, one line per key, sorted.
///
/// Values are quoted when [`parse_options`] would otherwise not read them
/// back unchanged: whitespace, empty values, or values already wrapped in
/// quotes. Values containing line breaks cannot be represented.
pub fn format_options(options: &Options) -> String {
    let mut keys: Vec<&String> = options.keys().collect();
    keys.sort();

    let mut out = String::new();
    for key in keys {
        let value = &options[key];
        if needs_quotes(value) {
            let _ = writeln!(out, "{key} \"{value}\"");
        } else {
            let _ = writeln!(out, "{key} {value}");
        }
    }
    out
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.contains(char::is_whitespace)
        || (value.len() >= 2 && value.starts_with('"') && value.ends_with('"'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(&str, &str)]) -> Options {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_output() {
        assert!(parse_options(b"").is_empty());
    }

    #[test]
    fn plain_value() {
        assert_eq!(
            parse_options(b"hello-world FooBar"),
            opts(&[("hello-world", "FooBar")])
        );
    }

    #[test]
    fn quoted_value() {
        assert_eq!(
            parse_options(br#"hello-world "Foo Bar""#),
            opts(&[("hello-world", "Foo Bar")])
        );
    }

    #[test]
    fn quoted_value_after_wide_separator() {
        assert_eq!(
            parse_options(br#"hello-world   "Foo Bar""#),
            opts(&[("hello-world", "Foo Bar")])
        );
    }

    #[test]
    fn quoted_value_keeps_inner_spacing() {
        assert_eq!(
            parse_options(br#"hello-world "  Foo Bar   ""#),
            opts(&[("hello-world", "  Foo Bar   ")])
        );
    }

    #[test]
    fn user_option() {
        assert_eq!(parse_options(b"@foo bar"), opts(&[("@foo", "bar")]));
    }

    #[test]
    fn multi_line_with_blank_lines() {
        let output =
            b"\n  @foo bar\n@themepack \"powerline/default/green\"\nstatus-left This Is Left\n";
        assert_eq!(
            parse_options(output),
            opts(&[
                ("@foo", "bar"),
                ("@themepack", "powerline/default/green"),
                ("status-left", "This Is Left"),
            ])
        );
    }

    #[test]
    fn crlf_line_endings() {
        let output = b"status on\r\nstatus-left \"[#S] \"\r\n";
        assert_eq!(
            parse_options(output),
            opts(&[("status", "on"), ("status-left", "[#S] ")])
        );
    }

    #[test]
    fn unquoted_value_keeps_interior_and_trailing_whitespace() {
        assert_eq!(
            parse_option_line("status-right a  b\t "),
            Some(("status-right", "a  b\t "))
        );
    }

    #[test]
    fn lone_quote_is_not_stripped() {
        assert_eq!(parse_option_line(r#"foo ""#), Some(("foo", "\"")));
        assert_eq!(parse_option_line(r#"foo """#), Some(("foo", "")));
    }

    #[test]
    fn only_one_quote_layer_is_stripped() {
        assert_eq!(parse_option_line(r#"foo ""x"""#), Some(("foo", "\"x\"")));
        assert_eq!(parse_option_line(r#"foo "x\"y""#), Some(("foo", "x\\\"y")));
    }

    #[test]
    fn half_quoted_value_is_kept() {
        assert_eq!(parse_option_line(r#"foo "bar"#), Some(("foo", "\"bar")));
        assert_eq!(parse_option_line(r#"foo bar""#), Some(("foo", "bar\"")));
    }

    #[test]
    fn empty_value_after_separator() {
        assert_eq!(parse_option_line("default-command "), Some(("default-command", "")));
    }

    #[test]
    fn key_without_value_is_skipped() {
        assert_eq!(parse_option_line("status"), None);
        assert_eq!(parse_option_line("   "), None);
        assert_eq!(parse_option_line(""), None);
    }

    #[test]
    fn single_character_key_is_skipped() {
        assert_eq!(parse_option_line("x value"), None);
        assert_eq!(parse_option_line("@ value"), None);
    }

    #[test]
    fn malformed_keys_are_skipped() {
        assert_eq!(parse_option_line("@@foo bar"), None);
        assert_eq!(parse_option_line("foo=bar baz"), None);
        assert_eq!(parse_option_line("#comment here"), None);
    }

    #[test]
    fn array_option_keys_are_skipped() {
        // tmux prints array options as `name[0] value`.
        assert_eq!(parse_option_line("update-environment[0] DISPLAY"), None);
    }

    #[test]
    fn duplicate_key_last_wins() {
        assert_eq!(
            parse_options(b"status off\nstatus on\n"),
            opts(&[("status", "on")])
        );
    }

    #[test]
    fn malformed_lines_do_not_affect_neighbours() {
        let output = b"no server running on /tmp/tmux-0/default\nx 1\nbase-index 1\n";
        let parsed = parse_options(output);
        assert_eq!(parsed.get("base-index").map(String::as_str), Some("1"));
        assert_eq!(
            parsed.get("no").map(String::as_str),
            Some("server running on /tmp/tmux-0/default")
        );
        assert!(!parsed.contains_key("x"));
    }

    #[test]
    fn invalid_utf8_is_lossy() {
        let parsed = parse_options(b"status-left \xff\xfe\n");
        assert_eq!(parsed.get("status-left").map(String::as_str), Some("\u{fffd}\u{fffd}"));
    }

    #[test]
    fn format_sorts_and_quotes() {
        let options = opts(&[
            ("status-left", "This Is Left"),
            ("@foo", "bar"),
            ("default-command", ""),
            ("quoted", "\"x\""),
        ]);
        assert_eq!(
            format_options(&options),
            "@foo bar\ndefault-command \"\"\nquoted \"\"x\"\"\nstatus-left \"This Is Left\"\n"
        );
    }

    #[test]
    fn format_then_parse_is_identity() {
        let options = opts(&[
            ("@themepack", "powerline/default/green"),
            ("status-left", "  Foo Bar   "),
            ("lone", "\""),
        ]);
        assert_eq!(parse_options(format_options(&options).as_bytes()), options);
    }
}
