//! Guard name derivation
//!
//! Maps a header's absolute file path to its include-guard macro name.

use std::collections::HashSet;

use crate::config::GuardStyle;
use crate::error::{Error, Result};

/// Build the include-guard macro name for a header path.
///
/// The path is split on the primary delimiter and the configured number of
/// leading segments (the project-root depth) is dropped. The extension is
/// stripped from the final segment at the first occurrence of the secondary
/// delimiter. The remaining segments are uppercased and joined with `_`,
/// and the configured suffix is appended:
///
/// ```
/// use headguard_core::{build_guard_name, GuardStyle};
///
/// let style = GuardStyle { root_skip: 0, ..GuardStyle::default() };
/// let guard = build_guard_name("src/util/widget.hpp", &style).unwrap();
/// assert_eq!(guard, "SRC_UTIL_WIDGET_H_");
/// ```
///
/// Segments listed in `ignore_segments` and segments repeating an earlier
/// one (case-insensitive) are skipped. Scanning stops at the segment equal
/// to the file stem, so `widget/widget.hpp` contributes `WIDGET` once.
pub fn build_guard_name(path: &str, style: &GuardStyle) -> Result<String> {
    let segments: Vec<&str> = path.split(style.path_delimiter).collect();
    if segments.len() <= style.root_skip {
        return Err(Error::InvalidPath(format!(
            "'{}' has fewer than {} segments",
            path,
            style.root_skip + 1
        )));
    }
    let segments = &segments[style.root_skip..];

    let stem = segments[segments.len() - 1]
        .split(style.ext_delimiter)
        .next()
        .unwrap_or("");
    let stem_key = macro_key(stem);

    let mut seen: HashSet<String> = style.ignore_segments.iter().map(|s| macro_key(s)).collect();
    let mut tokens: Vec<String> = Vec::new();

    let last = segments.len() - 1;
    for (i, raw) in segments.iter().enumerate() {
        let segment = if i == last { stem } else { *raw };
        if segment.is_empty() {
            continue;
        }
        let key = macro_key(segment);
        if seen.contains(&key) {
            continue;
        }
        tokens.push(macro_token(segment));
        seen.insert(key.clone());
        if key == stem_key {
            break;
        }
    }

    if tokens.is_empty() {
        return Err(Error::InvalidPath(format!(
            "'{}' leaves no usable segments after skipping {}",
            path, style.root_skip
        )));
    }

    Ok(format!("{}{}", tokens.join("_"), style.suffix))
}

/// Uppercased segment form emitted into the guard name. Characters not
/// valid in a macro identifier are mapped to `_`.
fn macro_token(segment: &str) -> String {
    segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Lowercased dedup key for a segment, sanitized the same way as the
/// emitted token so `io.util` and `io_util` collide.
fn macro_key(segment: &str) -> String {
    segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(root_skip: usize) -> GuardStyle {
        GuardStyle {
            root_skip,
            ..GuardStyle::default()
        }
    }

    #[test]
    fn test_end_to_end_example() {
        // /users/dev/work/repos/proj/src/util/widget/widget.hpp, skip 5
        let guard =
            build_guard_name("/users/dev/work/repos/proj/src/util/widget/widget.hpp", &style(5))
                .unwrap();
        assert_eq!(guard, "SRC_UTIL_WIDGET_H_");
    }

    #[test]
    fn test_straight_line_derivation() {
        let guard = build_guard_name("src/net/socket.hpp", &style(0)).unwrap();
        assert_eq!(guard, "SRC_NET_SOCKET_H_");
    }

    #[test]
    fn test_include_segment_excluded() {
        let guard = build_guard_name("proj/include/util/timer.hpp", &style(1)).unwrap();
        assert_eq!(guard, "UTIL_TIMER_H_");
    }

    #[test]
    fn test_duplicate_segment_skipped() {
        // "util" repeats; the second occurrence contributes nothing
        let guard = build_guard_name("src/util/sub/Util/timer.hpp", &style(0)).unwrap();
        assert_eq!(guard, "SRC_UTIL_SUB_TIMER_H_");
    }

    #[test]
    fn test_early_stop_on_stem_match() {
        // Directory name equals file stem: WIDGET appears exactly once and
        // scanning stops there
        let guard = build_guard_name("src/widget/widget.hpp", &style(0)).unwrap();
        assert_eq!(guard, "SRC_WIDGET_H_");
    }

    #[test]
    fn test_early_stop_is_case_insensitive() {
        let guard = build_guard_name("src/Widget/widget.hpp", &style(0)).unwrap();
        assert_eq!(guard, "SRC_WIDGET_H_");
    }

    #[test]
    fn test_suffix_applied_verbatim() {
        let custom = GuardStyle {
            root_skip: 0,
            suffix: "_HPP".into(),
            ..GuardStyle::default()
        };
        let guard = build_guard_name("a/b.hpp", &custom).unwrap();
        assert_eq!(guard, "A_B_HPP");
    }

    #[test]
    fn test_extension_stripped_at_first_delimiter() {
        let guard = build_guard_name("src/parser.generated.hpp", &style(0)).unwrap();
        assert_eq!(guard, "SRC_PARSER_H_");
    }

    #[test]
    fn test_root_skip_exceeding_segments() {
        let err = build_guard_name("a/b/c.hpp", &style(5)).unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
    }

    #[test]
    fn test_all_segments_skipped() {
        let err = build_guard_name("include/include.hpp", &style(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
    }

    #[test]
    fn test_empty_segments_ignored() {
        let guard = build_guard_name("src//util/timer.hpp", &style(0)).unwrap();
        assert_eq!(guard, "SRC_UTIL_TIMER_H_");
    }

    #[test]
    fn test_non_identifier_chars_sanitized() {
        let guard = build_guard_name("my-lib/io.util/ring-buffer.hpp", &style(0)).unwrap();
        assert_eq!(guard, "MY_LIB_IO_UTIL_RING_BUFFER_H_");
    }

    #[test]
    fn test_custom_ignore_segments() {
        let custom = GuardStyle {
            root_skip: 0,
            ignore_segments: vec!["include".into(), "src".into()],
            ..GuardStyle::default()
        };
        let guard = build_guard_name("src/include/net/socket.hpp", &custom).unwrap();
        assert_eq!(guard, "NET_SOCKET_H_");
    }
}
