//! Stripping of model reasoning markup from completion output.
//!
//! Reasoning-style models wrap their internal deliberation in paired
//! markers inside the reply text. [`sanitize_response`] removes every
//! such region before the reply is recorded or displayed. The removal is
//! an explicit two-marker scan (find the next open marker, find the next
//! close marker after it, splice), not a regex, so worst-case behavior is
//! linear and the unmatched-marker case is handled explicitly.

/// Opening marker of a reasoning region.
pub const THINK_OPEN: &str = "<think>";
/// Closing marker of a reasoning region.
pub const THINK_CLOSE: &str = "</think>";

/// Convert raw completion output into display-ready text.
///
/// Removes every `<think>…</think>` region, markers inclusive, then trims
/// leading and trailing whitespace.
pub fn sanitize_response(raw: &str) -> String {
    strip_delimited(raw, THINK_OPEN, THINK_CLOSE)
        .trim()
        .to_string()
}

/// Remove every region delimited by a matched `open`/`close` pair.
///
/// Regions may span newlines; multiple non-overlapping regions are all
/// removed. Removal requires a matched pair: an `open` marker with no
/// later `close` is not a match, and it is kept along with everything
/// after it. The result is never longer than the input.
pub fn strip_delimited(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    loop {
        let Some(start) = rest.find(open) else {
            out.push_str(rest);
            break;
        };
        let after_open = start + open.len();
        match rest.get(after_open..).and_then(|tail| tail.find(close)) {
            Some(close_offset) => {
                out.push_str(rest.get(..start).unwrap_or_default());
                let resume = after_open + close_offset + close.len();
                rest = rest.get(resume..).unwrap_or_default();
            }
            None => {
                // Unterminated open marker: no pair, nothing removed.
                out.push_str(rest);
                break;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_single_paired_region() {
        let raw = "A<think>B</think>C";
        assert_eq!(sanitize_response(raw), "AC");
    }

    #[test]
    fn removes_multiple_regions_spanning_lines() {
        let raw = "<think>x</think>keep<think>y\nz</think>";
        assert_eq!(sanitize_response(raw), "keep");
    }

    #[test]
    fn text_without_markers_is_trimmed_only() {
        assert_eq!(sanitize_response("  plain reply \n"), "plain reply");
    }

    #[test]
    fn unterminated_open_marker_is_preserved() {
        assert_eq!(sanitize_response("keep<think>unclosed"), "keep<think>unclosed");
    }

    #[test]
    fn region_covering_entire_input_yields_empty() {
        assert_eq!(sanitize_response("<think>only thoughts</think>"), "");
    }

    #[test]
    fn back_to_back_regions() {
        let raw = "<think>a</think><think>b</think>done";
        assert_eq!(sanitize_response(raw), "done");
    }

    #[test]
    fn unterminated_marker_after_removed_region() {
        let raw = "<think>a</think>keep<think>tail";
        assert_eq!(sanitize_response(raw), "keep<think>tail");
    }

    #[test]
    fn output_never_longer_than_input() {
        for raw in [
            "",
            "plain",
            "<think></think>",
            "a<think>b</think>c",
            "<think>open only",
            "</think>close only",
        ] {
            assert!(strip_delimited(raw, THINK_OPEN, THINK_CLOSE).len() <= raw.len());
        }
    }

    #[test]
    fn stray_close_marker_is_kept() {
        assert_eq!(sanitize_response("a</think>b"), "a</think>b");
    }
}
