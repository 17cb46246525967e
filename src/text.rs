//! Width-aware string shaping for fixed-width terminal cells.
//!
//! Every measurement here is in display columns (via `unicode-width`), never
//! bytes or chars, so wide and multi-byte names stay aligned in the grid.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Single-column ellipsis used by [`center_truncate`].
pub const ELLIPSIS: char = '…';

/// Suffix appended by [`end_truncate`].
const END_SUFFIX: &str = "...";

/// Width used by [`end_truncate`] when called with a zero width.
pub const DEFAULT_SHORT_WIDTH: usize = 10;

/// Breadcrumb rendering of the filesystem root.
const ROOT_MARKER: &str = " /";
/// Prefix put in front of every breadcrumb segment.
const SEGMENT_SEPARATOR: &str = " / ";
/// Marker standing in for the segments dropped from the middle of a breadcrumb.
const MIDDLE_ELLIPSIS: &str = " / ...";

/// On-screen column count of `s`.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Collect leading chars of `chars` whose summed width stays within `budget`.
///
/// Stops before the first char that would overflow, so a wide char is never
/// half-included.
fn take_width<I>(chars: I, budget: usize) -> Vec<char>
where
    I: Iterator<Item = char>,
{
    let mut used = 0;
    let mut taken = Vec::new();
    for ch in chars {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        taken.push(ch);
    }
    taken
}

/// Replace the middle of `s` with `…` so the result fits in `width` columns.
///
/// The head keeps `(width - 1) / 2` columns and the tail keeps the rest.
/// Strings that already fit are returned unchanged.
pub fn center_truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let head_budget = budget / 2;
    let tail_budget = budget - head_budget;

    let head: String = take_width(s.chars(), head_budget).into_iter().collect();
    let tail: String = take_width(s.chars().rev(), tail_budget)
        .into_iter()
        .rev()
        .collect();

    format!("{head}{ELLIPSIS}{tail}")
}

/// Keep the start of `s` and append `...` so the result fits in `max_width`.
///
/// A `max_width` of zero falls back to [`DEFAULT_SHORT_WIDTH`].
pub fn end_truncate(s: &str, max_width: usize) -> String {
    let max_width = if max_width == 0 {
        DEFAULT_SHORT_WIDTH
    } else {
        max_width
    };

    if display_width(s) <= max_width {
        return s.to_string();
    }

    let allowed = max_width.saturating_sub(display_width(END_SUFFIX));
    let prefix: String = take_width(s.chars(), allowed).into_iter().collect();
    format!("{prefix}{END_SUFFIX}")
}

/// Render `path` as ` / seg / seg ...`, compacting the middle when too wide.
///
/// When the full breadcrumb does not fit, segments are packed from both ends
/// toward the middle (always growing the narrower side first) and the gap is
/// marked with ` / ...`.
pub fn breadcrumb(path: &str, max_width: usize) -> String {
    let segments: Vec<String> = path
        .split('/')
        .filter(|part| !part.is_empty())
        .map(|part| format!("{SEGMENT_SEPARATOR}{part}"))
        .collect();

    if segments.is_empty() {
        return ROOT_MARKER.to_string();
    }

    let full = segments.concat();
    if display_width(&full) <= max_width {
        return full;
    }

    let ellipsis_width = display_width(MIDDLE_ELLIPSIS);
    if max_width <= ellipsis_width {
        return MIDDLE_ELLIPSIS.to_string();
    }
    let avail = max_width - ellipsis_width;

    // `left` covers segments[..i], `right` covers segments[j..]
    let mut i = 0;
    let mut j = segments.len();
    let mut left_width = 0;
    let mut right_width = 0;

    while i < j {
        if left_width <= right_width {
            let w = display_width(&segments[i]);
            if left_width + right_width + w > avail {
                break;
            }
            left_width += w;
            i += 1;
        } else {
            let w = display_width(&segments[j - 1]);
            if left_width + right_width + w > avail {
                break;
            }
            right_width += w;
            j -= 1;
        }
    }

    format!(
        "{}{}{}",
        segments[..i].concat(),
        MIDDLE_ELLIPSIS,
        segments[j..].concat()
    )
}

/// Lay `items` out on one line of `total_width` columns, spreading the free
/// space over the gaps between them.
///
/// Every gap gets at least one space; leftover spaces go to the leftmost gaps.
/// Items wider than `total_width` overflow rather than being clipped.
pub fn justify_with_gaps<S: AsRef<str>>(items: &[S], total_width: usize) -> String {
    match items {
        [] => return String::new(),
        [only] => return only.as_ref().to_string(),
        _ => {}
    }

    let items_width: usize = items.iter().map(|item| display_width(item.as_ref())).sum();
    let gaps = items.len() - 1;
    let space_remaining = total_width.saturating_sub(items_width).max(gaps);
    let per_gap = space_remaining / gaps;
    let extra = space_remaining % gaps;

    let mut line = String::with_capacity(items_width + space_remaining);
    for (i, item) in items.iter().enumerate() {
        line.push_str(item.as_ref());
        if i < gaps {
            let spaces = if i < extra { per_gap + 1 } else { per_gap };
            line.push_str(&" ".repeat(spaces));
        }
    }
    line
}

/// Format bytes with binary units and one decimal, e.g. `12.0 KB`.
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}

#[cfg(test)]
mod tests {
    use super::*;

    // === center_truncate ===

    #[test]
    fn center_truncate_keeps_fitting_strings() {
        assert_eq!(center_truncate("report.pdf", 10), "report.pdf");
        assert_eq!(center_truncate("report.pdf", 40), "report.pdf");
        assert_eq!(center_truncate("", 0), "");
    }

    #[test]
    fn center_truncate_odd_width_is_symmetric() {
        assert_eq!(center_truncate("abcdefghij", 7), "abc…hij");
    }

    #[test]
    fn center_truncate_even_width_gives_tail_the_remainder() {
        assert_eq!(center_truncate("abcdefghij", 8), "abc…ghij");
    }

    #[test]
    fn center_truncate_tiny_widths() {
        assert_eq!(center_truncate("abcdef", 1), "…");
        assert_eq!(center_truncate("abcdef", 2), "…f");
        assert_eq!(center_truncate("abcdef", 0), "");
    }

    #[test]
    fn center_truncate_never_splits_multibyte_chars() {
        let out = center_truncate("ééééééééééé", 5);
        assert_eq!(out, "éé…éé");
    }

    #[test]
    fn center_truncate_fits_width_for_wide_chars() {
        let names = [
            "[F] 日本語のファイル名.txt",
            "[D] 한국어_디렉터리_이름",
            "[F] a-very-long-ascii-file-name-that-goes-on.tar.gz",
            "[F] mixed日本ascii한국어.md",
        ];
        for name in names {
            for w in 4..40 {
                let out = center_truncate(name, w);
                assert!(
                    display_width(&out) <= w,
                    "{name:?} at {w} gave {out:?} ({} cols)",
                    display_width(&out)
                );
                if display_width(name) <= w {
                    assert_eq!(out, name);
                }
            }
        }
    }

    // === end_truncate ===

    #[test]
    fn end_truncate_keeps_fitting_strings() {
        assert_eq!(end_truncate("notes.md", 8), "notes.md");
    }

    #[test]
    fn end_truncate_appends_suffix() {
        assert_eq!(end_truncate("hello_world.txt", 8), "hello...");
    }

    #[test]
    fn end_truncate_zero_width_uses_default() {
        assert_eq!(end_truncate("short", 0), "short");
        assert_eq!(end_truncate("abcdefghijklmnop", 0), "abcdefg...");
    }

    #[test]
    fn end_truncate_stops_before_overflowing_wide_char() {
        assert_eq!(end_truncate("日本語テキスト", 8), "日本...");
    }

    #[test]
    fn end_truncate_smaller_than_suffix() {
        assert_eq!(end_truncate("abcdef", 2), "...");
    }

    // === breadcrumb ===

    #[test]
    fn breadcrumb_root() {
        assert_eq!(breadcrumb("/", 80), " /");
        assert_eq!(breadcrumb("", 80), " /");
    }

    #[test]
    fn breadcrumb_fits_verbatim() {
        assert_eq!(
            breadcrumb("/home/user/projects", 80),
            " / home / user / projects"
        );
    }

    #[test]
    fn breadcrumb_round_trips_every_segment_when_it_fits() {
        let path = "/srv/data/2024/archive/photos";
        let crumb = breadcrumb(path, 200);
        let rebuilt: Vec<&str> = crumb.split(" / ").filter(|s| !s.is_empty()).collect();
        assert_eq!(rebuilt, vec!["srv", "data", "2024", "archive", "photos"]);
    }

    #[test]
    fn breadcrumb_minimal_packing() {
        let out = breadcrumb("/a/b/c/d/e", 10);
        assert_eq!(out, " / a / ...");
        assert!(display_width(&out) <= 10);
    }

    #[test]
    fn breadcrumb_packs_from_both_ends() {
        let out = breadcrumb("/usr/local/share/applications/foo", 30);
        assert_eq!(out, " / usr / local / ... / foo");
    }

    #[test]
    fn breadcrumb_only_ellipsis_when_too_narrow() {
        assert_eq!(breadcrumb("/usr/local/share", 6), " / ...");
        assert_eq!(breadcrumb("/usr/local/share", 3), " / ...");
    }

    #[test]
    fn breadcrumb_never_exceeds_width_once_compacted() {
        let path = "/home/someone/very/deep/nested/directory/structure/leaf";
        for w in 7..60 {
            let out = breadcrumb(path, w);
            assert!(display_width(&out) <= w, "width {w} gave {out:?}");
        }
    }

    #[test]
    fn breadcrumb_measures_wide_segments_in_columns() {
        let path = "/home/日本語/ディレクトリ/한국어/leaf";
        assert_eq!(breadcrumb(path, 29), " / home / 日本語 / ... / leaf");
        for w in 7..60 {
            let out = breadcrumb(path, w);
            assert!(display_width(&out) <= w, "width {w} gave {out:?}");
        }
    }

    // === justify_with_gaps ===

    #[test]
    fn justify_handles_zero_and_one_item() {
        let none: [&str; 0] = [];
        assert_eq!(justify_with_gaps(&none, 20), "");
        assert_eq!(justify_with_gaps(&["solo"], 20), "solo");
    }

    #[test]
    fn justify_date_and_size() {
        let line = justify_with_gaps(&["2024-01-01", "12.0 KB"], 25);
        assert_eq!(line, "2024-01-01        12.0 KB");
        assert_eq!(display_width(&line), 25);
    }

    #[test]
    fn justify_counts_wide_chars_as_two_columns() {
        let line = justify_with_gaps(&["日本語", "1.0 KB"], 20);
        assert_eq!(line, "日本語        1.0 KB");
        assert_eq!(display_width(&line), 20);
    }

    #[test]
    fn justify_gives_remainder_to_leftmost_gaps() {
        assert_eq!(justify_with_gaps(&["a", "b", "c"], 8), "a   b  c");
    }

    #[test]
    fn justify_keeps_one_space_on_overflow() {
        assert_eq!(justify_with_gaps(&["hello", "world"], 4), "hello world");
    }

    // === format_size ===

    #[test]
    fn format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn format_size_binary_units() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(12 * 1024), "12.0 KB");
        assert_eq!(format_size(1536 * 1024), "1.5 MB");
        assert_eq!(format_size(1 << 30), "1.0 GB");
        assert_eq!(format_size(u64::MAX), "16.0 EB");
    }
}
