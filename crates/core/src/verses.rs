//! Verse-level pagination over song lyrics.
//!
//! Lyrics are stored as a single text with one verse per line. A verse page
//! is a contiguous run of those lines.

/// Separator between verses, used both to split and to rejoin.
pub const VERSE_SEPARATOR: char = '\n';

/// Default verse page (1-indexed).
pub const DEFAULT_VERSE_PAGE: usize = 1;

/// Default number of verses per page.
pub const DEFAULT_VERSE_PAGE_SIZE: usize = 5;

/// A 1-indexed verse page. Both values are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersePage {
    page: usize,
    page_size: usize,
}

impl VersePage {
    /// Build a verse page from caller input, coercing missing or
    /// non-positive values to the defaults.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_VERSE_PAGE),
            page_size: positive_or(page_size, DEFAULT_VERSE_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Half-open line range `[start, end)` this page covers, before clamping.
    fn bounds(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.page_size);
        (start, start.saturating_add(self.page_size))
    }
}

impl Default for VersePage {
    fn default() -> Self {
        Self {
            page: DEFAULT_VERSE_PAGE,
            page_size: DEFAULT_VERSE_PAGE_SIZE,
        }
    }
}

fn positive_or(value: Option<i64>, default: usize) -> usize {
    match value {
        Some(v) if v > 0 => usize::try_from(v).unwrap_or(usize::MAX),
        _ => default,
    }
}

/// Number of verses in `text`. Empty text has none.
pub fn verse_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split(VERSE_SEPARATOR).count()
    }
}

/// Return the verses of `text` on the given page, rejoined with
/// [`VERSE_SEPARATOR`].
///
/// Empty text and pages past the end both yield an empty string.
///
/// # Examples
///
/// ```
/// use songbook_core::verses::{paginate_verses, VersePage};
///
/// let text = "a\nb\nc\nd\ne";
/// assert_eq!(paginate_verses(text, VersePage::new(Some(1), Some(2))), "a\nb");
/// assert_eq!(paginate_verses(text, VersePage::new(Some(3), Some(2))), "e");
/// assert_eq!(paginate_verses(text, VersePage::new(Some(10), Some(2))), "");
/// ```
pub fn paginate_verses(text: &str, page: VersePage) -> String {
    if text.is_empty() {
        return String::new();
    }

    let verses: Vec<&str> = text.split(VERSE_SEPARATOR).collect();
    let total = verses.len();
    let (start, end) = page.bounds();

    if start >= total {
        return String::new();
    }
    let end = end.min(total);

    verses[start..end].join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const LYRICS: &str = "a\nb\nc\nd\ne";

    fn page(p: i64, size: i64) -> VersePage {
        VersePage::new(Some(p), Some(size))
    }

    #[test]
    fn first_page() {
        assert_eq!(paginate_verses(LYRICS, page(1, 2)), "a\nb");
    }

    #[test]
    fn last_page_is_clamped() {
        assert_eq!(paginate_verses(LYRICS, page(3, 2)), "e");
    }

    #[test]
    fn page_past_end_is_empty() {
        assert_eq!(paginate_verses(LYRICS, page(10, 2)), "");
    }

    #[test]
    fn empty_text_is_empty_for_any_page() {
        assert_eq!(paginate_verses("", page(1, 5)), "");
        assert_eq!(paginate_verses("", page(7, 1)), "");
    }

    #[test]
    fn whole_text_fits_on_default_page() {
        assert_eq!(paginate_verses(LYRICS, VersePage::default()), LYRICS);
    }

    #[test]
    fn non_positive_values_fall_back_to_defaults() {
        let p = VersePage::new(Some(0), Some(-3));
        assert_eq!(p.page(), DEFAULT_VERSE_PAGE);
        assert_eq!(p.page_size(), DEFAULT_VERSE_PAGE_SIZE);

        let p = VersePage::new(None, None);
        assert_eq!(p, VersePage::default());
    }

    #[test]
    fn blank_lines_count_as_verses() {
        let text = "a\n\nb";
        assert_eq!(verse_count(text), 3);
        assert_eq!(paginate_verses(text, page(2, 1)), "");
        assert_eq!(paginate_verses(text, page(3, 1)), "b");
    }

    #[test]
    fn huge_page_does_not_overflow() {
        assert_eq!(paginate_verses(LYRICS, page(i64::MAX, i64::MAX)), "");
    }

    #[test]
    fn verse_count_of_empty_text_is_zero() {
        assert_eq!(verse_count(""), 0);
        assert_eq!(verse_count(LYRICS), 5);
    }
}
