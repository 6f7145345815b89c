//! Protect/restore helper
//!
//! Some passes need to hide a fragment of the stylesheet from a blanket
//! substitution and put it back afterwards (pseudo-class colons, `calc()`
//! bodies, the box model hack token). The fragment is swapped for a marker
//! that cannot occur in the document and restored verbatim later.

/// First code point of the Unicode private use area.
const PRIVATE_USE_START: u32 = 0xE000;

/// Last code point of the Unicode private use area.
const PRIVATE_USE_END: u32 = 0xF8FF;

/// Table of markers and the text they stand in for.
///
/// Markers look like `<open>TAG<n><close>`, where `open` and `close` are
/// private use code points chosen so that neither occurs in the text the
/// table was built for. Markers therefore never collide with the document,
/// contain no whitespace and no CSS punctuation.
#[derive(Debug)]
pub struct Placeholders {
    open: char,
    close: char,
    saved: Vec<(String, String)>,
}

impl Placeholders {
    /// Build a table whose markers cannot collide with `text`.
    pub fn for_text(text: &str) -> Self {
        let mut unused = (PRIVATE_USE_START..=PRIVATE_USE_END)
            .filter_map(char::from_u32)
            .filter(|c| !text.contains(*c));

        // A document containing every private use code point is not CSS
        // anyone writes; fall back to the edges of the range.
        let open = unused.next().unwrap_or('\u{E000}');
        let close = unused.next().unwrap_or('\u{F8FF}');

        Self {
            open,
            close,
            saved: Vec::new(),
        }
    }

    /// Record `original` and return the marker that replaces it.
    ///
    /// Each call yields a distinct marker, numbered in insertion order.
    pub fn protect(&mut self, tag: &str, original: &str) -> String {
        let marker = format!("{}{}{}{}", self.open, tag, self.saved.len(), self.close);
        self.saved.push((marker.clone(), original.to_string()));
        marker
    }

    /// Replace every recorded marker in `text` with its original.
    ///
    /// Runs in a single sweep over `text`, however many markers were handed out.
    pub fn restore(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(open_at) = rest.find(self.open) {
            result.push_str(&rest[..open_at]);
            let candidate = &rest[open_at..];
            match self.lookup(candidate) {
                Some((marker_len, original)) => {
                    result.push_str(original);
                    rest = &candidate[marker_len..];
                }
                None => {
                    result.push(self.open);
                    rest = &candidate[self.open.len_utf8()..];
                }
            }
        }
        result.push_str(rest);
        result
    }

    /// Match a marker at the start of `candidate`, returning its length and
    /// the original text.
    fn lookup<'a>(&'a self, candidate: &str) -> Option<(usize, &'a str)> {
        let close_at = candidate.find(self.close)?;
        let marker = &candidate[..close_at + self.close.len_utf8()];
        let inner = &candidate[self.open.len_utf8()..close_at];

        // The trailing number is the marker's index in the table
        let digits_at = inner.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        let index: usize = inner[digits_at..].parse().ok()?;
        let (saved, original) = self.saved.get(index)?;
        (saved == marker).then_some((marker.len(), original.as_str()))
    }

    /// Whether nothing has been protected yet.
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}
