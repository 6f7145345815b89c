//! Pass 1: Remove comments
//!
//! Strips `/* ... */` blocks while preserving:
//! - Banner comments starting with `!` (`/*! license */`)
//! - The IE Mac hack pair (`/*\*/ ... /* */`)

use tracing::trace;

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// Remove all comment blocks that are not explicitly preserved.
///
/// An unterminated comment swallows the rest of the document unless it is a
/// `/*!` banner, in which case the document is left as it is from there on.
pub fn remove_comments(css: &str) -> String {
    let mut output = String::with_capacity(css.len());
    let mut state = CommentState::Normal;
    // Start of the text not yet copied to `output`
    let mut copied_to = 0;
    let mut search_from = 0;

    while let Some(offset) = css[search_from..].find(COMMENT_OPEN) {
        let start = search_from + offset;
        let body_start = start + COMMENT_OPEN.len();
        let preserve = css[body_start..].starts_with('!');

        let Some(close_offset) = css[body_start..].find(COMMENT_CLOSE) else {
            if !preserve {
                trace!(at = start, "Dropping unterminated comment");
                output.push_str(&css[copied_to..start]);
                return output;
            }
            break;
        };
        let end = body_start + close_offset;
        let after = end + COMMENT_CLOSE.len();

        if let CommentAction::Remove = classify(css, end, preserve, &mut state) {
            output.push_str(&css[copied_to..start]);
            copied_to = after;
        }
        search_from = after;
    }

    output.push_str(&css[copied_to..]);
    output
}

// ============================================================================
// Internal types and helpers
// ============================================================================

/// Tracks whether we're between the two halves of an IE Mac hack.
enum CommentState {
    Normal,
    InsideIeMac,
}

/// What to do with the comment just found.
enum CommentAction {
    Keep,
    Remove,
}

/// Decide the fate of a comment whose closing marker starts at `end`.
fn classify(css: &str, end: usize, preserve: bool, state: &mut CommentState) -> CommentAction {
    // `/*\*/` opens the IE Mac hack; the next comment closes it
    if css.as_bytes()[end - 1] == b'\\' {
        *state = CommentState::InsideIeMac;
        return CommentAction::Keep;
    }

    if matches!(state, CommentState::InsideIeMac) {
        *state = CommentState::Normal;
        return CommentAction::Keep;
    }

    if preserve {
        CommentAction::Keep
    } else {
        CommentAction::Remove
    }
}
