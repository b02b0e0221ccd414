//! Logical/visual reordering maps under the Unicode Bidirectional Algorithm
//!
//! The whole source is processed with [`unicode_bidi`] (UAX #9), paragraph
//! by paragraph with an automatically detected base direction, and flattened
//! into two parallel permutations over *codepoint* indices:
//!
//! - `l2v[i]` is the visual position where a conformant renderer displays the
//!   logical codepoint at index `i`;
//! - `v2l[j]` is the inverse, so `v2l[l2v[i]] == i` for all `i`.
//!
//! Sources without any strongly right-to-left codepoint and without explicit
//! directional controls can never be displayed out of order, so the maps stay
//! empty for them and reordering checks downstream never fire.
use unicode_bidi::{BidiClass, BidiInfo, Level, bidi_class};

/// Logical-to-visual reordering maps for a whole source text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidiMap {
    l2v: Vec<u32>,
    v2l: Vec<u32>,
}

impl BidiMap {
    /// Run the bidirectional algorithm over the source and build both maps
    ///
    /// Returns empty maps when the source cannot be visually reordered.
    #[must_use]
    pub fn build(source: &str) -> Self {
        if !needs_processing(source) {
            return Self::default();
        }

        let char_count = source.chars().count();
        // char index for each byte position of a char start
        let mut byte_to_char = vec![0u32; source.len() + 1];
        for (char_idx, (byte_idx, _)) in source.char_indices().enumerate() {
            byte_to_char[byte_idx] = u32::try_from(char_idx).expect("source fits in u32 indices");
        }
        byte_to_char[source.len()] = u32::try_from(char_count).expect("source fits in u32 indices");

        let bidi_info = BidiInfo::new(source, None);
        let mut l2v = vec![0u32; char_count];
        let mut v2l = vec![0u32; char_count];
        for para in &bidi_info.paragraphs {
            // visual positions are assigned per paragraph, starting at the
            // paragraph's own char offset so that lines never interleave
            let mut visual = byte_to_char[para.range.start];
            let (levels, runs) = bidi_info.visual_runs(para, para.range.clone());
            for run in runs {
                let rtl = levels
                    .get(run.start)
                    .copied()
                    .unwrap_or_else(Level::ltr)
                    .is_rtl();
                let run_chars: Vec<u32> = source[run.clone()]
                    .char_indices()
                    .map(|(offset, _)| byte_to_char[run.start + offset])
                    .collect();
                let iter: Box<dyn Iterator<Item = u32>> = if rtl {
                    Box::new(run_chars.into_iter().rev())
                } else {
                    Box::new(run_chars.into_iter())
                };
                for logical in iter {
                    l2v[logical as usize] = visual;
                    v2l[visual as usize] = logical;
                    visual += 1;
                }
            }
        }
        Self { l2v, v2l }
    }

    /// Whether the source required no processing (pure LTR, no controls)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.l2v.is_empty()
    }

    /// The number of mapped codepoints (0 when the maps are empty)
    #[must_use]
    pub fn len(&self) -> usize {
        self.l2v.len()
    }

    /// Visual position of the logical codepoint at `index`
    #[must_use]
    pub fn logical_to_visual(&self, index: usize) -> usize {
        self.l2v[index] as usize
    }

    /// Logical index of the codepoint displayed at visual position `index`
    #[must_use]
    pub fn visual_to_logical(&self, index: usize) -> usize {
        self.v2l[index] as usize
    }
}

/// Check for strongly-RTL codepoints and explicit directional controls
///
/// The implicit marks LRM/RLM/ALM are covered through their bidi class.
fn needs_processing(source: &str) -> bool {
    source.chars().any(|c| {
        matches!(
            bidi_class(c),
            BidiClass::R
                | BidiClass::AL
                | BidiClass::RLE
                | BidiClass::RLO
                | BidiClass::RLI
                | BidiClass::LRE
                | BidiClass::LRO
                | BidiClass::LRI
                | BidiClass::FSI
                | BidiClass::PDI
                | BidiClass::PDF
        ) || c == '\u{200E}'
    })
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    fn reordered(source: &str) -> String {
        let map = BidiMap::build(source);
        (0..map.len())
            .map(|v| {
                source
                    .chars()
                    .nth(map.visual_to_logical(v))
                    .expect("index is in range")
            })
            .collect()
    }

    #[test]
    fn test_pure_ltr_is_empty() {
        assert!(BidiMap::build("def foo(): pass").is_empty());
        assert!(BidiMap::build("").is_empty());
        // neutral and weak characters alone don't trigger processing
        assert!(BidiMap::build("1 + 2 == 3 # ok").is_empty());
    }

    #[test]
    fn test_controls_trigger_processing() {
        assert!(!BidiMap::build("a\u{202E}b").is_empty());
        assert!(!BidiMap::build("a\u{200E}b").is_empty());
        assert!(!BidiMap::build("a\u{2066}b\u{2069}").is_empty());
    }

    #[test]
    fn test_inverse_property() {
        let source = "x = 'א ג' # ok\ny = 2\n";
        let map = BidiMap::build(source);
        assert_eq!(map.len(), source.chars().count());
        for i in 0..map.len() {
            assert_eq!(map.visual_to_logical(map.logical_to_visual(i)), i);
        }
    }

    #[test]
    fn test_rtl_paragraph_reversed() {
        // strong RTL start makes the paragraph base direction RTL
        assert_eq!(reordered("אבג"), "גבא");
    }

    #[test]
    fn test_rtl_inside_ltr_line() {
        // only the Hebrew run flips, the Latin text stays put
        let source = "ab אג cd";
        let map = BidiMap::build(source);
        let chars: Vec<char> = source.chars().collect();
        assert_eq!(map.logical_to_visual(0), 0);
        assert_eq!(chars[map.visual_to_logical(3)], 'ג');
        assert_eq!(chars[map.visual_to_logical(4)], 'א');
        assert_eq!(map.logical_to_visual(6), 6);
    }

    #[test]
    fn test_paragraphs_stay_separate() {
        let source = "אב\nגד";
        let map = BidiMap::build(source);
        // every codepoint of line 1 (incl. the terminator) is displayed
        // before every codepoint of line 2
        let line2_start = 3;
        for i in 0..line2_start {
            for j in line2_start..map.len() {
                assert!(map.logical_to_visual(i) < map.logical_to_visual(j));
            }
        }
    }
}
