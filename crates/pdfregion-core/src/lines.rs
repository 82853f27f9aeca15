//! Grouping of glyphs into text lines.

use std::cmp::Ordering;

use crate::geometry::BBox;
use crate::objects::Glyph;

/// Tuning knobs for line grouping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGroupOptions {
    /// Maximum vertical-center distance, in points, between glyphs of the
    /// same line.
    pub y_tolerance: f64,
    /// Horizontal gap, as a fraction of the average glyph width in the line,
    /// above which a space is inserted between neighbors.
    pub space_gap_ratio: f64,
}

impl Default for LineGroupOptions {
    fn default() -> Self {
        Self {
            y_tolerance: 2.0,
            space_gap_ratio: 0.3,
        }
    }
}

/// A reconstructed line of text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextLine {
    /// Concatenated text of the line, left to right.
    pub text: String,
    /// Most frequent font name among the line's glyphs.
    #[cfg_attr(feature = "serde", serde(rename = "font"))]
    pub fontname: String,
    /// Most frequent font size among the line's glyphs.
    pub size: f64,
    /// Union of the member glyph boxes.
    pub bbox: BBox,
}

/// Groups glyphs into text lines by vertical proximity.
///
/// Glyphs are sorted by vertical center, then by horizontal position.
/// Consecutive glyphs whose vertical centers differ by less than
/// `options.y_tolerance` join the same line. Lines come out ordered top to
/// bottom, each with its text in left-to-right order.
pub fn group_lines(glyphs: &[Glyph], options: &LineGroupOptions) -> Vec<TextLine> {
    if glyphs.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&Glyph> = glyphs.iter().collect();
    sorted.sort_by(|a, b| {
        cmp_f64(v_center(a), v_center(b)).then(cmp_f64(a.bbox.x0, b.bbox.x0))
    });

    let mut lines = Vec::new();
    let mut current = vec![sorted[0]];
    for &glyph in &sorted[1..] {
        let last = *current.last().expect("current line is never empty");
        if (v_center(glyph) - v_center(last)).abs() < options.y_tolerance {
            current.push(glyph);
        } else {
            lines.push(build_line(&current, options));
            current = vec![glyph];
        }
    }
    lines.push(build_line(&current, options));
    lines
}

fn v_center(glyph: &Glyph) -> f64 {
    (glyph.bbox.top + glyph.bbox.bottom) / 2.0
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn build_line(glyphs: &[&Glyph], options: &LineGroupOptions) -> TextLine {
    let mut members = glyphs.to_vec();
    members.sort_by(|a, b| cmp_f64(a.bbox.x0, b.bbox.x0));

    let avg_width =
        members.iter().map(|g| g.bbox.width()).sum::<f64>() / members.len() as f64;
    let space_threshold = avg_width * options.space_gap_ratio;

    let mut text = String::new();
    for (i, glyph) in members.iter().enumerate() {
        if i > 0 {
            let gap = glyph.bbox.x0 - members[i - 1].bbox.x1;
            if gap > space_threshold {
                text.push(' ');
            }
        }
        text.push_str(&glyph.text);
    }

    let fontname = dominant(members.iter().map(|g| g.fontname.as_str()))
        .expect("line has at least one glyph")
        .to_string();
    let size = dominant(members.iter().map(|g| g.size)).expect("line has at least one glyph");
    let bbox = members
        .iter()
        .map(|g| g.bbox)
        .reduce(|a, b| a.union(&b))
        .expect("line has at least one glyph");

    TextLine { text, fontname, size, bbox }
}

/// Most frequent value, ties broken by encounter order.
fn dominant<T: PartialEq + Clone>(values: impl Iterator<Item = T>) -> Option<T> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    let mut best: Option<usize> = None;
    for (i, (_, n)) in counts.iter().enumerate() {
        if best.is_none_or(|b| *n > counts[b].1) {
            best = Some(i);
        }
    }
    best.map(|i| counts[i].0.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(text: &str, x0: f64, top: f64, x1: f64, bottom: f64) -> Glyph {
        Glyph {
            text: text.to_string(),
            bbox: BBox::new(x0, top, x1, bottom),
            fontname: "Helvetica".to_string(),
            size: 12.0,
        }
    }

    fn styled(text: &str, x0: f64, fontname: &str, size: f64) -> Glyph {
        Glyph {
            text: text.to_string(),
            bbox: BBox::new(x0, 100.0, x0 + 6.0, 112.0),
            fontname: fontname.to_string(),
            size,
        }
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(group_lines(&[], &LineGroupOptions::default()).is_empty());
    }

    #[test]
    fn test_same_row_merges_into_one_line() {
        let glyphs = vec![
            glyph("H", 10.0, 100.0, 16.0, 112.0),
            glyph("i", 16.0, 100.0, 19.0, 112.0),
        ];
        let lines = group_lines(&glyphs, &LineGroupOptions::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Hi");
    }

    #[test]
    fn test_text_is_left_to_right_regardless_of_input_order() {
        let glyphs = vec![
            glyph("b", 16.0, 100.0, 22.0, 112.0),
            glyph("a", 10.0, 100.0, 16.0, 112.0),
            glyph("c", 22.0, 100.0, 28.0, 112.0),
        ];
        let lines = group_lines(&glyphs, &LineGroupOptions::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "abc");
    }

    #[test]
    fn test_distant_rows_split_into_lines_top_to_bottom() {
        let glyphs = vec![
            glyph("B", 10.0, 130.0, 16.0, 142.0),
            glyph("A", 10.0, 100.0, 16.0, 112.0),
        ];
        let lines = group_lines(&glyphs, &LineGroupOptions::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "A");
        assert_eq!(lines[1].text, "B");
    }

    #[test]
    fn test_small_vertical_jitter_stays_on_one_line() {
        let glyphs = vec![
            glyph("a", 10.0, 100.0, 16.0, 112.0),
            glyph("b", 16.0, 101.5, 22.0, 113.5),
        ];
        let lines = group_lines(&glyphs, &LineGroupOptions::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "ab");
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let glyphs = vec![
            glyph("a", 10.0, 100.0, 16.0, 112.0),
            glyph("b", 16.0, 104.0, 22.0, 116.0),
        ];
        let tight = LineGroupOptions { y_tolerance: 2.0, ..Default::default() };
        assert_eq!(group_lines(&glyphs, &tight).len(), 2);
        let loose = LineGroupOptions { y_tolerance: 6.0, ..Default::default() };
        assert_eq!(group_lines(&glyphs, &loose).len(), 1);
    }

    #[test]
    fn test_wide_gap_inserts_space() {
        // 6pt glyphs, 10pt gap between words.
        let glyphs = vec![
            glyph("a", 10.0, 100.0, 16.0, 112.0),
            glyph("b", 16.0, 100.0, 22.0, 112.0),
            glyph("c", 32.0, 100.0, 38.0, 112.0),
        ];
        let lines = group_lines(&glyphs, &LineGroupOptions::default());
        assert_eq!(lines[0].text, "ab c");
    }

    #[test]
    fn test_snug_glyphs_get_no_space() {
        let glyphs = vec![
            glyph("a", 10.0, 100.0, 16.0, 112.0),
            glyph("b", 16.5, 100.0, 22.5, 112.0),
        ];
        let lines = group_lines(&glyphs, &LineGroupOptions::default());
        assert_eq!(lines[0].text, "ab");
    }

    #[test]
    fn test_dominant_font_wins() {
        let glyphs = vec![
            styled("a", 10.0, "Helvetica", 12.0),
            styled("b", 16.0, "Helvetica-Bold", 12.0),
            styled("c", 22.0, "Helvetica", 12.0),
        ];
        let lines = group_lines(&glyphs, &LineGroupOptions::default());
        assert_eq!(lines[0].fontname, "Helvetica");
    }

    #[test]
    fn test_font_tie_breaks_to_first_encountered() {
        let glyphs = vec![
            styled("a", 10.0, "Times-Roman", 10.0),
            styled("b", 16.0, "Courier", 11.0),
        ];
        let lines = group_lines(&glyphs, &LineGroupOptions::default());
        assert_eq!(lines[0].fontname, "Times-Roman");
        assert_eq!(lines[0].size, 10.0);
    }

    #[test]
    fn test_line_bbox_is_union_of_members() {
        let glyphs = vec![
            glyph("a", 10.0, 100.0, 16.0, 112.0),
            glyph("b", 16.0, 99.0, 22.0, 113.0),
        ];
        let lines = group_lines(&glyphs, &LineGroupOptions::default());
        assert_eq!(lines[0].bbox, BBox::new(10.0, 99.0, 22.0, 113.0));
    }

    #[test]
    fn test_dominant_counts_values() {
        let values = ["a", "b", "b", "a", "b"];
        assert_eq!(dominant(values.iter().copied()), Some("b"));
        assert_eq!(dominant(std::iter::empty::<&str>()), None);
    }
}
