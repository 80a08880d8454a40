//! Stateless view builders for the reader screen.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::engine::frame::WordFrame;
use crate::ui::theme::colors;

/// Builds the reader line with the focus character pinned to a fixed column,
/// so the eye never travels between units.
pub fn render_word_line(frame: &WordFrame, width: u16) -> Line<'static> {
    let focus_column = usize::from(width / 2);
    let prefix_width = frame.prefix.width();
    let left_pad = focus_column.saturating_sub(prefix_width);

    let text_style = Style::default()
        .fg(colors::text())
        .add_modifier(Modifier::BOLD);
    let focus_style = Style::default()
        .fg(colors::focus())
        .add_modifier(Modifier::BOLD);

    let suffix_budget =
        usize::from(width).saturating_sub(left_pad + prefix_width + frame.focus.width());

    Line::from(vec![
        Span::styled(" ".repeat(left_pad), text_style),
        Span::styled(frame.prefix.clone(), text_style),
        Span::styled(frame.focus.clone(), focus_style),
        Span::styled(clip_to_width(&frame.suffix, suffix_budget), text_style),
    ])
}

/// Truncates at grapheme boundaries so a clipped suffix never ends in half a
/// cluster.
fn clip_to_width(text: &str, budget: usize) -> String {
    if text.width() <= budget {
        return text.to_string();
    }

    let mut clipped = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > budget {
            break;
        }
        clipped.push_str(grapheme);
        used += grapheme_width;
    }
    clipped
}

const PROGRESS_CELLS: usize = 24;

pub fn render_progress_bar(progress: f64) -> Line<'static> {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * PROGRESS_CELLS as f64).round() as usize;

    let mut spans = Vec::with_capacity(PROGRESS_CELLS);
    for _ in 0..filled {
        spans.push(Span::styled("─", Style::default().fg(colors::text())));
    }
    for _ in filled..PROGRESS_CELLS {
        spans.push(Span::styled("─", Style::default().fg(colors::dimmed())));
    }

    Line::from(spans).alignment(Alignment::Center)
}

pub fn render_placeholder() -> Paragraph<'static> {
    let text = "Nothing to read.\n\nType @path to load a file, @@ for the clipboard.\n:h lists the keys, :q quits.";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

pub fn render_status_line(
    rate_wpm: u32,
    pause_on_punctuation: bool,
    multiplier: f64,
    state: &str,
    message: Option<&str>,
) -> Line<'static> {
    let punctuation = if pause_on_punctuation {
        format!("punct ×{multiplier:.1}")
    } else {
        "punct off".to_string()
    };

    let mut text = format!(" {rate_wpm} WPM · {punctuation} · {state}");
    if let Some(message) = message {
        text.push_str(" · ");
        text.push_str(message);
    }

    Line::styled(
        text,
        Style::default().fg(colors::dimmed()).bg(colors::background()),
    )
}

pub fn render_command_line(buffer: &str) -> Paragraph<'static> {
    Paragraph::new(format!("{buffer}█"))
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::frame::decompose;

    #[test]
    fn test_word_line_pads_prefix_to_the_focus_column() {
        let frame = decompose("reading", 2);
        let line = render_word_line(&frame, 40);

        // pad(20 - 2) + prefix "re" puts the focus at column 20.
        assert_eq!(line.spans[0].content.len(), 18);
        assert_eq!(line.spans[1].content, "re");
        assert_eq!(line.spans[2].content, "a");
        assert_eq!(line.spans[3].content, "ding");
    }

    #[test]
    fn test_word_line_survives_a_tiny_viewport() {
        let frame = decompose("antidisestablishmentarianism", 4);
        let line = render_word_line(&frame, 10);
        assert!(line.width() <= 10, "line must fit the viewport");
    }

    #[test]
    fn test_clip_to_width_keeps_short_text() {
        assert_eq!(clip_to_width("abc", 10), "abc");
    }

    #[test]
    fn test_clip_to_width_truncates_long_text() {
        assert_eq!(clip_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn test_clip_to_width_respects_grapheme_boundaries() {
        // A combining accent must never be split from its base.
        let text = "e\u{0301}tude";
        let clipped = clip_to_width(text, 1);
        assert_eq!(clipped, "e\u{0301}");
    }

    #[test]
    fn test_progress_bar_clamps_out_of_range_input() {
        let _ = render_progress_bar(-0.5);
        let _ = render_progress_bar(1.5);
    }

    #[test]
    fn test_status_line_mentions_rate_and_state() {
        let line = render_status_line(300, true, 2.0, "PAUSED", Some("hello"));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("300 WPM"));
        assert!(text.contains("×2.0"));
        assert!(text.contains("PAUSED"));
        assert!(text.contains("hello"));
    }

    #[test]
    fn test_status_line_reports_punctuation_off() {
        let line = render_status_line(300, false, 2.0, "PLAYING", None);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("punct off"));
    }

    #[test]
    fn test_placeholder_builds() {
        let _ = render_placeholder();
    }
}
