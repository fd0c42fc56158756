//! Display rendering
//!
//! Cards are laid out into styled screen lines first; the same lines
//! are either drawn on the terminal or printed with ANSI escapes.
//! Snippet text is kept verbatim in the layout and only made safe for
//! the terminal (tabs expanded, control characters replaced) on output.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthChar;

use crate::catalog::Example;
use crate::error::Result;
use crate::input::Action;
use crate::panel::PanelState;
use crate::syntax::{highlight, Color, LanguageProfile, Style};
use crate::terminal::Terminal;

/// Columns between tab stops when expanding tabs
const TAB_WIDTH: usize = 4;

/// Shown in place of control characters
const CONTROL_REPLACEMENT: char = '\u{FFFD}';

/// A run of text in one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

/// One row of output
pub type ScreenLine = Vec<Segment>;

/// Which side of the comparison a snippet is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bad,
    Good,
}

impl Side {
    fn heading(&self) -> ScreenLine {
        match self {
            Side::Bad => vec![Segment::new("✗ THE DIRTY WAY", Style::fg(Color::Red).with_bold())],
            Side::Good => vec![Segment::new("✓ THE CLEAN WAY", Style::fg(Color::Green).with_bold())],
        }
    }
}

/// Highlighted snippet lines, optionally with a line-number gutter
pub fn code_lines(code: &str, profile: &LanguageProfile, show_line_numbers: bool) -> Vec<ScreenLine> {
    let classified = highlight(code, profile);
    let gutter_width = classified.len().to_string().len().max(2);

    classified
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let mut row = Vec::with_capacity(line.tokens.len() * 2 + 2);
            if show_line_numbers {
                row.push(Segment::new(
                    format!("{:>width$} │ ", i + 1, width = gutter_width),
                    Style::fg(Color::BrightBlack).with_dim(),
                ));
            }
            if !line.indent.is_empty() {
                row.push(Segment::plain(line.indent.clone()));
            }
            for token in &line.tokens {
                row.push(Segment::new(token.text.clone(), token.category.default_style()));
                if !token.separator.is_empty() {
                    row.push(Segment::plain(token.separator.clone()));
                }
            }
            row
        })
        .collect()
}

/// Lay out a whole card
pub fn card_lines(
    example: &Example,
    position: (usize, usize),
    profile: &LanguageProfile,
    show_line_numbers: bool,
    width: usize,
) -> Vec<ScreenLine> {
    let (index, total) = position;
    let mut lines = Vec::new();

    lines.push(vec![
        Segment::new(format!(" {} ", example.category), Style::reverse()),
        Segment::plain("  "),
        Segment::new(format!("Card {} / {}", index + 1, total), Style::fg(Color::BrightBlack)),
    ]);
    lines.push(vec![Segment::new(example.title.clone(), Style::fg(Color::White).with_bold())]);
    lines.push(Vec::new());

    lines.push(vec![Segment::new("THE PRINCIPLE", Style::fg(Color::BrightBlack).with_bold())]);
    for row in wrap_text(&example.principle, width) {
        lines.push(vec![Segment::plain(row)]);
    }

    for (side, snippet) in [(Side::Bad, &example.bad), (Side::Good, &example.good)] {
        lines.push(Vec::new());
        lines.push(side.heading());
        if let Some(description) = &snippet.description {
            for row in wrap_text(description, width) {
                lines.push(vec![Segment::new(row, Style::fg(Color::BrightBlack).with_italic())]);
            }
        }
        lines.extend(code_lines(&snippet.code, profile, show_line_numbers));
    }

    lines
}

/// Lay out the explanation panel; empty when hidden
pub fn panel_lines(state: &PanelState, width: usize) -> Vec<ScreenLine> {
    let title = vec![
        Segment::new("✦ AI Analysis", Style::fg(Color::BrightBlue).with_bold()),
        Segment::new("  (x to close)", Style::fg(Color::BrightBlack)),
    ];

    let body: Vec<ScreenLine> = match state {
        PanelState::Hidden => return Vec::new(),
        PanelState::Loading => vec![vec![Segment::new(
            "Generating explanation...",
            Style::fg(Color::BrightBlack).with_italic(),
        )]],
        PanelState::Failed(message) => wrap_text(&format!("! {}", message), width)
            .into_iter()
            .map(|row| vec![Segment::new(row, Style::fg(Color::BrightRed))])
            .collect(),
        PanelState::Ready(text) => wrap_text(text, width)
            .into_iter()
            .map(|row| vec![Segment::plain(row)])
            .collect(),
    };

    let mut lines = vec![Vec::new(), title];
    lines.extend(body);
    lines
}

/// Key hints for the bottom line
pub fn hint_line(panel_visible: bool) -> ScreenLine {
    let mut actions = vec![Action::NextCard, Action::Explain];
    if panel_visible {
        actions.push(Action::ClosePanel);
    }
    actions.extend([Action::ToggleLineNumbers, Action::ScrollDown, Action::Quit]);

    let text = actions.iter().map(|a| a.hint()).collect::<Vec<_>>().join("  ");
    vec![Segment::new(text, Style::fg(Color::BrightBlack))]
}

/// Render lines as text, with ANSI escapes when `color` is set
pub fn to_ansi(lines: &[ScreenLine], color: bool) -> String {
    let mut out = String::new();
    for line in lines {
        let mut col = 0;
        for segment in line {
            let text = terminal_text(&segment.text, col);
            col += text_width(&text);
            if color && !segment.style.is_default() {
                // Writing into a String cannot fail
                let _ = write!(out, "{}", segment.style.to_content_style().apply(&text));
            } else {
                out.push_str(&text);
            }
        }
        out.push('\n');
    }
    out
}

/// Display state
pub struct Display {
    /// Whether a full redraw is needed
    needs_redraw: bool,
    /// Message to show above the key hints
    message: Option<String>,
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// First content line on screen
    scroll: usize,
}

impl Display {
    pub fn new(show_line_numbers: bool) -> Self {
        Self {
            needs_redraw: true,
            message: None,
            show_line_numbers,
            scroll: 0,
        }
    }

    /// Toggle line numbers on/off
    pub fn toggle_line_numbers(&mut self) {
        self.show_line_numbers = !self.show_line_numbers;
        self.needs_redraw = true;
    }

    /// Mark that a full redraw is needed
    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Set a message to display
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear the message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
        self.needs_redraw = true;
    }

    pub fn scroll_down(&mut self) {
        self.scroll += 1;
        self.needs_redraw = true;
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
        self.needs_redraw = true;
    }

    /// Render the current card and panel
    pub fn render(
        &mut self,
        terminal: &mut Terminal,
        example: &Example,
        position: (usize, usize),
        profile: &LanguageProfile,
        panel: &PanelState,
    ) -> Result<()> {
        let cols = terminal.cols() as usize;
        let rows = terminal.rows() as usize;
        // Leave the last row for key hints and one for messages
        let body_rows = rows.saturating_sub(2);

        let mut content = card_lines(example, position, profile, self.show_line_numbers, cols);
        content.extend(panel_lines(panel, cols));

        // Keep the scroll inside the content
        let max_scroll = content.len().saturating_sub(body_rows);
        self.scroll = self.scroll.min(max_scroll);

        if self.needs_redraw {
            terminal.clear_screen()?;
        }

        for row in 0..body_rows {
            terminal.move_cursor(row as u16, 0)?;
            if let Some(line) = content.get(self.scroll + row) {
                render_line(terminal, line, cols)?;
            }
            terminal.clear_to_eol()?;
        }

        if rows >= 2 {
            terminal.move_cursor((rows - 2) as u16, 0)?;
            if let Some(msg) = &self.message {
                terminal.write_str(&truncate_to_width(&terminal_text(msg, 0), cols))?;
            }
            terminal.clear_to_eol()?;

            terminal.move_cursor((rows - 1) as u16, 0)?;
            render_line(terminal, &hint_line(panel != &PanelState::Hidden), cols)?;
            terminal.clear_to_eol()?;
        }

        terminal.flush()?;
        self.needs_redraw = false;
        Ok(())
    }
}

/// Write one screen line, cut at the terminal width
fn render_line(terminal: &mut Terminal, line: &ScreenLine, max_cols: usize) -> Result<()> {
    let mut used = 0;
    for segment in line {
        let remaining = max_cols.saturating_sub(used);
        if remaining == 0 {
            break;
        }
        let text = truncate_to_width(&terminal_text(&segment.text, used), remaining);
        used += text_width(&text);
        terminal.write_styled(&text, &segment.style)?;
    }
    Ok(())
}

/// Text safe to write at column `start_col`: tabs become spaces up to
/// the next tab stop, `\r` is dropped and other control characters are
/// replaced.
fn terminal_text(s: &str, start_col: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut col = start_col;

    for ch in s.chars() {
        match ch {
            '\t' => {
                let spaces = TAB_WIDTH - col % TAB_WIDTH;
                out.extend(std::iter::repeat(' ').take(spaces));
                col += spaces;
            }
            '\r' => {}
            ch if ch.is_control() => {
                out.push(CONTROL_REPLACEMENT);
                col += 1;
            }
            ch => {
                out.push(ch);
                col += ch.width().unwrap_or(0);
            }
        }
    }

    out
}

/// Display width of a string
fn text_width(s: &str) -> usize {
    s.chars().map(|ch| ch.width().unwrap_or(1)).sum()
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

/// Word-wrap text to a display width, keeping explicit line breaks
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut rows = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = text_width(word);
            if current_width > 0 && current_width + 1 + word_width > width {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        rows.push(current);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::syntax::{profile_by_name, Category};

    fn typescript() -> LanguageProfile {
        profile_by_name("typescript").unwrap()
    }

    fn line_text(line: &ScreenLine) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_code_lines_preserve_text() {
        let code = "const x = 1;\n\n  // note\n";
        let lines = code_lines(code, &typescript(), false);
        let texts: Vec<_> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["const x = 1;", "", "  // note", ""]);
        assert_eq!(lines[0][0].style, Category::Keyword.default_style());
    }

    #[test]
    fn test_code_lines_gutter() {
        let lines = code_lines("a\nb", &typescript(), true);
        assert_eq!(line_text(&lines[0]), " 1 │ a");
        assert_eq!(line_text(&lines[1]), " 2 │ b");
    }

    #[test]
    fn test_card_layout() {
        let card = Catalog::builtin().cards[0].clone();
        let lines = card_lines(&card, (0, 7), &typescript(), false, 80);
        let texts: Vec<_> = lines.iter().map(line_text).collect();

        assert_eq!(texts[0], " Variables   Card 1 / 7");
        assert_eq!(texts[1], "Meaningful Variable Names");
        assert!(texts.iter().any(|t| t == "✗ THE DIRTY WAY"));
        assert!(texts.iter().any(|t| t == "✓ THE CLEAN WAY"));
        assert!(texts.iter().any(|t| t == "const d = new Date();"));
    }

    #[test]
    fn test_panel_lines() {
        assert!(panel_lines(&PanelState::Hidden, 80).is_empty());

        let loading = panel_lines(&PanelState::Loading, 80);
        assert_eq!(line_text(&loading[2]), "Generating explanation...");

        let failed = panel_lines(&PanelState::Failed("boom".into()), 80);
        assert_eq!(line_text(&failed[2]), "! boom");

        let ready = panel_lines(&PanelState::Ready("one\n\ntwo".into()), 80);
        let texts: Vec<_> = ready.iter().skip(2).map(line_text).collect();
        assert_eq!(texts, vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("aaaa bbbb cccc dddd", 10),
            vec!["aaaa bbbb", "cccc dddd"]
        );
        assert_eq!(wrap_text("", 20), vec![""]);
        // Over-long words get their own row
        assert_eq!(wrap_text("a abcdefghijklmnop b", 10), vec!["a", "abcdefghijklmnop", "b"]);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("hi", 10), "hi");
    }

    #[test]
    fn test_to_ansi_plain() {
        let lines = vec![vec![Segment::new("const", Category::Keyword.default_style()), Segment::plain(" x")]];
        assert_eq!(to_ansi(&lines, false), "const x\n");

        let colored = to_ansi(&lines, true);
        let keyword = Category::Keyword.default_style().to_content_style().apply("const");
        assert_eq!(colored, format!("{} x\n", keyword));
        assert!(colored.starts_with("\x1b["));
    }

    #[test]
    fn test_terminal_text() {
        assert_eq!(terminal_text("\t", 0), "    ");
        assert_eq!(terminal_text("ab\tc", 0), "ab  c");
        assert_eq!(terminal_text("\t", 5), "   ");
        assert_eq!(terminal_text("1;\r", 0), "1;");
        assert_eq!(terminal_text("\x1b[2J", 0), "\u{FFFD}[2J");
        assert_eq!(terminal_text("日本", 0), "日本");
    }

    #[test]
    fn test_code_lines_keep_control_characters() {
        let lines = code_lines("const x = 1;\r\nif (a)\tb", &typescript(), false);
        assert_eq!(line_text(&lines[0]), "const x = 1;\r");
        assert_eq!(line_text(&lines[1]), "if (a)\tb");
    }

    #[test]
    fn test_printed_code_has_no_control_characters() {
        let lines = code_lines("const x = 1;\r\nif (a)\tb", &typescript(), false);
        let printed = to_ansi(&lines, false);
        assert_eq!(printed, "const x = 1;\nif (a)  b\n");
        assert!(!to_ansi(&lines, true).contains('\r'));
        assert!(!to_ansi(&lines, true).contains('\t'));
    }

    #[test]
    fn test_tab_width_counts_toward_truncation() {
        let expanded = terminal_text("\tab", 0);
        assert_eq!(text_width(&expanded), 6);
        assert_eq!(truncate_to_width(&expanded, 5), "    a");
    }

    #[test]
    fn test_hint_line() {
        assert!(!line_text(&hint_line(false)).contains("close"));
        assert!(line_text(&hint_line(true)).contains("x close"));
    }
}
