use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::model::{Channel, EditState, Palette, BASE_COUNT, SLOT_COUNT};
use crate::protocol::BACKGROUND_SLOT;
use crate::theme::slot_name;

/// Terminal palette entry `index`. Swatches drawn this way follow whatever
/// the terminal currently has in that slot.
fn indexed(index: usize) -> Color {
    Color::Indexed(index as u8)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: &AppColor) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

/// The 16 slots as an 8x2 grid of swatches, with the selected slot highlighted.
pub struct PaletteWidget<'a> {
    palette: &'a Palette,
    selected: usize,
    linked: bool,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a Palette, selected: usize, linked: bool) -> Self {
        Self {
            palette,
            selected,
            linked,
        }
    }
}

/// Build a row of colored swatches. Each swatch is 6 chars wide with the slot
/// name centered on the colored background. Selected slot gets bold + underline.
fn build_swatch_row(slots: &Palette, start: usize, selected: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (offset, c) in slots[start..start + BASE_COUNT].iter().enumerate() {
        let i = start + offset;
        let label = format!("{:^6}", slot_name(i));
        let mut style = Style::default().bg(indexed(i)).fg(contrast_fg(c));
        if i == selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Build a row of slot index labels below the swatches.
fn build_index_row(start: usize, selected: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for i in start..start + BASE_COUNT {
        let label = format!("{:^6}", format!("{i:x}"));
        let style = if i == selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Palette");
        let inner = block.inner(area);
        block.render(area, buf);

        let bright_title = if self.linked {
            "  Bright (linked)"
        } else {
            "  Bright"
        };
        let lines = vec![
            Line::from("  Normal"),
            build_swatch_row(self.palette, 0, self.selected),
            build_index_row(0, self.selected),
            Line::from(""),
            Line::from(bright_title),
            build_swatch_row(self.palette, BASE_COUNT, self.selected),
            build_index_row(BASE_COUNT, self.selected),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Selected slot, its color in hex and HSL, the channel cursor and the last notice.
pub struct StatusWidget<'a> {
    state: &'a EditState,
    palette: &'a Palette,
    notice: Option<&'a str>,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a EditState, palette: &'a Palette, notice: Option<&'a str>) -> Self {
        Self {
            state,
            palette,
            notice,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let idx = self.state.selected_index();
        let color = &self.palette[idx];
        let (h, s, l) = self.state.selected_color().to_display_units();
        let ratio = AppColor::contrast_ratio(color, &self.palette[BACKGROUND_SLOT]);
        let link = if self.state.palette().link_brights() {
            "ON"
        } else {
            "OFF"
        };

        let selection = Line::from(vec![
            Span::styled(
                format!("  {}  ", slot_name(idx)),
                Style::default().bg(indexed(idx)).fg(contrast_fg(color)),
            ),
            Span::raw(format!(
                " idx={idx:02} {color}  HSL={h}\u{b0}, {s}%, {l}%  contrast {ratio:.1}:1  link brights {link}"
            )),
        ]);

        let mut channels = vec![Span::raw("Channels: ")];
        for channel in Channel::ALL {
            if channel == self.state.selected_channel() {
                channels.push(Span::styled(
                    format!("[{}]", channel.label()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                channels.push(Span::raw(format!(" {} ", channel.label())));
            }
            channels.push(Span::raw(" "));
        }

        let mut lines = vec![selection, Line::from(channels)];
        if let Some(notice) = self.notice {
            lines.push(Line::styled(
                notice.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Paragraph::new(lines).render(area, buf);
    }
}

const ATTRIBUTES: [(&str, Modifier); 5] = [
    ("Normal", Modifier::empty()),
    ("Bold", Modifier::BOLD),
    ("Dim", Modifier::DIM),
    ("Italic", Modifier::ITALIC),
    ("Underline", Modifier::UNDERLINED),
];

/// Every slot as foreground under each text attribute.
pub struct AttributeMatrix;

impl Widget for AttributeMatrix {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Attributes");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = ATTRIBUTES
            .iter()
            .map(|(name, modifier)| {
                let mut spans = vec![Span::raw(format!("{name:<10}"))];
                for i in 0..SLOT_COUNT {
                    spans.push(Span::styled(
                        "\u{2588}\u{2588}",
                        Style::default().fg(indexed(i)).add_modifier(*modifier),
                    ));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Token classes of the code sample, each drawn with a fixed ANSI slot.
#[derive(Debug, Clone, Copy)]
enum Tok {
    Plain,
    Comment,
    Keyword,
    Str,
    Number,
    Ident,
    Punct,
    Warning,
    Error,
    Italic,
    Bold,
    Underline,
}

impl Tok {
    fn style(self) -> Style {
        let fg = |i: usize| Style::default().fg(indexed(i));
        match self {
            Tok::Plain => Style::default(),
            Tok::Comment => fg(8),
            Tok::Keyword => fg(4),
            Tok::Str => fg(2),
            Tok::Number => fg(6),
            Tok::Ident | Tok::Punct => fg(7),
            Tok::Warning => fg(3),
            Tok::Error => fg(1),
            Tok::Italic => fg(7).add_modifier(Modifier::ITALIC),
            Tok::Bold => fg(7).add_modifier(Modifier::BOLD),
            Tok::Underline => fg(7).add_modifier(Modifier::UNDERLINED),
        }
    }
}

use Tok::*;

const SAMPLE: &[&[(Tok, &str)]] = &[
    &[(Comment, "# Python")],
    &[
        (Keyword, "def"),
        (Plain, " "),
        (Ident, "fib"),
        (Punct, "("),
        (Ident, "n"),
        (Punct, ": "),
        (Keyword, "int"),
        (Punct, ") -> "),
        (Keyword, "int"),
        (Punct, ":"),
    ],
    &[(Plain, "    "), (Comment, "# comment: naive recursion")],
    &[
        (Plain, "    "),
        (Keyword, "return"),
        (Plain, " "),
        (Number, "1"),
        (Plain, " "),
        (Keyword, "if"),
        (Plain, " "),
        (Ident, "n"),
        (Plain, " < "),
        (Number, "2"),
        (Plain, " "),
        (Keyword, "else"),
        (Plain, " "),
        (Ident, "fib"),
        (Punct, "("),
        (Ident, "n"),
        (Plain, "-"),
        (Number, "1"),
        (Punct, ")"),
        (Plain, " + "),
        (Ident, "fib"),
        (Punct, "("),
        (Ident, "n"),
        (Plain, "-"),
        (Number, "2"),
        (Punct, ")"),
    ],
    &[],
    &[(Comment, "# Shell")],
    &[
        (Ident, "$"),
        (Plain, " "),
        (Ident, "git"),
        (Plain, " "),
        (Ident, "status"),
        (Plain, " && "),
        (Ident, "echo"),
        (Plain, " "),
        (Str, "\"ok\""),
    ],
    &[(Warning, "warning"), (Plain, ": unused variable `x`")],
    &[(Error, "error"), (Plain, ": mismatched types")],
    &[],
    &[(Comment, "# JSON")],
    &[
        (Punct, "{ "),
        (Str, "\"name\""),
        (Punct, ": "),
        (Str, "\"catppuccin\""),
        (Punct, ", "),
        (Str, "\"flavor\""),
        (Punct, ": "),
        (Str, "\"mocha\""),
        (Punct, ", "),
        (Str, "\"ok\""),
        (Punct, ": "),
        (Keyword, "true"),
        (Punct, " }"),
    ],
    &[],
    &[(Comment, "/* C */")],
    &[
        (Keyword, "#include"),
        (Plain, " "),
        (Punct, "<"),
        (Ident, "stdio.h"),
        (Punct, ">"),
    ],
    &[
        (Keyword, "int"),
        (Plain, " "),
        (Ident, "main"),
        (Punct, "("),
        (Keyword, "void"),
        (Punct, ")"),
        (Plain, " {"),
    ],
    &[
        (Plain, "    "),
        (Ident, "printf"),
        (Punct, "("),
        (Str, "\"Hello, \""),
        (Plain, " "),
        (Italic, "italic"),
        (Plain, " "),
        (Bold, "bold"),
        (Plain, " "),
        (Underline, "underline"),
        (Punct, "\\n\");"),
    ],
    &[(Plain, "}")],
];

/// A short multi-language snippet highlighted with the ANSI slots.
pub struct CodeSample;

impl Widget for CodeSample {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Sample");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = SAMPLE
            .iter()
            .map(|tokens| {
                Line::from(
                    tokens
                        .iter()
                        .map(|(tok, text)| Span::styled(*text, tok.style()))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Rows needed by [`CodeSample`], borders included.
pub fn code_sample_height() -> u16 {
    SAMPLE.len() as u16 + 2
}
