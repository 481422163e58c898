use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::model::{EditState, Palette};

use super::keys::HELP;
use super::widgets::{
    code_sample_height, AttributeMatrix, CodeSample, PaletteWidget, StatusWidget,
};

const HELP_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 3;
const PALETTE_HEIGHT: u16 = 9;
const ATTRIBUTES_HEIGHT: u16 = 7;

/// Read-only snapshot of the session handed to a presenter for one frame.
pub struct EditorView<'a> {
    pub state: &'a EditState,
    pub effective: Palette,
    pub notice: Option<&'a str>,
}

impl<'a> EditorView<'a> {
    pub fn new(state: &'a EditState, notice: Option<&'a str>) -> Self {
        Self {
            state,
            effective: state.palette().effective_palette(),
            notice,
        }
    }
}

/// Turns the current editor state into a frame.
pub trait Presenter {
    fn draw(&self, frame: &mut Frame<'_>, view: &EditorView<'_>);
}

/// Swatches, attribute matrix and a highlighted code sample.
pub struct RichPreview;

/// Swatches and attribute matrix only.
pub struct CompactPreview;

fn draw_common(frame: &mut Frame<'_>, view: &EditorView<'_>, areas: &[Rect]) {
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().add_modifier(Modifier::DIM)),
        areas[0],
    );
    frame.render_widget(
        StatusWidget::new(view.state, &view.effective, view.notice),
        areas[1],
    );
    frame.render_widget(
        PaletteWidget::new(
            &view.effective,
            view.state.selected_index(),
            view.state.palette().link_brights(),
        ),
        areas[2],
    );
    frame.render_widget(AttributeMatrix, areas[3]);
}

impl Presenter for RichPreview {
    fn draw(&self, frame: &mut Frame<'_>, view: &EditorView<'_>) {
        let areas = Layout::vertical([
            Constraint::Length(HELP_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(PALETTE_HEIGHT),
            Constraint::Length(ATTRIBUTES_HEIGHT),
            Constraint::Max(code_sample_height()),
            Constraint::Min(0),
        ])
        .split(frame.area());
        draw_common(frame, view, &areas);
        frame.render_widget(CodeSample, areas[4]);
    }
}

impl Presenter for CompactPreview {
    fn draw(&self, frame: &mut Frame<'_>, view: &EditorView<'_>) {
        let areas = Layout::vertical([
            Constraint::Length(HELP_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(PALETTE_HEIGHT),
            Constraint::Length(ATTRIBUTES_HEIGHT),
            Constraint::Min(0),
        ])
        .split(frame.area());
        draw_common(frame, view, &areas);
    }
}
