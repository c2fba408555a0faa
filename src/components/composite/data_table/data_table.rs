//! DataTable Component
//!
//! Header row plus one row per frame row; an empty frame keeps its header and
//! shows a message in place of rows.

use gpui::{
    AnyElement, App, Div, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use super::column::{Column, ColumnWidth};
use crate::components::widget::{WidgetRow, render_cell};
use crate::theme::colors::SmiteColors;

/// DataTable component
#[derive(IntoElement)]
pub struct DataTable {
    columns: Vec<Column>,
    headers: Vec<SharedString>,
    rows: Vec<WidgetRow>,
    row_height: f32,
    empty_message: SharedString,
}

impl DataTable {
    /// Create a new data table
    pub fn new(columns: Vec<Column>, headers: Vec<SharedString>, rows: Vec<WidgetRow>) -> Self {
        Self {
            columns,
            headers,
            rows,
            row_height: 48.0,
            empty_message: "No data".into(),
        }
    }

    /// Set the empty message
    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }

    fn sized_cell(width: ColumnWidth, content: AnyElement) -> impl IntoElement {
        let cell = div().px_4().overflow_hidden();
        let cell = match width {
            ColumnWidth::Fixed(w) => cell.w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => cell.flex_1().min_w(px(min)),
        };
        cell.child(content)
    }

    /// Render the header row
    fn render_header(&self) -> Div {
        div()
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .border_b_1()
            .border_color(SmiteColors::border())
            .children(self.columns.iter().zip(&self.headers).map(|(col, label)| {
                Self::sized_cell(
                    col.width,
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(SmiteColors::muted_foreground())
                        .child(label.clone())
                        .into_any_element(),
                )
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &WidgetRow) -> Div {
        div()
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .border_b_1()
            .border_color(SmiteColors::border())
            .hover(|s| s.bg(SmiteColors::accent()))
            .children(
                self.columns
                    .iter()
                    .zip(&row.cells)
                    .map(|(col, cell)| Self::sized_cell(col.width, render_cell(cell))),
            )
    }

    /// Render empty state
    fn render_empty(&self) -> Div {
        div()
            .w_full()
            .py_6()
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(SmiteColors::muted_foreground())
            .child(self.empty_message.clone())
    }
}

impl RenderOnce for DataTable {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .child(self.render_header())
            .when(self.rows.is_empty(), |this| this.child(self.render_empty()))
            .children(self.rows.iter().map(|row| self.render_row(row)))
    }
}
