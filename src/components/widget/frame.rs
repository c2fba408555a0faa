//! Widget Frame
//!
//! A toolkit-independent description of what a widget draws: its title,
//! column headers and typed cells. Widgets build a frame from their dataset
//! and then render only from that frame.

use gpui::SharedString;

use crate::assets::AppIcon;

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Success,
    Warning,
}

/// One displayable value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Regular text
    Text(SharedString),
    /// Secondary text
    Muted(SharedString),
    /// Monospaced secondary text (addresses, identifiers)
    Mono(SharedString),
    /// Emphasized headline value
    Strong(SharedString),
    Icon(AppIcon),
    /// Round avatar with initials
    Avatar(SharedString),
    Badge { label: SharedString, tone: BadgeTone },
    /// Upward trend note with an arrow
    Trend(SharedString),
    /// A bar in a bar chart
    Bar { label: SharedString, value: u64 },
    /// A selectable tab
    Tab { label: SharedString, active: bool },
}

impl Cell {
    /// Text carried by the cell, if any
    pub fn text(&self) -> Option<&SharedString> {
        match self {
            Cell::Text(s)
            | Cell::Muted(s)
            | Cell::Mono(s)
            | Cell::Strong(s)
            | Cell::Avatar(s)
            | Cell::Trend(s) => Some(s),
            Cell::Badge { label, .. } | Cell::Bar { label, .. } | Cell::Tab { label, .. } => {
                Some(label)
            }
            Cell::Icon(_) => None,
        }
    }
}

/// One data row of a widget
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetRow {
    /// Stable key (record id, title or label)
    pub key: SharedString,
    pub cells: Vec<Cell>,
}

impl WidgetRow {
    pub fn new(key: impl Into<SharedString>, cells: Vec<Cell>) -> Self {
        Self {
            key: key.into(),
            cells,
        }
    }

    /// Tone of the first badge in the row
    pub fn badge_tone(&self) -> Option<BadgeTone> {
        self.cells.iter().find_map(|cell| match cell {
            Cell::Badge { tone, .. } => Some(*tone),
            _ => None,
        })
    }

    /// Whether the row contains an icon cell
    pub fn has_icon(&self) -> bool {
        self.cells.iter().any(|cell| matches!(cell, Cell::Icon(_)))
    }
}

/// Everything a widget draws, independent of the UI toolkit
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetFrame {
    pub title: SharedString,
    pub description: Option<SharedString>,
    /// Column headers (tables and axis names); may be empty
    pub headers: Vec<SharedString>,
    pub rows: Vec<WidgetRow>,
    /// Shown instead of rows when there are none
    pub empty_message: Option<SharedString>,
}

impl WidgetFrame {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: None,
            headers: Vec::new(),
            rows: Vec::new(),
            empty_message: None,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn headers(mut self, headers: impl IntoIterator<Item = SharedString>) -> Self {
        self.headers = headers.into_iter().collect();
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = WidgetRow>) -> Self {
        self.rows = rows.into_iter().collect();
        self
    }

    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_part() {
        let frame = WidgetFrame::new("Title")
            .description("desc")
            .headers(["A".into(), "B".into()])
            .rows([WidgetRow::new("1", vec![Cell::Text("x".into())])]);

        assert_eq!(frame.title.as_ref(), "Title");
        assert_eq!(frame.description.as_ref().map(|d| d.as_ref()), Some("desc"));
        assert_eq!(frame.headers.len(), 2);
        assert_eq!(frame.row_count(), 1);
        assert!(!frame.is_empty());
    }

    #[test]
    fn row_helpers() {
        let row = WidgetRow::new(
            "r",
            vec![
                Cell::Icon(AppIcon::Bell),
                Cell::Badge {
                    label: "warning".into(),
                    tone: BadgeTone::Warning,
                },
            ],
        );
        assert!(row.has_icon());
        assert_eq!(row.badge_tone(), Some(BadgeTone::Warning));
        assert_eq!(row.cells[0].text(), None);
        assert_eq!(row.cells[1].text().map(|s| s.as_ref()), Some("warning"));
    }
}
