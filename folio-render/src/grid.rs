//! Fixed-column card grid.
//!
//! Cards fill rows left-to-right, top-to-bottom. The last row may be short;
//! it is never padded with empty cells.

use crate::card::Card;

/// Cards arranged in rows of at most `columns` cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: Vec<Vec<Card>>,
}

impl Grid {
    /// Lays out `cards` in rows of `columns`. A column count of zero is
    /// treated as one.
    #[must_use]
    pub fn new(cards: Vec<Card>, columns: usize) -> Self {
        let columns = columns.max(1);
        let mut rows = Vec::with_capacity(cards.len().div_ceil(columns));
        let mut current = Vec::with_capacity(columns);
        for card in cards {
            current.push(card);
            if current.len() == columns {
                rows.push(std::mem::replace(&mut current, Vec::with_capacity(columns)));
            }
        }
        if !current.is_empty() {
            rows.push(current);
        }
        Self { columns, rows }
    }

    /// Number of columns per row.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// The rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Card>] {
        &self.rows
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the grid holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over cards in reading order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.rows.iter().flatten()
    }

    /// Renders the grid as nested `<div>` rows.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<section class=\"grid\" style=\"--columns: {}\">\n",
            self.columns
        );
        for row in &self.rows {
            html.push_str("<div class=\"row\">\n");
            for card in row {
                html.push_str(&card.to_html());
                html.push('\n');
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>");
        html
    }
}
