//! Masonry grid layout
//!
//! Column count follows fixed width breakpoints. Items are packed online into
//! the shortest column, so appending a page never moves cells that are
//! already on screen.

use serde::{Deserialize, Serialize};

/// Widths up to and including `max_width` use `columns` columns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub max_width: u32,
    pub columns: usize,
}

/// Width-to-column table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Columns used above the widest breakpoint
    pub default_columns: usize,
    pub steps: Vec<Breakpoint>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        let steps = [
            (2600, 7),
            (2200, 6),
            (1800, 5),
            (1400, 4),
            (1000, 3),
            (600, 2),
            (400, 1),
        ]
        .into_iter()
        .map(|(max_width, columns)| Breakpoint { max_width, columns })
        .collect();

        Self {
            default_columns: 8,
            steps,
        }
    }
}

impl Breakpoints {
    /// Column count for a container `width` pixels wide.
    ///
    /// The narrowest breakpoint that still fits the width wins; widths above
    /// every breakpoint get `default_columns`. Never returns 0.
    pub fn columns_for(&self, width: f64) -> usize {
        self.steps
            .iter()
            .filter(|step| width <= step.max_width as f64)
            .min_by_key(|step| step.max_width)
            .map(|step| step.columns)
            .unwrap_or(self.default_columns)
            .max(1)
    }
}

/// Width of one column after subtracting the gutters between columns
pub fn column_width(container_width: f64, columns: usize, gutter: f64) -> f64 {
    let columns = columns.max(1);
    let gutters = gutter * (columns - 1) as f64;
    ((container_width - gutters) / columns as f64).max(0.0)
}

/// Assignment of item indices to columns
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MasonryLayout {
    columns: Vec<Vec<usize>>,
    heights: Vec<f64>,
    /// Gutter below each cell, in units of column width
    gap: f64,
}

impl MasonryLayout {
    pub fn new(columns: usize, column_width: f64, gutter: f64) -> Self {
        let columns = columns.max(1);
        let gap = if column_width > 0.0 {
            gutter / column_width
        } else {
            0.0
        };
        Self {
            columns: vec![Vec::new(); columns],
            heights: vec![0.0; columns],
            gap,
        }
    }

    /// Pack items given their height/width ratios
    pub fn pack(
        ratios: impl IntoIterator<Item = f64>,
        columns: usize,
        column_width: f64,
        gutter: f64,
    ) -> Self {
        let mut layout = Self::new(columns, column_width, gutter);
        for ratio in ratios {
            layout.push(ratio);
        }
        layout
    }

    /// Place the next item into the shortest column (leftmost on ties).
    /// Non-finite or non-positive ratios count as square.
    pub fn push(&mut self, ratio: f64) -> usize {
        let ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
        let index = self.len();

        let mut target = 0;
        for (col, height) in self.heights.iter().enumerate() {
            if *height < self.heights[target] {
                target = col;
            }
        }

        self.columns[target].push(index);
        self.heights[target] += ratio + self.gap;
        target
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Item indices per column, top to bottom
    pub fn columns(&self) -> &[Vec<usize>] {
        &self.columns
    }
}
