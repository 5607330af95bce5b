use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Figure placement on screen
// ---------------------------------------------------------------------------

/// Direction in which consecutive figure windows are tiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Left to right: each figure moves one column over.
    #[default]
    Horizontal,
    /// Top to bottom: each figure moves one row down.
    Vertical,
}

/// Grid position of the next figure window plus its figure number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCursor {
    pub column: u32,
    pub row: u32,
    pub figure_number: usize,
}

impl LayoutCursor {
    pub fn new(column: u32, row: u32, figure_number: usize) -> Self {
        Self {
            column,
            row,
            figure_number,
        }
    }

    /// The cursor for the figure after this one.
    #[must_use]
    pub fn advance(self, direction: LayoutDirection) -> Self {
        let (column, row) = match direction {
            LayoutDirection::Horizontal => (self.column.saturating_add(1), self.row),
            LayoutDirection::Vertical => (self.column, self.row.saturating_add(1)),
        };
        Self {
            column,
            row,
            figure_number: self.figure_number + 1,
        }
    }
}

/// Size of one figure window in pixels; also the grid pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

/// Where one figure window goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub figure_number: usize,
    pub x: u32,
    pub y: u32,
    pub size: FigureSize,
}

impl Placement {
    /// Offsets clamp at `u32::MAX` instead of wrapping for far-off cells.
    pub fn at(cursor: LayoutCursor, size: FigureSize) -> Self {
        Self {
            figure_number: cursor.figure_number,
            x: size.width.saturating_mul(cursor.column),
            y: size.height.saturating_mul(cursor.row),
            size,
        }
    }

    /// Position and size in egui points for a display with the given
    /// `pixels_per_point`. Placements are in physical pixels.
    pub fn logical(&self, pixels_per_point: f32) -> ([f32; 2], [f32; 2]) {
        let scale = if pixels_per_point > 0.0 {
            pixels_per_point
        } else {
            1.0
        };
        (
            [self.x as f32 / scale, self.y as f32 / scale],
            [
                self.size.width as f32 / scale,
                self.size.height as f32 / scale,
            ],
        )
    }

    /// Tk-style geometry string, `WxH+X+Y`.
    pub fn geometry(&self) -> String {
        format!(
            "{}x{}+{}+{}",
            self.size.width, self.size.height, self.x, self.y
        )
    }
}

/// Place `count` figures starting at `start`, returning each placement and the
/// cursor left after the last figure.
pub fn place_figures(
    count: usize,
    start: LayoutCursor,
    size: FigureSize,
    direction: LayoutDirection,
) -> (Vec<Placement>, LayoutCursor) {
    let mut cursor = start;
    let mut placements = Vec::with_capacity(count);
    for _ in 0..count {
        placements.push(Placement::at(cursor, size));
        cursor = cursor.advance(direction);
    }
    (placements, cursor)
}
