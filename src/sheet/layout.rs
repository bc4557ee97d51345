//! Uniform grid geometry for contact sheets

/// Cell grid for a contact sheet
///
/// Every cell is as wide as the widest image and as tall as the tallest, so
/// smaller images sit in the top-left corner of their cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    columns: u32,
    rows: u32,
    cell_width: u32,
    cell_height: u32,
}

impl SheetLayout {
    /// Lay out images with the given (width, height) pairs in `columns` columns
    ///
    /// Returns `None` when there are no images or no columns.
    pub fn compute(dimensions: &[(u32, u32)], columns: u32) -> Option<Self> {
        if dimensions.is_empty() || columns == 0 {
            return None;
        }

        let count = u32::try_from(dimensions.len()).ok()?;
        let cell_width = dimensions.iter().map(|&(width, _)| width).max()?;
        let cell_height = dimensions.iter().map(|&(_, height)| height).max()?;

        Some(Self {
            columns,
            rows: count.div_ceil(columns),
            cell_width,
            cell_height,
        })
    }

    /// Number of columns
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows, ceiling of images over columns
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Cell size as (width, height)
    pub const fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// Canvas size as (width, height)
    pub const fn canvas_size(&self) -> (u32, u32) {
        (
            self.columns.saturating_mul(self.cell_width),
            self.rows.saturating_mul(self.cell_height),
        )
    }

    /// Top-left corner of the cell holding image `index`
    ///
    /// Images fill rows left to right, then top to bottom.
    pub const fn cell_origin(&self, index: u32) -> (u32, u32) {
        let column = index % self.columns;
        let row = index / self.columns;
        (
            column.saturating_mul(self.cell_width),
            row.saturating_mul(self.cell_height),
        )
    }
}
