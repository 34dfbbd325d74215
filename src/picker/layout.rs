//! Picker size parameters.
//!
//! Sizes are configured in pixels and converted to terminal cells with the
//! terminal's cell metrics at render time.

use crate::error::{ConfigError, ConfigResult};

/// Default panel height in pixels.
pub const DEFAULT_PICKER_HEIGHT: u32 = 500;

/// Default panel width in pixels.
pub const DEFAULT_PICKER_WIDTH: u32 = 500;

/// Validated layout of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLayout {
    rows_in_one_page: usize,
    columns_in_one_page: usize,
    icon_height: u32,
    icon_width: u32,
    picker_height: u32,
    picker_width: u32,
}

impl PickerLayout {
    /// Build a layout with the default panel size.
    ///
    /// Every dimension must be non-zero and the page size must fit in `usize`.
    pub fn new(
        rows_in_one_page: usize,
        columns_in_one_page: usize,
        icon_height: u32,
        icon_width: u32,
    ) -> ConfigResult<Self> {
        if rows_in_one_page == 0 {
            return Err(ConfigError::ZeroDimension("rows_in_one_page"));
        }
        if columns_in_one_page == 0 {
            return Err(ConfigError::ZeroDimension("columns_in_one_page"));
        }
        if icon_height == 0 {
            return Err(ConfigError::ZeroDimension("icon_height"));
        }
        if icon_width == 0 {
            return Err(ConfigError::ZeroDimension("icon_width"));
        }
        if rows_in_one_page.checked_mul(columns_in_one_page).is_none() {
            return Err(ConfigError::PageTooLarge {
                rows: rows_in_one_page,
                columns: columns_in_one_page,
            });
        }

        Ok(Self {
            rows_in_one_page,
            columns_in_one_page,
            icon_height,
            icon_width,
            picker_height: DEFAULT_PICKER_HEIGHT,
            picker_width: DEFAULT_PICKER_WIDTH,
        })
    }

    /// Override the panel size.
    pub fn with_picker_size(mut self, picker_height: u32, picker_width: u32) -> ConfigResult<Self> {
        if picker_height == 0 {
            return Err(ConfigError::ZeroDimension("picker_height"));
        }
        if picker_width == 0 {
            return Err(ConfigError::ZeroDimension("picker_width"));
        }
        self.picker_height = picker_height;
        self.picker_width = picker_width;
        Ok(self)
    }

    pub fn rows_in_one_page(&self) -> usize {
        self.rows_in_one_page
    }

    pub fn columns_in_one_page(&self) -> usize {
        self.columns_in_one_page
    }

    /// Icons per page.
    pub fn page_size(&self) -> usize {
        self.rows_in_one_page * self.columns_in_one_page
    }

    /// Icon cell size in terminal cells as `(width, height)`.
    pub fn icon_cells(&self, metrics: CellMetrics) -> (u16, u16) {
        (
            metrics.columns_for(self.icon_width),
            metrics.rows_for(self.icon_height),
        )
    }

    /// Panel size in terminal cells as `(width, height)`.
    pub fn picker_cells(&self, metrics: CellMetrics) -> (u16, u16) {
        (
            metrics.columns_for(self.picker_width),
            metrics.rows_for(self.picker_height),
        )
    }
}

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width_px: u32,
    pub height_px: u32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: 8,
            height_px: 16,
        }
    }
}

impl CellMetrics {
    /// Metrics from a reported window size; `None` when the terminal does not
    /// report pixel dimensions.
    pub fn from_window(columns: u16, rows: u16, width_px: u16, height_px: u16) -> Option<Self> {
        if columns == 0 || rows == 0 || width_px == 0 || height_px == 0 {
            return None;
        }
        let width_px = u32::from(width_px) / u32::from(columns);
        let height_px = u32::from(height_px) / u32::from(rows);
        (width_px > 0 && height_px > 0).then_some(Self {
            width_px,
            height_px,
        })
    }

    /// Parse `WIDTHxHEIGHT`, e.g. `8x16`.
    pub fn parse(value: &str) -> ConfigResult<Self> {
        let invalid = || ConfigError::InvalidCellSize(value.to_string());
        let (w, h) = value.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width_px: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height_px: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width_px == 0 || height_px == 0 {
            return Err(invalid());
        }
        Ok(Self {
            width_px,
            height_px,
        })
    }

    /// Columns covering `px` pixels, rounded to nearest, at least one.
    pub fn columns_for(&self, px: u32) -> u16 {
        cells_for(px, self.width_px)
    }

    /// Rows covering `px` pixels, rounded to nearest, at least one.
    pub fn rows_for(&self, px: u32) -> u16 {
        cells_for(px, self.height_px)
    }
}

fn cells_for(px: u32, cell_px: u32) -> u16 {
    let cells = px.saturating_add(cell_px / 2) / cell_px.max(1);
    u16::try_from(cells.max(1)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            PickerLayout::new(0, 6, 48, 48),
            Err(ConfigError::ZeroDimension("rows_in_one_page"))
        );
        assert_eq!(
            PickerLayout::new(6, 0, 48, 48),
            Err(ConfigError::ZeroDimension("columns_in_one_page"))
        );
        assert_eq!(
            PickerLayout::new(6, 6, 0, 48),
            Err(ConfigError::ZeroDimension("icon_height"))
        );
        let layout = PickerLayout::new(6, 6, 48, 48).unwrap();
        assert_eq!(
            layout.with_picker_size(500, 0),
            Err(ConfigError::ZeroDimension("picker_width"))
        );
    }

    #[test]
    fn test_page_size() {
        let layout = PickerLayout::new(6, 6, 48, 48).unwrap();
        assert_eq!(layout.page_size(), 36);
    }

    #[test]
    fn test_page_size_overflow_is_rejected() {
        let rows = usize::MAX / 2 + 1;
        assert_eq!(
            PickerLayout::new(rows, 2, 48, 48),
            Err(ConfigError::PageTooLarge { rows, columns: 2 })
        );

        let layout = PickerLayout::new(usize::MAX, 1, 48, 48).unwrap();
        assert_eq!(layout.page_size(), usize::MAX);
    }

    #[test]
    fn test_huge_pixel_sizes_saturate() {
        let metrics = CellMetrics::default();
        let layout = PickerLayout::new(6, 6, u32::MAX, u32::MAX)
            .unwrap()
            .with_picker_size(500, u32::MAX)
            .unwrap();
        assert_eq!(layout.picker_cells(metrics), (u16::MAX, 31));
        assert_eq!(layout.icon_cells(metrics), (u16::MAX, u16::MAX));

        let one_px = CellMetrics {
            width_px: 1,
            height_px: 1,
        };
        assert_eq!(one_px.columns_for(u32::MAX), u16::MAX);
    }

    #[test]
    fn test_pixel_to_cell_conversion() {
        let layout = PickerLayout::new(6, 6, 48, 48).unwrap();
        let metrics = CellMetrics::default();
        assert_eq!(layout.icon_cells(metrics), (6, 3));
        assert_eq!(layout.picker_cells(metrics), (63, 31));

        let tiny = PickerLayout::new(1, 1, 1, 1).unwrap();
        assert_eq!(tiny.icon_cells(metrics), (1, 1));
    }

    #[test]
    fn test_parse_cell_metrics() {
        assert_eq!(
            CellMetrics::parse("10x20"),
            Ok(CellMetrics {
                width_px: 10,
                height_px: 20
            })
        );
        assert!(CellMetrics::parse("10").is_err());
        assert!(CellMetrics::parse("0x20").is_err());
        assert!(CellMetrics::parse("axb").is_err());
    }

    #[test]
    fn test_metrics_from_window() {
        assert_eq!(
            CellMetrics::from_window(100, 50, 900, 900),
            Some(CellMetrics {
                width_px: 9,
                height_px: 18
            })
        );
        assert_eq!(CellMetrics::from_window(100, 50, 0, 0), None);
    }
}
