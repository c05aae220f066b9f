//! Allocation map presentation.
//!
//! [`BlockAllocator::allocation_map`] returns one flat marker string;
//! breaking it into labelled rows for display is presentation logic and
//! lives here, outside the allocator's contract.
//!
//! [`BlockAllocator::allocation_map`]: crate::allocator::BlockAllocator::allocation_map
//!
//! # Examples
//!
//! ```rust
//! use blockfit::map::MapFormatter;
//!
//! let formatter = MapFormatter::new(10);
//! let out = formatter.format("XXXXX.....XXX.......");
//! assert_eq!(out, "  0: XXXXX.....\n 10: XXX.......");
//! ```

/// Row width used by the classic storage-map layout.
pub const DEFAULT_ROW_WIDTH: usize = 20;

/// Formats a flat allocation map into offset-labelled rows.
///
/// Each row holds `row_width` markers and is prefixed with its starting
/// block index, right-aligned to the widest offset (minimum 3 columns),
/// followed by `": "`. The final row keeps its natural length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapFormatter {
    /// Markers per row.
    pub row_width: usize,
}

impl Default for MapFormatter {
    fn default() -> Self {
        Self {
            row_width: DEFAULT_ROW_WIDTH,
        }
    }
}

impl MapFormatter {
    /// Create a formatter with the given row width.
    ///
    /// A zero width is treated as one marker per row.
    pub fn new(row_width: usize) -> Self {
        Self {
            row_width: row_width.max(1),
        }
    }

    /// Break `map` into offset-labelled rows.
    ///
    /// An empty map formats to an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockfit::map::MapFormatter;
    ///
    /// let out = MapFormatter::new(4).format("XXXXX.");
    /// assert_eq!(out, "  0: XXXX\n  4: X.");
    /// ```
    pub fn format(&self, map: &str) -> String {
        let width = self.row_width.max(1);
        let markers: Vec<char> = map.chars().collect();

        if markers.is_empty() {
            return String::new();
        }

        let last_offset = (markers.len() - 1) / width * width;
        let label_width = last_offset.to_string().len().max(3);

        markers
            .chunks(width)
            .enumerate()
            .map(|(row, chunk)| {
                let offset = row * width;
                let slice: String = chunk.iter().collect();
                format!("{offset:>label_width$}: {slice}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_row_width() {
        assert_eq!(MapFormatter::default().row_width, 20);
    }

    #[test]
    fn test_format_exact_rows() {
        let map = format!("{}{}", "X".repeat(20), ".".repeat(20));
        let out = MapFormatter::default().format(&map);
        assert_eq!(out, format!("  0: {}\n 20: {}", "X".repeat(20), ".".repeat(20)));
    }

    #[test]
    fn test_format_trailing_short_row() {
        let out = MapFormatter::new(4).format("XXXXX.");
        assert_eq!(out, "  0: XXXX\n  4: X.");
    }

    #[test]
    fn test_format_single_row() {
        let out = MapFormatter::new(20).format("XX..");
        assert_eq!(out, "  0: XX..");
    }

    #[test]
    fn test_format_empty_map() {
        assert_eq!(MapFormatter::default().format(""), "");
    }

    #[test]
    fn test_format_hundred_blocks_five_rows() {
        let map = ".".repeat(100);
        let out = MapFormatter::default().format(&map);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("  0: "));
        assert!(lines[4].starts_with(" 80: "));
        assert!(lines.iter().all(|l| l.len() == 5 + 20));
    }

    #[test]
    fn test_format_wide_offsets_stay_aligned() {
        let map = ".".repeat(10_050);
        let out = MapFormatter::default().format(&map);
        let lines: Vec<&str> = out.lines().collect();

        // Widest offset is 10040, five digits
        assert!(lines[0].starts_with("    0: "));
        assert!(lines.last().unwrap().starts_with("10040: "));
    }

    #[test]
    fn test_zero_width_clamped_to_one() {
        let out = MapFormatter::new(0).format("X.");
        assert_eq!(out, "  0: X\n  1: .");
    }
}
