//! Formatting utilities for terminal output

use crate::core::BitVec;

/// Format a bit vector as spaced square cells
///
/// Ones render filled, zeros hollow, e.g. `■ □ ■ ■ □ ■`.
#[must_use]
pub fn bit_cells(vector: &BitVec) -> String {
    let cells: Vec<&str> = vector
        .bits()
        .iter()
        .map(|&b| if b == 1 { "■" } else { "□" })
        .collect();

    cells.join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the maximum for the vector length
///
/// A length-L guess induces at most L+1 feedback buckets, so entropy is
/// bounded by log2(L+1).
#[must_use]
pub fn entropy_bar(entropy: f64, length: usize, width: usize) -> String {
    let max_entropy = ((length + 1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_cells_renders_ones_and_zeros() {
        let v: BitVec = "101".parse().unwrap();
        assert_eq!(bit_cells(&v), "■ □ ■");
    }

    #[test]
    fn bit_cells_all_zero() {
        let v = BitVec::zeros(4);
        assert_eq!(bit_cells(&v), "□ □ □ □");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(10.0, 10.0, 10);
        assert_eq!(bar, "█".repeat(10));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 10.0, 10);
        assert_eq!(bar, "░".repeat(10));
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        let bar = create_progress_bar(15.0, 10.0, 10);
        assert_eq!(bar, "█".repeat(10));
    }

    #[test]
    fn entropy_bar_scales_to_length() {
        // log2(7) bits is the ceiling for length 6
        let full = entropy_bar(((6 + 1) as f64).log2(), 6, 8);
        assert_eq!(full, "█".repeat(8));
    }
}
