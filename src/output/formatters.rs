//! Formatting utilities for terminal output

/// Render a 6-dot cell as three rows of two dots
///
/// Raised dots are `●`, flat dots `○`, unknown dots `?`.
#[must_use]
pub fn braille_cell_rows(dots: &[Option<bool>; 6]) -> [String; 3] {
    let dot = |d: Option<bool>| match d {
        Some(true) => '●',
        Some(false) => '○',
        None => '?',
    };
    // dots 1-3 run down the left column, 4-6 down the right
    std::array::from_fn(|row| [dot(dots[row]), dot(dots[row + 3])].iter().collect())
}

/// Render several cells side by side, one line per dot row
#[must_use]
pub fn braille_grid_lines(cells: &[[Option<bool>; 6]]) -> Vec<String> {
    let rendered: Vec<[String; 3]> = cells.iter().map(braille_cell_rows).collect();
    (0..3)
        .map(|row| {
            rendered
                .iter()
                .map(|cell| cell[row].as_str())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_rows_follow_dot_numbering() {
        // dots 1, 2, 5 -> H
        let dots = [Some(true), Some(true), Some(false), Some(false), Some(true), Some(false)];
        assert_eq!(braille_cell_rows(&dots), ["●○", "●●", "○○"]);
    }

    #[test]
    fn unknown_dots_are_marked() {
        let dots = [None, Some(false), Some(false), Some(false), Some(false), Some(false)];
        assert_eq!(braille_cell_rows(&dots)[0], "?○");
    }

    #[test]
    fn grid_lines_join_cells() {
        let a = [Some(true), Some(false), Some(false), Some(false), Some(false), Some(false)];
        let lines = braille_grid_lines(&[a, a]);
        assert_eq!(lines, ["●○  ●○", "○○  ○○", "○○  ○○"]);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
