//! Bordered comparison table

use regionpress_io::file_size_kb;

use crate::bench::ImageResult;

const HEADERS: [&str; 6] = [
    "Image",
    "Original Size (KB)",
    "Iterative Compression",
    "Iterative Time (s)",
    "Recursive Compression",
    "Recursive Time (s)",
];
const WIDTHS: [usize; 6] = [17, 23, 22, 22, 22, 22];

fn border() -> String {
    let mut line = String::from("+");
    for width in WIDTHS {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn row<S: AsRef<str>>(cells: &[S; 6]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(WIDTHS) {
        line.push_str(&format!(" {:<width$} |", cell.as_ref()));
    }
    line
}

/// Render the results table, one bordered row per image.
///
/// Sizes are whole kilobytes and times are seconds with ten decimals.
pub fn render(results: &[ImageResult]) -> String {
    let border = border();
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&row(&HEADERS));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for result in results {
        let cells = [
            result.label.clone(),
            file_size_kb(result.original_bytes),
            file_size_kb(result.iterative.encoded_bytes),
            format!("{:.10}", result.iterative.seconds),
            file_size_kb(result.recursive.encoded_bytes),
            format!("{:.10}", result.recursive.seconds),
        ];
        out.push_str(&row(&cells));
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::StrategyRun;
    use regionpress_compress::{CompressSummary, Strategy};

    fn run(strategy: Strategy, seconds: f64, encoded_bytes: u64) -> StrategyRun {
        StrategyRun {
            strategy,
            seconds,
            encoded_bytes,
            summary: CompressSummary::default(),
        }
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = render(&[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], lines[2]);
        assert!(lines[1].starts_with("| Image             | Original Size (KB)      |"));
    }

    #[test]
    fn test_row_formatting() {
        let result = ImageResult {
            label: "Image 1".to_string(),
            original_bytes: 52_000,
            iterative: run(Strategy::Iterative, 0.125, 40_000),
            recursive: run(Strategy::Recursive, 0.5, 1000),
        };
        let table = render(&[result]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[3],
            "| Image 1           | 50 KB                   | 39 KB                  \
             | 0.1250000000           | 0 KB                   | 0.5000000000           |"
        );
        // All lines share the border width
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }
}
