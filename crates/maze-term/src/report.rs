use std::io::{self, Write};
use std::time::Duration;

use maze_paths::SearchOutcome;

const RULE: usize = 80;

/// One line of the comparison table.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub name: String,
    pub outcome: SearchOutcome,
    pub elapsed: Option<Duration>,
}

/// Print the report block for a single search.
pub fn write_result<W: Write>(
    w: &mut W,
    name: &str,
    outcome: &SearchOutcome,
    elapsed: Option<Duration>,
) -> io::Result<()> {
    writeln!(w, "{}", "=".repeat(50))?;
    writeln!(w, "ALGORITHM: {name}")?;
    writeln!(w, "{}", "=".repeat(50))?;

    match &outcome.path {
        Some(path) => {
            writeln!(w, "Solution found")?;
            writeln!(w, "Path length: {}", path.len())?;
        }
        None => writeln!(w, "No solution found")?,
    }
    writeln!(w, "Nodes explored: {}", outcome.explored)?;
    if let Some(t) = elapsed {
        writeln!(w, "Elapsed: {:.6} s", t.as_secs_f64())?;
    }
    if let Some(path) = &outcome.path {
        let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
        writeln!(w, "Path: {}", cells.join(" -> "))?;
    }
    Ok(())
}

/// Print the side-by-side comparison table.
pub fn write_comparison<W: Write>(w: &mut W, rows: &[ReportRow]) -> io::Result<()> {
    writeln!(w, "{}", "=".repeat(RULE))?;
    writeln!(w, "ALGORITHM COMPARISON")?;
    writeln!(w, "{}", "=".repeat(RULE))?;
    writeln!(
        w,
        "{:<20} {:<20} {:<20} {:<15}",
        "Algorithm", "Path length", "Nodes explored", "Time (s)"
    )?;
    writeln!(w, "{}", "-".repeat(RULE))?;

    for row in rows {
        let length = row
            .outcome
            .path_len()
            .map_or_else(|| "no solution".to_string(), |n| n.to_string());
        let time = row
            .elapsed
            .map_or_else(|| "N/A".to_string(), |t| format!("{:.6}", t.as_secs_f64()));
        writeln!(
            w,
            "{:<20} {:<20} {:<20} {:<15}",
            row.name, length, row.outcome.explored, time
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Position;

    fn found() -> SearchOutcome {
        SearchOutcome::found(vec![Position::new(0, 0), Position::new(0, 1)], 2)
    }

    #[test]
    fn result_block_for_found_path() {
        let mut buf = Vec::new();
        write_result(&mut buf, "BFS", &found(), Some(Duration::from_millis(3))).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("ALGORITHM: BFS"));
        assert!(text.contains("Path length: 2"));
        assert!(text.contains("Nodes explored: 2"));
        assert!(text.contains("Elapsed: 0.003000 s"));
        assert!(text.contains("Path: (0, 0) -> (0, 1)"));
    }

    #[test]
    fn result_block_for_missing_path() {
        let mut buf = Vec::new();
        write_result(&mut buf, "DFS", &SearchOutcome::not_found(1), None).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("No solution found"));
        assert!(text.contains("Nodes explored: 1"));
        assert!(!text.contains("Elapsed"));
        assert!(!text.contains("Path:"));
    }

    #[test]
    fn comparison_table_rows() {
        let rows = vec![
            ReportRow {
                name: "BFS".into(),
                outcome: found(),
                elapsed: None,
            },
            ReportRow {
                name: "A*".into(),
                outcome: SearchOutcome::not_found(4),
                elapsed: Some(Duration::from_micros(1500)),
            },
        ];
        let mut buf = Vec::new();
        write_comparison(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[3].starts_with("Algorithm"));
        assert!(lines[5].starts_with("BFS"));
        assert!(lines[5].contains("N/A"));
        assert!(lines[6].contains("no solution"));
        assert!(lines[6].contains("0.001500"));
    }
}
