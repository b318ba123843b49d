/// Render a simple aligned table for string rows. Columns are sized to
/// their widest cell, then shrunk widest-first to honor `max_width`;
/// numeric cells are right-aligned.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(4)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.len());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                let cell = truncate(&cell, *width);
                let numeric = is_numeric(&cell);
                pad(&cell, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    loop {
        let total = widths.iter().sum::<usize>() + separators;
        if total <= max_width {
            return;
        }

        // Shrink the widest column that still has room above its header.
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            return;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn aligns_mixed_width_rows() {
        let rows = vec![
            vec!["svy-1".to_string(), "ACTIVE".to_string()],
            vec!["svy-200".to_string(), "DRAFT".to_string()],
        ];
        let table = render(&["id", "status"], &rows, None);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("id"));
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].len(), lines[3].len());
    }

    #[test]
    fn numeric_cells_right_align() {
        let rows = vec![vec!["teams".to_string(), "7".to_string()]];
        let table = render(&["name", "count"], &rows, None);
        let row = table.lines().last().expect("row line");
        assert!(row.ends_with('7'));
    }

    #[test]
    fn truncates_to_fit_max_width() {
        let rows = vec![vec![
            "a-very-long-identifier-value".to_string(),
            "ok".to_string(),
        ]];
        let table = render(&["id", "st"], &rows, Some(16));
        for line in table.lines() {
            assert!(line.chars().count() <= 16, "line too wide: {line:?}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn short_rows_pad_with_placeholder() {
        let rows = vec![vec!["only-one-cell".to_string()]];
        let table = render(&["a", "b"], &rows, None);
        assert!(table.lines().last().is_some_and(|line| line.contains('-')));
    }
}
