//! Plain aligned text tables.

const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Rows of string cells under fixed headers.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing trailing cells render as `-`.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self.natural_widths();
        shrink_to_fit(&mut widths, options.max_width);

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        let header_line = join_cells(
            self.headers
                .iter()
                .zip(&widths)
                .map(|(header, width)| pad(&truncate(header, *width), *width, false)),
        );
        lines.push("-".repeat(header_line.chars().count()));
        lines.insert(0, header_line);

        for row in &self.rows {
            lines.push(join_cells(widths.iter().enumerate().map(|(idx, width)| {
                let text = truncate(row.get(idx).map_or("-", String::as_str), *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize(&text, padded)
                } else {
                    padded
                }
            })));
        }
        lines.join("\n")
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                    .max()
                    .unwrap_or(MIN_COLUMN_WIDTH)
            })
            .collect()
    }
}

/// Narrow the widest column one char at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|w| **w > MIN_COLUMN_WIDTH)
            .max_by_key(|w| **w)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(SEPARATOR).trim_end().to_string()
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '%'))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

/// Wrap a padded cell in an ANSI color chosen from its plain text.
fn colorize(plain: &str, padded: String) -> String {
    let code = match plain.trim().to_ascii_lowercase().as_str() {
        "admitted" | "met" | "completed" | "true" | "safety" | "low" => "32",
        "applied" | "pending" | "current" | "target" | "medium" => "33",
        "rejected" | "false" | "reach" | "high" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}
