use crate::ui::widgets::r#box::visible_width;

/// Column-aligned text table. Cells are right-aligned except the first column.
#[derive(Debug, Default, Clone)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with `paint` applied to each body cell after padding
    pub fn render_with(&self, paint: impl Fn(usize, usize, &str) -> String) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0);

        let widths: Vec<usize> = (0..columns)
            .map(|c| {
                std::iter::once(&self.header)
                    .chain(&self.rows)
                    .filter_map(|row| row.get(c))
                    .map(|cell| visible_width(cell))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&self.render_line(&self.header, &widths, |_, s| s.to_string()));
        for (r, row) in self.rows.iter().enumerate() {
            out.push_str(&self.render_line(row, &widths, |c, s| paint(r, c, s)));
        }
        out
    }

    pub fn render(&self) -> String {
        self.render_with(|_, _, s| s.to_string())
    }

    fn render_line(
        &self,
        row: &[String],
        widths: &[usize],
        paint: impl Fn(usize, &str) -> String,
    ) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(c, &width)| {
                let cell = row.get(c).map(String::as_str).unwrap_or("");
                let pad = " ".repeat(width.saturating_sub(visible_width(cell)));
                if c == 0 {
                    format!("{}{}", paint(c, cell), pad)
                } else {
                    format!("{}{}", pad, paint(c, cell))
                }
            })
            .collect();
        format!("{}\n", cells.join(" ").trim_end())
    }
}
