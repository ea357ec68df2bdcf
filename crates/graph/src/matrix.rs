use crate::error::Result;
use crate::types::ReferenceGraph;
use std::fs;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_DELIMITER: char = ';';
pub const ROW_SUM_LABEL: &str = "Summe Zeile";
pub const COLUMN_SUM_LABEL: &str = "Summe Spalte";

/// 0/1 adjacency matrix over the graph's export order, with sums
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    names: Vec<String>,
    cells: Vec<Vec<u8>>,
    row_sums: Vec<usize>,
    column_sums: Vec<usize>,
    total: usize,
}

impl AdjacencyMatrix {
    pub fn from_graph(graph: &ReferenceGraph) -> Self {
        let nodes: Vec<_> = graph.ordered_nodes().collect();
        let names: Vec<String> = nodes.iter().map(|(_, node)| node.name.clone()).collect();

        let cells: Vec<Vec<u8>> = nodes
            .iter()
            .map(|&(from, _)| {
                nodes
                    .iter()
                    .map(|&(to, _)| u8::from(graph.graph.find_edge(from, to).is_some()))
                    .collect()
            })
            .collect();

        let row_sums: Vec<usize> = cells
            .iter()
            .map(|row| row.iter().map(|&cell| usize::from(cell)).sum())
            .collect();
        let column_sums: Vec<usize> = (0..names.len())
            .map(|col| cells.iter().map(|row| usize::from(row[col])).sum())
            .collect();
        let total = row_sums.iter().sum();

        Self {
            names,
            cells,
            row_sums,
            column_sums,
            total,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn row_sums(&self) -> &[usize] {
        &self.row_sums
    }

    pub fn column_sums(&self) -> &[usize] {
        &self.column_sums
    }

    /// Grand total, equal to the number of edges
    pub fn total(&self) -> usize {
        self.total
    }

    /// Write the delimited table. Names are written verbatim and must not
    /// contain the delimiter.
    pub fn write_delimited<W: Write>(&self, mut out: W, delimiter: char) -> std::io::Result<()> {
        let sep = delimiter.to_string();

        let mut header = vec![String::new()];
        header.extend(self.names.iter().cloned());
        header.push(ROW_SUM_LABEL.to_string());
        writeln!(out, "{}", header.join(&sep))?;

        for ((name, row), row_sum) in self.names.iter().zip(&self.cells).zip(&self.row_sums) {
            let mut fields = vec![name.clone()];
            fields.extend(row.iter().map(u8::to_string));
            fields.push(row_sum.to_string());
            writeln!(out, "{}", fields.join(&sep))?;
        }

        let mut trailer = vec![COLUMN_SUM_LABEL.to_string()];
        trailer.extend(self.column_sums.iter().map(usize::to_string));
        trailer.push(self.total.to_string());
        writeln!(out, "{}", trailer.join(&sep))?;

        out.flush()
    }

    pub fn to_delimited_string(&self, delimiter: char) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_delimited(&mut buf, delimiter);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the table as UTF-8, creating parent directories
    pub fn write_to_path(&self, path: &Path, delimiter: char) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = fs::File::create(path)?;
        self.write_delimited(std::io::BufWriter::new(file), delimiter)?;
        Ok(())
    }
}
