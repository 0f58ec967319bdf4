use std::{fmt, hash::Hash, path::Path};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::{Error, Result};

/// A small labeled table: ordered row keys, ordered column keys, and a
/// dense row-major value grid. Every result in this crate is one of
/// these. Tables are plain values; anything handed out by an accessor
/// is either a borrow or an independent copy of the stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<R, C, V> {
    columns: Vec<C>,
    rows: Vec<R>,
    values: Vec<V>,
}

impl<R, C, V> Table<R, C, V> {
    pub fn new(columns: Vec<C>) -> Result<Self>
    where
        C: Eq + Hash,
    {
        if columns.is_empty() {
            return Err(Error::NoColumns);
        }
        let mut seen = FxHashSet::default();
        if !columns.iter().all(|column| seen.insert(column)) {
            return Err(Error::DuplicateColumn);
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
            values: Vec::new(),
        })
    }

    pub(crate) fn from_parts(columns: Vec<C>, rows: Vec<R>, values: Vec<V>) -> Self {
        debug_assert!(!columns.is_empty());
        debug_assert_eq!(values.len(), rows.len() * columns.len());
        Self {
            columns,
            rows,
            values,
        }
    }

    pub fn push_row(&mut self, key: R, values: Vec<V>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(Error::RowWidthMismatch {
                expected: self.columns.len(),
                got: values.len(),
            });
        }
        self.rows.push(key);
        self.values.extend(values);
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn row_keys(&self) -> &[R] {
        &self.rows
    }

    pub fn column_keys(&self) -> &[C] {
        &self.columns
    }

    pub fn row(&self, index: usize) -> Option<&[V]> {
        if index >= self.rows.len() {
            return None;
        }
        let width = self.columns.len();
        Some(&self.values[index * width..(index + 1) * width])
    }

    pub fn row_by_key(&self, key: &R) -> Option<&[V]>
    where
        R: PartialEq,
    {
        let index = self.rows.iter().position(|row| row == key)?;
        self.row(index)
    }

    pub fn get(&self, row: &R, column: &C) -> Option<&V>
    where
        R: PartialEq,
        C: PartialEq,
    {
        let column_index = self.columns.iter().position(|c| c == column)?;
        self.row_by_key(row).map(|values| &values[column_index])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = (&R, &[V])> {
        self.rows.iter().zip(self.values.chunks(self.columns.len()))
    }

    pub fn pretty_print(&self, f: &mut impl fmt::Write) -> fmt::Result
    where
        R: fmt::Display,
        C: fmt::Display,
        V: fmt::Display,
    {
        let keys: Vec<String> = self.rows.iter().map(ToString::to_string).collect();
        let cells: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        let key_width = keys.iter().map(|key| key.width()).max().unwrap_or(0);

        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|column| column.to_string().width())
            .collect();
        for row in cells.chunks(self.columns.len()) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        write!(f, "{}", pad_cells("", key_width))?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {}", pad_cells(&column.to_string(), *width))?;
        }
        writeln!(f)?;

        for (key, row) in keys.iter().zip(cells.chunks(self.columns.len())) {
            write!(f, "{}", pad_cells(key, key_width))?;
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, "  {}", pad_cells(cell, *width))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()>
    where
        R: Serialize,
        C: Serialize,
        V: Serialize,
    {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn pad_cells(s: &str, field_cells: usize) -> String {
    let pad = field_cells.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table<usize, String, i64> {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        table.push_row(0, vec![1, 2]).unwrap();
        table.push_row(1, vec![3, 4]).unwrap();
        table
    }

    #[test]
    fn test_no_columns() {
        assert_eq!(
            Table::<usize, String, i64>::new(vec![]).unwrap_err(),
            Error::NoColumns
        );
    }

    #[test]
    fn test_duplicate_column() {
        let columns = vec!["a".to_string(), "a".to_string()];
        assert_eq!(
            Table::<usize, String, i64>::new(columns).unwrap_err(),
            Error::DuplicateColumn
        );
    }

    #[test]
    fn test_row_width_mismatch() {
        let mut table = sample();
        assert_eq!(
            table.push_row(2, vec![5]).unwrap_err(),
            Error::RowWidthMismatch {
                expected: 2,
                got: 1
            }
        );
        assert_eq!(table.n_rows(), 2);
    }

    #[test]
    fn test_lookup() {
        let table = sample();
        assert_eq!(table.get(&1, &"a".to_string()), Some(&3));
        assert_eq!(table.get(&1, &"c".to_string()), None);
        assert_eq!(table.row_by_key(&0), Some(&[1, 2][..]));
        assert_eq!(table.row(5), None);
    }

    #[test]
    fn test_copies_are_independent() {
        let table = sample();
        let mut copy = table.clone();
        copy.push_row(2, vec![5, 6]).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(copy.n_rows(), 3);
    }

    #[test]
    fn test_pretty_print_alignment() {
        let mut table = Table::new(vec!["face".to_string(), "weight".to_string()]).unwrap();
        table.push_row(0, vec!["ten".to_string(), "1".to_string()]).unwrap();
        table.push_row(1, vec!["1".to_string(), "2.5".to_string()]).unwrap();
        let mut out = String::new();
        table.pretty_print(&mut out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("face"));
        assert!(lines[0].contains("weight"));
        assert!(lines[1].contains("ten"));
    }

    #[test]
    fn test_json_round_trip() {
        let table = sample();
        let path = std::env::temp_dir().join("astragali_table_test.json");
        table.write_json(&path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        let restored: Table<usize, String, i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, table);
        std::fs::remove_file(&path).ok();
    }
}
