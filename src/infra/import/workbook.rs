use std::io::Cursor;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets};

use super::category_from_candidates;
use crate::domain::entities::catalog::Catalog;

/// Tries to sniff a spreadsheet workbook out of the raw bytes. `None` means
/// the bytes are in no format calamine recognizes, not that the file is bad.
pub(crate) fn detect_workbook(bytes: &[u8]) -> Option<Sheets<Cursor<Vec<u8>>>> {
    open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).ok()
}

/// One category per sheet, in workbook order. Only the first cell of each row
/// is a product-name candidate; all other columns are ignored.
pub(crate) fn read_workbook(mut workbook: Sheets<Cursor<Vec<u8>>>) -> Result<Catalog> {
    let mut categories = Vec::new();
    for sheet_name in workbook.sheet_names().to_owned() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("failed to read sheet: {sheet_name}"))?;
        let first_cells: Vec<String> = range
            .rows()
            .map(|row| row.first().map(cell_to_string).unwrap_or_default())
            .collect();
        categories.push(category_from_candidates(
            &sheet_name,
            first_cells.iter().map(String::as_str),
        ));
    }
    Ok(Catalog { categories })
}

pub(crate) fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_rejects_plain_text() {
        assert!(detect_workbook(b"Banana;3\n").is_none());
    }

    #[test]
    fn empty_cells_stringify_to_empty() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("Uva".to_string())), "Uva");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
    }
}
