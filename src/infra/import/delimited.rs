use anyhow::{Context, Result};

use super::category_from_candidates;
use crate::domain::entities::catalog::Catalog;

const FIELD_SEPARATORS: [char; 3] = [';', '\t', ','];

/// Plain-text fallback: one product candidate per line, first field only.
/// Lines may mix `;`, tab and `,`; everything after the first separator is
/// ignored rather than parsed as columns.
pub(crate) fn read_delimited(bytes: &[u8], category_name: &str) -> Result<Catalog> {
    let text = std::str::from_utf8(bytes)
        .context("file is neither a spreadsheet workbook nor UTF-8 delimited text")?;
    let first_fields = text.lines().map(first_field);
    Ok(Catalog {
        categories: vec![category_from_candidates(category_name, first_fields)],
    })
}

fn first_field(line: &str) -> &str {
    line.split(FIELD_SEPARATORS).next().unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_field_stops_at_any_separator() {
        assert_eq!(first_field("Maçã;5"), "Maçã");
        assert_eq!(first_field("Banana,3"), "Banana");
        assert_eq!(first_field("Tomate\t2"), "Tomate");
        assert_eq!(first_field("Pera"), "Pera");
        assert_eq!(first_field(";5"), "");
    }

    #[test]
    fn category_is_named_after_the_caller_fallback() {
        let catalog =
            read_delimited(b"Uva\n", "frutas-da-semana").expect("delimited parse should succeed");

        assert_eq!(catalog.categories[0].name, "frutas-da-semana");
        assert_eq!(catalog.categories[0].products[0].id, "frutas-da-semana__uva");
    }
}
