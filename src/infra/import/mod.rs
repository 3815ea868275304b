pub mod delimited;
pub mod workbook;

use std::collections::BTreeSet;

use anyhow::Result;

use crate::domain::entities::catalog::{product_id, Catalog, Category, Product};

/// Header labels exported by common sheet templates; never product names.
fn is_header_label(name: &str) -> bool {
    name.eq_ignore_ascii_case("produto") || name.eq_ignore_ascii_case("product")
}

/// Builds one category out of raw first-column candidates: trims, skips empty
/// cells and header rows, de-duplicates by id keeping the first occurrence in
/// row order.
pub(crate) fn category_from_candidates<'a, I>(category_name: &str, candidates: I) -> Category
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = BTreeSet::new();
    let mut products = Vec::new();
    for raw in candidates {
        let name = raw.trim();
        if name.is_empty() || is_header_label(name) {
            continue;
        }
        let id = product_id(category_name, name);
        if seen.insert(id.clone()) {
            products.push(Product {
                id,
                name: name.to_string(),
            });
        }
    }
    Category {
        name: category_name.to_string(),
        products,
    }
}

/// Parses raw file bytes into a catalog. Spreadsheet workbooks map one sheet
/// per category; anything calamine does not recognize is treated as delimited
/// text with a single implicit category named `fallback_name`. Failure leaves
/// nothing behind; the caller decides whether to replace its catalog.
pub fn import_catalog(bytes: &[u8], fallback_name: &str) -> Result<Catalog> {
    if let Some(sheets) = workbook::detect_workbook(bytes) {
        return workbook::read_workbook(sheets);
    }
    delimited::read_delimited(bytes, fallback_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_example_drops_header_and_duplicate_rows() {
        let catalog = import_catalog("Maçã;5\nBanana,3\nproduto\nMaçã;9\n".as_bytes(), "Frutas")
            .expect("delimited import should succeed");

        assert_eq!(catalog.categories.len(), 1);
        let category = &catalog.categories[0];
        assert_eq!(category.name, "Frutas");

        let ids: Vec<&str> = category.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["frutas__maca", "frutas__banana"]);
        assert_eq!(category.products[0].name, "Maçã");
        assert_eq!(category.products[1].name, "Banana");
    }

    #[test]
    fn header_labels_are_skipped_case_insensitively() {
        let catalog = import_catalog(b"Produto\nPRODUCT\nUva\n", "Frutas")
            .expect("delimited import should succeed");

        let names: Vec<&str> = catalog.categories[0]
            .products
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Uva"]);
    }

    #[test]
    fn blank_and_whitespace_lines_yield_no_products() {
        let catalog =
            import_catalog(b"\n   \n\t\n", "Frutas").expect("delimited import should succeed");

        assert_eq!(catalog.categories.len(), 1);
        assert!(catalog.categories[0].products.is_empty());
    }

    #[test]
    fn only_the_first_field_of_each_line_is_used() {
        let catalog = import_catalog(b"Tomate\tItaliano\t2\nCebola Roxa;caixa\n", "Legumes")
            .expect("delimited import should succeed");

        let names: Vec<&str> = catalog.categories[0]
            .products
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Tomate", "Cebola Roxa"]);
    }

    #[test]
    fn duplicates_by_id_keep_the_first_occurrence_in_order() {
        // "UVA!" slugs to the same id as "Uva" and must be dropped.
        let catalog = import_catalog(b"Uva\nPera\nUVA!\nMelancia\n", "Frutas")
            .expect("delimited import should succeed");

        let names: Vec<&str> = catalog.categories[0]
            .products
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Uva", "Pera", "Melancia"]);
    }

    #[test]
    fn empty_input_produces_an_empty_category() {
        let catalog = import_catalog(b"", "Frutas").expect("delimited import should succeed");

        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.categories[0].name, "Frutas");
        assert!(catalog.categories[0].products.is_empty());
    }

    #[test]
    fn non_text_bytes_fail_with_an_error() {
        let result = import_catalog(&[0xFF, 0xFE, 0x00, 0x9C], "Frutas");

        assert!(result.is_err(), "binary garbage should not import");
    }
}
