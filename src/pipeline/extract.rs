use crate::error::{Result, SyncError};
use crate::types::RawWeaponRow;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Pulls weapon rows out of the last `<table>` on a wiki page.
pub struct TableExtractor {
    document: Html,
    table_selector: Selector,
    row_selector: Selector,
    cell_selector: Selector,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| SyncError::Selector(css.to_string()))
}

impl TableExtractor {
    pub fn parse(html: &str) -> Result<Self> {
        Ok(Self {
            document: Html::parse_document(html),
            table_selector: selector("table")?,
            row_selector: selector("tr")?,
            cell_selector: selector("td")?,
        })
    }

    fn last_table(&self) -> Option<ElementRef<'_>> {
        self.document.select(&self.table_selector).last()
    }

    /// Data rows of the last table, lazily. Rows without any `<td>` (headers,
    /// separators) are skipped and do not consume an index.
    pub fn rows(&self) -> Result<impl Iterator<Item = RawWeaponRow> + '_> {
        let table = self.last_table().ok_or(SyncError::NoTable)?;
        let cell_selector = &self.cell_selector;
        debug!("Found weapon table with {} <tr> elements", table.select(&self.row_selector).count());

        Ok(table
            .select(&self.row_selector)
            .map(move |tr| {
                tr.select(cell_selector)
                    .map(|td| td.text().collect::<String>())
                    .collect::<Vec<_>>()
            })
            .filter(|cells| !cells.is_empty())
            .enumerate()
            .map(|(index, cells)| RawWeaponRow::new(index, cells)))
    }
}
