//! CSV import of site records.
//!
//! Reads a spreadsheet export with a header row whose names match the table
//! columns. Unknown columns are ignored; the criterion columns may be written
//! `C1`..`N10`. Blank cells become `NULL`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::ImportError;
use crate::types::Site;

/// Columns every import must carry.
pub const REQUIRED_COLUMNS: [&str; 2] = ["name_en", "states_name_en"];

/// The parsed contents of a CSV file.
#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    /// Header names in file order.
    pub columns: Vec<String>,
    /// One record per data row.
    pub sites: Vec<Site>,
}

impl CsvImport {
    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.sites.len()
    }
}

/// Parses site records from CSV text.
///
/// # Errors
///
/// * `ImportError::MissingColumn` - If a required header is absent
/// * `ImportError::ParseError` - If a row has the wrong shape or a value of
///   the wrong type
pub fn read_sites_csv<R: Read>(reader: R) -> Result<CsvImport, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(ImportError::MissingColumn {
                column: required.to_string(),
            });
        }
    }

    let mut sites = Vec::new();
    for record in csv_reader.deserialize::<Site>() {
        sites.push(record?);
    }

    debug!(
        rows = sites.len(),
        columns = columns.len(),
        "Parsed site CSV"
    );

    Ok(CsvImport { columns, sites })
}

/// Opens and parses a CSV file.
pub fn read_sites_csv_file(path: impl AsRef<Path>) -> Result<CsvImport, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ImportError::Unreadable {
        message: format!("{}: {}", path.display(), e),
    })?;
    read_sites_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Criterion;

    const SAMPLE: &str = "\
unique_number,id_no,name_en,states_name_en,category_short,date_inscribed,danger,C6,N7,longitude,latitude,extra
230,26,Island of Gorée,Senegal,Cultural,1978,0,1,,-17.39,14.66,ignored
1,1,Galápagos Islands,Ecuador,Natural,1978.0,,0,1,-90.5,-0.68,
";

    #[test]
    fn test_read_sample() {
        let import = read_sites_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(import.row_count(), 2);
        assert_eq!(import.columns.len(), 12);
        assert_eq!(import.columns[2], "name_en");

        let goree = &import.sites[0];
        assert_eq!(goree.id_no, Some(26));
        assert_eq!(goree.name_en, "Island of Gorée");
        assert_eq!(goree.danger, Some(0));
        assert_eq!(goree.criterion(Criterion::C6), Some(1));
        assert_eq!(goree.criterion(Criterion::N7), None);
        assert_eq!(goree.longitude, Some(-17.39));

        let galapagos = &import.sites[1];
        assert_eq!(galapagos.date_inscribed, Some(1978));
        assert_eq!(galapagos.danger, None);
        assert_eq!(galapagos.criterion(Criterion::N7), Some(1));
    }

    #[test]
    fn test_missing_required_column() {
        let err = read_sites_csv("id_no,name_en\n1,A\n".as_bytes()).unwrap_err();
        assert!(
            matches!(err, ImportError::MissingColumn { ref column } if column == "states_name_en")
        );
    }

    #[test]
    fn test_bad_value_reports_line() {
        let data = "name_en,states_name_en,date_inscribed\nA,B,1990\nC,D,nineteen\n";
        let err = read_sites_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::ParseError { line: 3, .. }));
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let data = "name_en,states_name_en\nA,B,C\n";
        assert!(read_sites_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = read_sites_csv_file("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ImportError::Unreadable { .. }));
    }
}
