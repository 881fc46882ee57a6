use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{DashboardError, Result};

use super::model::{Dataset, Record, REQUIRED_HEADERS};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the meta-analysis table from a CSV file.
///
/// A missing file is reported as [`DashboardError::MissingInput`]. Problems
/// inside the file are tolerated where possible:
/// * absent required headers are logged and read as empty columns
/// * empty or unparseable cells become missing values
/// * rows that cannot be decoded at all are skipped and counted
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(DashboardError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(DashboardError::Unreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let dataset = read_records(file, path)?;
    log::info!(
        "Loaded {} records from {} ({} rows skipped)",
        dataset.len(),
        path.display(),
        dataset.skipped_rows
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Header row with column names, one record per line. Columns are matched
/// by name so their order in the file does not matter.
fn read_records<R: Read>(input: R, path: &Path) -> Result<Dataset> {
    let malformed = |source| DashboardError::Malformed {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers().map_err(malformed)?.clone();
    for required in REQUIRED_HEADERS {
        if !headers.iter().any(|h| h == required) {
            log::warn!("{}: missing column '{required}', treating it as empty", path.display());
        }
    }

    let mut records = Vec::new();
    let mut skipped_rows = 0;

    for (row_no, result) in reader.deserialize::<Record>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(err) if err.is_io_error() => return Err(malformed(err)),
            Err(err) => {
                // +2: one for the header, one for 1-based line numbers
                log::warn!("{}: skipping row {}: {err}", path.display(), row_no + 2);
                skipped_rows += 1;
            }
        }
    }

    let mut dataset = Dataset::from_records(records);
    dataset.skipped_rows = skipped_rows;
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const HEADER: &str =
        "Study_ID,Author,Year,Standard_Risk_Factor,Standard_Setting,Clean_Sample_Size,OR,P_Value";

    fn write_csv(body: &str) -> NamedTempFile {
        write_bytes(body.as_bytes())
    }

    fn write_bytes(body: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body).unwrap();
        file
    }

    #[test]
    fn missing_file_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Final_Remastered_Meta_Data.csv");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DashboardError::MissingInput { .. }));
        assert!(err.to_string().contains("Final_Remastered_Meta_Data.csv"));
    }

    #[test]
    fn loads_all_columns() {
        let file = write_csv(&format!(
            "{HEADER}\nS1,Khan,2019,Smoking,Urban,1200,1.85,0.003\nS2,Rahman,2021.0,Obesity,Rural,350,2.4,0.04\n"
        ));

        let dataset = load_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.skipped_rows, 0);

        let first = &dataset.records()[0];
        assert_eq!(first.study_id.as_deref(), Some("S1"));
        assert_eq!(first.author.as_deref(), Some("Khan"));
        assert_eq!(first.year, Some(2019));
        assert_eq!(first.risk_factor.as_deref(), Some("Smoking"));
        assert_eq!(first.setting.as_deref(), Some("Urban"));
        assert_eq!(first.sample_size, Some(1200.0));
        assert_eq!(first.odds_ratio, Some(1.85));
        assert_eq!(first.p_value, Some(0.003));

        assert_eq!(dataset.records()[1].year, Some(2021));
    }

    #[test]
    fn malformed_cells_become_missing() {
        let file = write_csv(&format!(
            "{HEADER}\nS1, Khan ,n/a,Smoking,,big,NaN,\n"
        ));

        let dataset = load_file(file.path()).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.author.as_deref(), Some("Khan"));
        assert_eq!(record.year, None);
        assert_eq!(record.setting, None);
        assert_eq!(record.sample_size, None);
        assert_eq!(record.odds_ratio, None);
        assert_eq!(record.p_value, None);
    }

    #[test]
    fn absent_columns_read_as_missing() {
        let file = write_csv("Author,OR,Extra\nKhan,1.5,ignored\n");

        let dataset = load_file(file.path()).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.author.as_deref(), Some("Khan"));
        assert_eq!(record.odds_ratio, Some(1.5));
        assert_eq!(record.study_id, None);
        assert_eq!(record.risk_factor, None);
    }

    #[test]
    fn header_only_file_is_empty_dataset() {
        let file = write_csv(&format!("{HEADER}\n"));
        let dataset = load_file(file.path()).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn undecodable_row_is_skipped_and_counted() {
        let mut body = format!("{HEADER}\nS1,Khan,2019,Smoking,Urban,1200,1.85,0.003\n").into_bytes();
        body.extend_from_slice(b"S2,\xff\xfe,2020,Obesity,Rural,350,2.4,0.04\n");
        body.extend_from_slice(b"S3,Ahmed,2021,Diabetes,Clinical,800,1.2,0.2\n");
        let file = write_bytes(&body);

        let dataset = load_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.skipped_rows, 1);

        let ids: Vec<_> = dataset.records().iter().map(|r| r.study_id.as_deref()).collect();
        assert_eq!(ids, [Some("S1"), Some("S3")]);
    }

    #[test]
    fn undecodable_header_is_malformed() {
        let file = write_bytes(b"Study_ID,\xff\xfe,OR\nS1,Khan,1.5\n");

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, DashboardError::Malformed { .. }));
    }
}
