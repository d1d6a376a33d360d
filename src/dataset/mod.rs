mod error;
mod record;


pub use error::DatasetError;

use crate::point::{Point, normalize_label};
use record::RawRecord;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// On-disk layout of a demand table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetFormat {
    /// Header row plus one record per line
    Csv,
    /// Array of objects
    #[default]
    Json,
}

impl DatasetFormat {
    /// `.csv` (any case) reads as CSV, everything else as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Validated demand points loaded from a CSV or JSON table
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    /// Load a table from disk, picking the format from the file extension
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        Self::open_as(path, DatasetFormat::from_path(path))
    }

    pub fn open_as(path: impl AsRef<Path>, format: DatasetFormat) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let dataset = match format {
            DatasetFormat::Csv => Self::from_csv_reader(reader)?,
            DatasetFormat::Json => Self::from_reader(reader)?,
        };
        info!(
            path = %path.display(),
            ?format,
            points = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse a JSON array of records.
    ///
    /// Categories are normalized with [`normalize_label`] and regions trimmed.
    /// The first row with a coordinate off the longitude/latitude grid fails
    /// the whole load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let records: Vec<RawRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records.into_iter().map(Ok))
    }

    /// Parse a headed CSV table; same column names and checks as JSON
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut table = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let records = table
            .deserialize::<RawRecord>()
            .map(|record| record.map_err(DatasetError::from));
        Self::from_records(records)
    }

    fn from_records(
        records: impl Iterator<Item = Result<RawRecord, DatasetError>>,
    ) -> Result<Self, DatasetError> {
        let points = records
            .enumerate()
            .map(|(index, record)| {
                let record = record?;
                Point::new(
                    record.longitude,
                    record.latitude,
                    normalize_label(&record.category.to_string()),
                    record.region.to_string().trim(),
                )
                .map_err(|source| DatasetError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.points.iter().map(Point::category))
    }

    /// Distinct regions in first-seen order
    pub fn regions(&self) -> Vec<&str> {
        distinct(self.points.iter().map(Point::region))
    }
}

impl From<Vec<Point>> for Dataset {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Shorthand for [`Dataset::open`] returning the points
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, DatasetError> {
    Dataset::open(path).map(Dataset::into_points)
}

/// Shorthand for [`Dataset::from_reader`] returning the points
pub fn load_points_from_reader<R: Read>(reader: R) -> Result<Vec<Point>, DatasetError> {
    Dataset::from_reader(reader).map(Dataset::into_points)
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
