//! Reading reference tables from JSON and CSV
//!
//! JSON datasets are nested maps `sex → measurement → age → {L, M, S}` with
//! age keys written as strings (`"0.0"`, `"61.0"`, ...). CSV datasets are flat,
//! one knot per row, with the columns `sex,measurement,age,l,m,s`.

use serde::Deserialize;
use std::{collections::BTreeMap, io::Read, path::Path};

use crate::data::{Measurement, Sex};
use crate::reference::{AgeDomain, Knot, Lms, ReferenceError, ReferenceSet, ReferenceTable};

type RawDataset = BTreeMap<String, BTreeMap<String, BTreeMap<String, Lms>>>;

/// One CSV row of a flat reference table
#[derive(Debug, Deserialize)]
struct Row {
    sex: String,
    measurement: String,
    age: f64,
    l: f64,
    m: f64,
    s: f64,
}

fn parse_sex(value: &str) -> Result<Sex, ReferenceError> {
    value.parse().map_err(|_| ReferenceError::UnknownLabel {
        kind: "sex",
        value: value.to_string(),
    })
}

fn parse_measurement(value: &str) -> Result<Measurement, ReferenceError> {
    value.parse().map_err(|_| ReferenceError::UnknownLabel {
        kind: "measurement",
        value: value.to_string(),
    })
}

fn parse_age_key(key: &str) -> Result<f64, ReferenceError> {
    key.trim()
        .parse::<f64>()
        .map_err(|_| ReferenceError::InvalidAgeKey(key.to_string()))
}

fn read_file(path: &Path) -> Result<String, ReferenceError> {
    std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn log_loaded(table: &ReferenceTable, source: &str) {
    log::info!(
        "Loaded {} reference from {}: {} series, {} knots",
        table.domain(),
        source,
        table.len(),
        table.knot_count()
    );
}

impl ReferenceTable {
    /// Parse a nested JSON dataset
    pub fn from_json_str(domain: AgeDomain, json: &str) -> Result<Self, ReferenceError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let mut table = ReferenceTable::new(domain);

        for (sex_label, measurements) in raw {
            let sex = parse_sex(&sex_label)?;
            for (measurement_label, points) in measurements {
                let measurement = parse_measurement(&measurement_label)?;
                let knots = points
                    .into_iter()
                    .map(|(key, lms)| Ok(Knot::new(parse_age_key(&key)?, lms)))
                    .collect::<Result<Vec<_>, ReferenceError>>()?;
                table.insert(sex, measurement, knots)?;
            }
        }

        Ok(table)
    }

    /// Read a nested JSON dataset from disk
    pub fn from_json_path(domain: AgeDomain, path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let table = Self::from_json_str(domain, &read_file(path)?)?;
        log_loaded(&table, &path.display().to_string());
        Ok(table)
    }

    /// Parse a flat CSV table
    ///
    /// Headers are matched case-insensitively and lines starting with `#` are
    /// skipped.
    pub fn from_csv_reader<R: Read>(domain: AgeDomain, reader: R) -> Result<Self, ReferenceError> {
        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader
            .headers()
            .map_err(|e| ReferenceError::Csv(e.to_string()))?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        reader.set_headers(csv::StringRecord::from(headers));

        let mut grouped: BTreeMap<(Sex, Measurement), Vec<Knot>> = BTreeMap::new();
        for row_result in reader.deserialize() {
            let row: Row = row_result.map_err(|e| ReferenceError::Csv(e.to_string()))?;
            let key = (parse_sex(&row.sex)?, parse_measurement(&row.measurement)?);
            grouped
                .entry(key)
                .or_default()
                .push(Knot::new(row.age, Lms::new(row.l, row.m, row.s)));
        }

        let mut table = ReferenceTable::new(domain);
        for ((sex, measurement), knots) in grouped {
            table.insert(sex, measurement, knots)?;
        }
        Ok(table)
    }

    /// Read a flat CSV table from disk
    pub fn from_csv_path(domain: AgeDomain, path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| ReferenceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_csv_reader(domain, file)?;
        log_loaded(&table, &path.display().to_string());
        Ok(table)
    }
}

impl ReferenceSet {
    /// Build both tables from JSON strings
    pub fn from_json_str(infant: &str, child: &str) -> Result<Self, ReferenceError> {
        ReferenceSet::new(
            ReferenceTable::from_json_str(AgeDomain::Infant, infant)?,
            ReferenceTable::from_json_str(AgeDomain::Child, child)?,
        )
    }

    /// Load both tables from JSON files
    pub fn from_json_files(
        infant: impl AsRef<Path>,
        child: impl AsRef<Path>,
    ) -> Result<Self, ReferenceError> {
        ReferenceSet::new(
            ReferenceTable::from_json_path(AgeDomain::Infant, infant)?,
            ReferenceTable::from_json_path(AgeDomain::Child, child)?,
        )
    }
}
