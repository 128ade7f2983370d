use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::CardApplication;

/// Failure while loading a batch of applications.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read application batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Read applications from CSV with a
/// `surname,age,gross_annual_income,frequent_flyer_number` header row.
pub fn parse_applications<R: Read>(reader: R) -> Result<Vec<CardApplication>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for row in csv_reader.deserialize::<ApplicationRow>() {
        applications.push(row?.into());
    }

    Ok(applications)
}

pub fn load_applications<P: AsRef<Path>>(path: P) -> Result<Vec<CardApplication>, IntakeError> {
    let file = std::fs::File::open(path)?;
    parse_applications(file)
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    surname: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<u32>,
    gross_annual_income: u64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    frequent_flyer_number: Option<String>,
}

impl From<ApplicationRow> for CardApplication {
    fn from(row: ApplicationRow) -> Self {
        CardApplication {
            surname: row.surname,
            age: row.age.unwrap_or_default(),
            gross_annual_income: row.gross_annual_income,
            frequent_flyer_number: row.frequent_flyer_number.unwrap_or_default(),
        }
    }
}

fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
