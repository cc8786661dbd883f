//! Tariff file loading.

use std::io::BufReader;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use courier_core::Tariff;

use crate::CliError;

/// Load and validate a JSON tariff from `path`.
pub(crate) fn load_tariff(path: &Utf8Path) -> Result<Tariff, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenTariff {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let tariff: Tariff =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseTariff {
            path: path.to_path_buf(),
            source,
        })?;
    tariff
        .validate()
        .map_err(|source| CliError::InvalidTariff {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} offers from {path}", tariff.offers().len());
    Ok(tariff)
}
