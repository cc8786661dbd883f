//! Test helpers for writing tariff files and capturing command output.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use std::{cell::RefCell, fs};
use tempfile::TempDir;

pub(super) const STANDARD_TARIFF: &str = include_str!("../../../config/app_config.json");

/// A temporary directory holding a tariff file.
#[derive(Debug)]
pub(super) struct TariffFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl TariffFile {
    pub(super) fn standard() -> Self {
        Self::with_contents(STANDARD_TARIFF)
    }

    pub(super) fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let path = root.join("tariff.json");
        write_utf8(&path, contents.as_bytes());
        Self { _dir: dir, path }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Parse `argv` and run the command, returning its result and stdout.
pub(super) fn run_argv<I, S>(argv: I) -> (Result<(), CliError>, String)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = argv.into_iter().map(Into::into).collect();
    let mut stdout = Vec::new();
    let result = Cli::try_parse_from(args)
        .map_err(CliError::from)
        .and_then(|cli| run_with(cli, &mut stdout));
    let text = String::from_utf8(stdout).expect("stdout utf-8");
    (result, text)
}

/// Shared state for the CLI behaviour scenarios.
#[derive(Debug)]
pub(super) struct CliWorld {
    _dir: TempDir,
    tariff_path: Utf8PathBuf,
    pub(super) packages: RefCell<Vec<String>>,
    pub(super) options: RefCell<Vec<String>>,
    pub(super) stdout: RefCell<String>,
    pub(super) result: RefCell<Option<Result<(), CliError>>>,
}

impl CliWorld {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self {
            _dir: dir,
            tariff_path: root.join("tariff.json"),
            packages: RefCell::new(Vec::new()),
            options: RefCell::new(Vec::new()),
            stdout: RefCell::new(String::new()),
            result: RefCell::new(None),
        }
    }

    pub(super) fn write_standard_tariff(&self) {
        write_utf8(&self.tariff_path, STANDARD_TARIFF.as_bytes());
    }

    /// Run `courier <command>` with the recorded options, the tariff path and
    /// `inputs`.
    pub(super) fn run(&self, command: &str, inputs: Vec<String>) {
        let mut argv = vec![
            "courier".to_owned(),
            command.to_owned(),
            format!("--{ARG_TARIFF}"),
            self.tariff_path.as_str().to_owned(),
        ];
        argv.extend(self.options.borrow().iter().cloned());
        argv.extend(inputs);
        let (result, stdout) = run_argv(argv);
        self.stdout.replace(stdout);
        self.result.replace(Some(result));
    }

    pub(super) fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        match result {
            Ok(()) => panic!("expected failure, stdout was {}", self.stdout.borrow()),
            Err(err) => err.to_string(),
        }
    }
}

/// Split `"A", "B"` step text into its quoted items.
pub(super) fn quoted_list(raw: &str) -> Vec<String> {
    raw.split("\", \"")
        .map(|item| item.trim().trim_matches('"').to_owned())
        .collect()
}
