use crate::error::EngineError;
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Label used for standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// An opened input stream and the name it is reported under.
///
/// The stream is closed when the `Input` (or the reader taken from it) is dropped.
pub struct Input {
    label: String,
    reader: Box<dyn Read + Send>,
}

impl Input {
    pub fn new(label: impl Into<String>, reader: Box<dyn Read + Send>) -> Self {
        Self {
            label: label.into(),
            reader,
        }
    }

    #[must_use]
    pub fn stdin() -> Self {
        Self::new(STDIN_LABEL, Box::new(std::io::stdin()))
    }

    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Open`] if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, EngineError> {
        let file = File::open(path).map_err(|source| EngineError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), Box::new(file)))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn into_reader(self) -> Box<dyn Read + Send> {
        self.reader
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Resolves command-line paths into open inputs.
///
/// No paths means standard input, as does a `-` path. Paths that fail to
/// open are returned alongside the inputs instead of aborting.
#[must_use]
pub fn open_inputs(paths: &[PathBuf]) -> (Vec<Input>, Vec<(PathBuf, EngineError)>) {
    if paths.is_empty() {
        return (vec![Input::stdin()], Vec::new());
    }

    let mut inputs = Vec::with_capacity(paths.len());
    let mut errors = Vec::new();

    for path in paths {
        if is_stdin(path) {
            inputs.push(Input::stdin());
            continue;
        }
        match Input::open(path) {
            Ok(input) => {
                debug!("opened {}", path.display());
                inputs.push(input);
            }
            Err(e) => errors.push((path.clone(), e)),
        }
    }

    (inputs, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_paths_means_stdin() {
        let (inputs, errors) = open_inputs(&[]);
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].label(), STDIN_LABEL);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_dash_means_stdin() {
        let (inputs, _) = open_inputs(&[PathBuf::from("-")]);
        assert_eq!(inputs[0].label(), STDIN_LABEL);
    }

    #[test]
    fn test_missing_file_is_reported_and_skipped() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hello").unwrap();
        let present = file.path().to_path_buf();
        let missing = PathBuf::from("definitely/not/here.txt");

        let (inputs, errors) = open_inputs(&[missing.clone(), present.clone()]);

        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].label(), present.display().to_string());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, missing);
        assert!(matches!(errors[0].1, EngineError::Open { .. }));
    }

    #[test]
    fn test_opened_input_is_readable() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "a\nb\n").unwrap();

        let input = Input::open(file.path()).unwrap();
        let mut content = String::new();
        input.into_reader().read_to_string(&mut content).unwrap();
        assert_eq!(content, "a\nb\n");
    }
}
