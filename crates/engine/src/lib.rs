// crates/engine/src/lib.rs
pub mod config;
pub mod counter;
pub mod error;
pub mod inputs;
pub mod options;

use crate::config::Config;
use crate::counter::Counter;
use crate::error::{EngineError, Result};
use crate::inputs::Input;
use log::debug;
use occurs_core::FrequencyTable;

/// Outcome of a full counting run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub table: FrequencyTable,
    /// `(input label, error)` for every input that could not be opened or read completely.
    pub errors: Vec<(String, EngineError)>,
}

/// Run the line counting engine.
///
/// Opens every input in `config.inputs` and counts them either one after
/// another or concurrently, depending on `config.options.concurrent`.
/// Inputs are closed when counting completes.
///
/// # Errors
///
/// Only in strict mode: the first open or read error is returned and the
/// table is discarded. Otherwise per-input errors are collected in
/// `RunResult::errors` and the remaining inputs are still counted.
pub fn run(config: &Config) -> Result<RunResult> {
    let mut counter =
        Counter::from_options(&config.options).with_channel_capacity(config.channel_capacity);

    let (inputs, open_errors) = inputs::open_inputs(&config.inputs);
    let mut errors: Vec<(String, EngineError)> = open_errors
        .into_iter()
        .map(|(path, e)| (path.display().to_string(), e))
        .collect();

    if config.strict && !errors.is_empty() {
        let (label, err) = errors.swap_remove(0);
        return Err(err.for_input(label));
    }

    if config.options.concurrent {
        let labels: Vec<String> = inputs.iter().map(|i| i.label().to_owned()).collect();
        let report = counter.parallel_count_with_report(inputs.into_iter().map(Input::into_reader));
        for (index, err) in report.errors {
            let label = labels
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("#{index}"));
            errors.push((label, err));
        }
    } else {
        for input in inputs {
            let label = input.label().to_owned();
            if let Err(err) = counter.count(input.into_reader()) {
                if config.strict {
                    return Err(err.for_input(label));
                }
                errors.push((label, err));
            }
        }
    }

    if config.strict && !errors.is_empty() {
        let (label, err) = errors.swap_remove(0);
        return Err(err.for_input(label));
    }

    let table = counter.into_table();
    debug!(
        "run complete: {} distinct lines, {} total, {} errors",
        table.len(),
        table.total(),
        errors.len()
    );
    Ok(RunResult { table, errors })
}
