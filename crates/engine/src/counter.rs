// crates/engine/src/counter.rs
use crate::error::{EngineError, Result};
use log::{debug, warn};
use occurs_core::{CountOptions, FrequencyTable, NormalizerChain};
use std::borrow::Cow;
use std::io::{BufRead, BufReader, Read};

/// Capacity of the line channel used by [`Counter::parallel_count`].
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Counts distinct normalized lines across one or more streams.
///
/// The counter owns its [`FrequencyTable`]; repeated calls accumulate into
/// the same table until [`Counter::take_table`] or [`Counter::reset`].
#[derive(Debug)]
pub struct Counter {
    table: FrequencyTable,
    chain: NormalizerChain,
    skip_empty: bool,
    channel_capacity: usize,
}

/// Per-stream failures observed during a concurrent count.
#[derive(Debug, Default)]
pub struct ParallelReport {
    /// Number of streams that were scanned.
    pub streams: usize,
    /// `(stream index, error)` for every stream that stopped early.
    pub errors: Vec<(usize, EngineError)>,
}

impl ParallelReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Counter {
    #[must_use]
    pub fn new(chain: NormalizerChain, skip_empty: bool) -> Self {
        Self {
            table: FrequencyTable::new(),
            chain,
            skip_empty,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Builds a counter whose chain and skip-empty flag follow `options`.
    #[must_use]
    pub fn from_options(options: &CountOptions) -> Self {
        Self::new(options.chain(), options.skip_empty)
    }

    /// Sets the line channel capacity for concurrent counts (minimum 1).
    #[must_use]
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    #[must_use]
    pub const fn table(&self) -> &FrequencyTable {
        &self.table
    }

    #[must_use]
    pub fn into_table(self) -> FrequencyTable {
        self.table
    }

    /// Hands the table to the caller and leaves an empty one behind.
    pub fn take_table(&mut self) -> FrequencyTable {
        std::mem::take(&mut self.table)
    }

    pub fn reset(&mut self) {
        self.table.clear();
    }

    /// Counts every line of `reader` into the table.
    ///
    /// Lines read before a failure stay counted.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Read`] if the stream fails before end-of-stream.
    pub fn count<R: Read>(&mut self, reader: R) -> Result<()> {
        let Self {
            table,
            chain,
            skip_empty,
            ..
        } = self;

        let mut reader = BufReader::new(reader);
        let lines = scan_lines(&mut reader, chain, *skip_empty, |line| {
            table.increment(line);
            Ok(())
        })?;
        debug!("sequential stream done: {lines} lines counted");
        Ok(())
    }

    /// Counts all `readers` at once, one worker thread per stream.
    ///
    /// Read errors are not returned: a failing stream simply stops
    /// contributing and the failure is logged at `warn` level. Use
    /// [`Counter::parallel_count_with_report`] to inspect them.
    pub fn parallel_count<I, R>(&mut self, readers: I)
    where
        I: IntoIterator<Item = R>,
        R: Read + Send,
    {
        let report = self.parallel_count_with_report(readers);
        for (index, err) in &report.errors {
            warn!("stream #{index} stopped early: {err}");
        }
    }

    /// Same as [`Counter::parallel_count`], returning per-stream failures.
    ///
    /// Workers normalize their lines and send them through a bounded
    /// channel; a single aggregator thread is the only writer to the table.
    /// Blocks until every stream reaches end-of-stream (or fails) and the
    /// aggregator has drained the channel.
    pub fn parallel_count_with_report<I, R>(&mut self, readers: I) -> ParallelReport
    where
        I: IntoIterator<Item = R>,
        R: Read + Send,
    {
        let (tx, rx) = crossbeam_channel::bounded::<String>(self.channel_capacity);
        let chain = &self.chain;
        let skip_empty = self.skip_empty;
        let mut table = std::mem::take(&mut self.table);

        let (table, report) = std::thread::scope(|scope| {
            let aggregator = scope.spawn(move || {
                for line in rx {
                    table.increment(line);
                }
                table
            });

            let workers: Vec<_> = readers
                .into_iter()
                .map(|reader| {
                    let tx = tx.clone();
                    scope.spawn(move || {
                        let mut reader = BufReader::new(reader);
                        scan_lines(&mut reader, chain, skip_empty, |line| {
                            tx.send(line.into_owned())
                                .map_err(|_| EngineError::ChannelClosed)
                        })
                    })
                })
                .collect();

            // Workers hold the remaining senders; the channel closes when they exit.
            drop(tx);

            let mut report = ParallelReport {
                streams: workers.len(),
                errors: Vec::new(),
            };
            for (index, worker) in workers.into_iter().enumerate() {
                match worker.join() {
                    Ok(Ok(lines)) => debug!("stream #{index} done: {lines} lines sent"),
                    Ok(Err(err)) => report.errors.push((index, err)),
                    Err(_) => report.errors.push((index, EngineError::WorkerPanicked)),
                }
            }

            let table = match aggregator.join() {
                Ok(table) => table,
                Err(payload) => std::panic::resume_unwind(payload),
            };
            (table, report)
        });

        self.table = table;
        debug!(
            "concurrent count done: {} streams, {} failed, {} distinct lines",
            report.streams,
            report.errors.len(),
            self.table.len()
        );
        report
    }
}

/// Reads `reader` line by line, normalizes each line and hands survivors to `sink`.
///
/// The trailing `\n` (and a `\r` before it) is stripped; a last line without
/// a newline is still produced. Invalid UTF-8 is replaced lossily.
/// Returns the number of lines passed to `sink`.
fn scan_lines<R, F>(
    reader: &mut R,
    chain: &NormalizerChain,
    skip_empty: bool,
    mut sink: F,
) -> Result<u64>
where
    R: BufRead,
    F: FnMut(Cow<'_, str>) -> Result<()>,
{
    let mut line_buf = Vec::new();
    let mut submitted = 0;

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(_) => {
                let raw = strip_line_ending(&line_buf);
                let raw = String::from_utf8_lossy(raw);
                let line = chain.apply(&raw);
                if skip_empty && line.is_empty() {
                    continue;
                }
                sink(line)?;
                submitted += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(EngineError::Read(e)),
        }
    }

    Ok(submitted)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
