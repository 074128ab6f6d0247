use std::{collections::BTreeMap, io, mem, path::Path, thread};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, info, warn};
use tweetprep::{
    reader::RecordReader, stats::LengthStats, writer::CleanWriter, CleanRecord, RawRecord,
    TweetCleaner,
};

use crate::{config::Config, error::Error, report::Summary};

/// Raw records tagged with their position in the input.
#[derive(Debug)]
struct Batch {
    sequence: u64,
    records: Vec<RawRecord>,
}

#[derive(Debug)]
struct Cleaned {
    sequence: u64,
    records: Vec<CleanRecord>,
    stats: LengthStats,
}

/// Streams raw records through a pool of cleaners and writes the results in
/// input order.
///
/// One thread reads batches into a bounded channel, `workers` threads clean
/// them with their own [`TweetCleaner`], and the calling thread reorders the
/// cleaned batches by sequence number before writing.
#[derive(Debug)]
pub struct CleanEngine {
    config: Config,
    cleaner: TweetCleaner,
}

impl CleanEngine {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cleaner: TweetCleaner::new(),
        }
    }

    pub fn run_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<Summary, Error> {
        let (input, output) = (input.as_ref(), output.as_ref());

        let reader = RecordReader::open(input, self.config.layout)?;
        let mut writer = CleanWriter::create(output)?;

        info!(
            input = %input.display(),
            output = %output.display(),
            workers = self.config.workers,
            batch_size = self.config.batch_size,
            "cleaning tweets"
        );

        let summary = self.run(reader, &mut writer)?;

        info!(
            read = summary.read,
            written = summary.written,
            dropped = summary.dropped,
            "finished cleaning"
        );

        Ok(summary)
    }

    pub fn run<R, W>(
        &self,
        reader: RecordReader<R>,
        writer: &mut CleanWriter<W>,
    ) -> Result<Summary, Error>
    where
        R: io::Read + Send,
        W: io::Write,
    {
        let workers = self.config.workers.max(1);
        let (batch_tx, batch_rx) = crossbeam_channel::bounded::<Batch>(workers * 2);
        let (done_tx, done_rx) = crossbeam_channel::unbounded::<Cleaned>();

        thread::scope(|scope| -> Result<Summary, Error> {
            let producer = scope.spawn(move || self.produce(reader, batch_tx));

            let pool = (0..workers)
                .map(|worker| {
                    let batches = batch_rx.clone();
                    let done = done_tx.clone();
                    let cleaner = self.cleaner.clone();
                    scope.spawn(move || clean_batches(worker, cleaner, batches, done))
                })
                .collect::<Vec<_>>();

            // Workers hold the only remaining ends, so the channels close
            // once the producer and the pool are done.
            drop(batch_rx);
            drop(done_tx);

            let collected = self.collect(done_rx, writer);

            for worker in pool {
                worker
                    .join()
                    .map_err(|_| Error::Worker("cleaning worker panicked".into()))?;
            }

            let read = producer
                .join()
                .map_err(|_| Error::Worker("reader thread panicked".into()))??;

            let mut summary = collected?;
            summary.read = read;
            Ok(summary)
        })
    }

    fn produce<R: io::Read>(
        &self,
        mut reader: RecordReader<R>,
        batches: Sender<Batch>,
    ) -> Result<u64, Error> {
        let batch_size = self.config.batch_size.max(1);
        let limit = self.config.limit.unwrap_or(u64::MAX);

        let mut read = 0u64;
        let mut sequence = 0u64;
        let mut records = Vec::with_capacity(batch_size);

        while read < limit {
            let Some(record) = reader.read_record()? else {
                break;
            };

            read += 1;
            records.push(record);

            if records.len() == batch_size {
                let records = mem::replace(&mut records, Vec::with_capacity(batch_size));
                if batches.send(Batch { sequence, records }).is_err() {
                    debug!(read, "batch channel closed, reader stopping");
                    return Ok(read);
                }
                sequence += 1;
            }
        }

        if !records.is_empty() {
            if batches.send(Batch { sequence, records }).is_err() {
                debug!(read, "batch channel closed before the last batch");
                return Ok(read);
            }
            sequence += 1;
        }

        debug!(read, batches = sequence, "reader finished");
        Ok(read)
    }

    fn collect<W: io::Write>(
        &self,
        results: Receiver<Cleaned>,
        writer: &mut CleanWriter<W>,
    ) -> Result<Summary, Error> {
        let progress_every = self.config.progress_every.max(1);

        let mut summary = Summary::default();
        let mut pending = BTreeMap::new();
        let mut next = 0u64;
        let mut processed = 0u64;

        for cleaned in results.iter() {
            pending.insert(cleaned.sequence, cleaned);

            while let Some(ready) = pending.remove(&next) {
                summary.stats.merge(&ready.stats);

                for record in &ready.records {
                    if self.config.drop_empty && record.text.is_empty() {
                        summary.dropped += 1;
                    } else {
                        writer.write(record)?;
                        summary.written += 1;
                    }

                    processed += 1;
                    if processed % progress_every == 0 {
                        info!("{processed} tweets processed");
                    }
                }

                next += 1;
            }
        }

        if !pending.is_empty() {
            warn!(
                missing = next,
                stranded = pending.len(),
                "batches left unwritten after the pool stopped"
            );
        }

        writer.flush()?;
        Ok(summary)
    }
}

fn clean_batches(
    worker: usize,
    mut cleaner: TweetCleaner,
    batches: Receiver<Batch>,
    done: Sender<Cleaned>,
) {
    for batch in batches.iter() {
        let mut stats = LengthStats::new();
        let records = batch
            .records
            .iter()
            .map(|raw| {
                let clean = cleaner.clean_record(raw);
                stats.observe(&raw.text, &clean.text);
                clean
            })
            .collect();

        let cleaned = Cleaned {
            sequence: batch.sequence,
            records,
            stats,
        };

        if done.send(cleaned).is_err() {
            debug!(worker, "result channel closed, worker stopping");
            break;
        }
    }
}

/// The first `count` records as `(raw text, cleaned text)` pairs.
pub fn preview<R: io::Read>(
    reader: RecordReader<R>,
    count: usize,
) -> Result<Vec<(String, String)>, Error> {
    let mut cleaner = TweetCleaner::new();

    reader
        .take(count)
        .map(|record| -> Result<(String, String), Error> {
            let record = record?;
            let clean = cleaner.clean(&record.text);
            Ok((record.text, clean))
        })
        .collect()
}
