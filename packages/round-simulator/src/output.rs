//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, EpisodeMetrics, MeldRow};

fn timestamp() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| "unknown".to_string())
        .replace(':', "-")
}

fn csv_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>, Box<dyn std::error::Error>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    Ok(csv::Writer::from_writer(BufWriter::new(file)))
}

/// JSONL detail (optionally gzipped) plus a CSV summary for rounds mode.
pub struct RoundsWriter {
    jsonl_writer: Box<dyn Write + Send>,
    csv_writer: csv::Writer<BufWriter<File>>,
    jsonl_path: PathBuf,
    csv_path: PathBuf,
}

impl RoundsWriter {
    pub fn new(output_dir: &str, compress: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;
        let stamp = timestamp();

        let filename = format!("rounds_{stamp}.jsonl");
        let (jsonl_writer, jsonl_path): (Box<dyn Write + Send>, PathBuf) = if compress {
            let gz_path = dir.join(format!("{filename}.gz"));
            let writer = BufWriter::new(GzEncoder::new(
                File::create(&gz_path)?,
                Compression::default(),
            ));
            (Box::new(writer), gz_path)
        } else {
            let path = dir.join(&filename);
            (Box::new(BufWriter::new(File::create(&path)?)), path)
        };

        let csv_path = dir.join(format!("rounds_{stamp}_summary.csv"));
        let csv_writer = csv_writer(&csv_path)?;

        Ok(Self {
            jsonl_writer,
            csv_writer,
            jsonl_path,
            csv_path,
        })
    }

    pub fn write_episode(
        &mut self,
        metrics: &EpisodeMetrics,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(metrics)?;
        writeln!(self.jsonl_writer, "{json}")?;

        let row: CsvSummaryRow = metrics.into();
        self.csv_writer.serialize(&row)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.jsonl_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&PathBuf, &PathBuf) {
        (&self.jsonl_path, &self.csv_path)
    }
}

/// CSV of raw meld scores for meld mode.
pub struct MeldWriter {
    writer: csv::Writer<BufWriter<File>>,
    path: PathBuf,
}

impl MeldWriter {
    pub fn new(output_dir: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("meld_{}.csv", timestamp()));
        Ok(Self {
            writer: csv_writer(&path)?,
            path,
        })
    }

    pub fn write_meld(&mut self, row: &MeldRow) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
