use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// directory where snapshot files are collected
pub const SNAPSHOT_DIR: &str = "snapshots-colouring";

/** Records coloring states over time for visualisation.
One line per snapshot: the n colors in vertex order, space separated,
`-1` marking still-uncolored positions. Writes are buffered; call
[`SnapshotRecorder::finish`] once the run is over to flush them. */
#[derive(Debug)]
pub struct SnapshotRecorder {
    out: BufWriter<File>,
    path: String,
}

impl SnapshotRecorder {
    /// creates (truncating) the snapshot file at `path`
    pub fn create(path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::io(path, e))?;
            }
        }
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        Ok(Self { out: BufWriter::new(file), path: path.to_string() })
    }

    /// conventional location for a (strategy, graph) pair
    pub fn default_path(algorithm: &str, graph_name: &str) -> String {
        format!("{}/{}-{}-snapshots.txt", SNAPSHOT_DIR, algorithm, graph_name)
    }

    /// appends one line holding the full coloring vector
    pub fn record(&mut self, colors: &[i32]) -> Result<()> {
        let mut line = String::with_capacity(colors.len() * 2);
        for (i, c) in colors.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&c.to_string());
        }
        line.push('\n');
        self.out
            .write_all(line.as_bytes())
            .map_err(|e| Error::io(&self.path, e))
    }

    /// flushes buffered snapshots to disk
    pub fn finish(&mut self) -> Result<()> {
        self.out.flush().map_err(|e| Error::io(&self.path, e))
    }

    /// path the recorder writes to
    pub fn path(&self) -> &str { &self.path }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("snaps.txt");
        let mut rec = SnapshotRecorder::create(file.to_str().unwrap()).unwrap();
        rec.record(&[-1, 0, 2]).unwrap();
        rec.record(&[1, 0, 2]).unwrap();
        rec.finish().unwrap();
        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content, "-1 0 2\n1 0 2\n");
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested/deeper/snaps.txt");
        let mut rec = SnapshotRecorder::create(file.to_str().unwrap()).unwrap();
        rec.record(&[0]).unwrap();
        rec.finish().unwrap();
        assert!(file.exists());
    }

    #[test]
    fn test_default_path() {
        assert_eq!(
            SnapshotRecorder::default_path("tabu_search", "myciel3.col"),
            "snapshots-colouring/tabu_search-myciel3.col-snapshots.txt"
        );
    }
}
