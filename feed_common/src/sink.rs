//! Per-symbol CSV output files.
//!
//! Files are line-oriented CSV with LF endings and UTF-8 content. A header in
//! the provider's language is written lazily, the first time a file is
//! created. `CsvSink` owns the output directory so binaries and tests can
//! point it anywhere without process-wide state.
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::result::Result;

/// File name of a symbol's quote file, `<symbol>_quote.txt`.
pub fn quote_file_name(symbol: &str) -> String {
    format!("{}_quote.txt", symbol)
}

/// File name of a symbol's tick file, `<symbol>_tick.txt`.
pub fn tick_file_name(symbol: &str) -> String {
    format!("{}_tick.txt", symbol)
}

/// File name of a symbol's minute-aggregate file, `<symbol>_minute.txt`.
pub fn minute_file_name(symbol: &str) -> String {
    format!("{}_minute.txt", symbol)
}

/// Writes CSV lines into per-symbol files under one output directory.
#[derive(Debug, Clone)]
pub struct CsvSink {
    out_dir: PathBuf,
}

impl CsvSink {
    /// Creates a sink writing under `out_dir`. The directory must exist.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        CsvSink {
            out_dir: out_dir.into(),
        }
    }

    /// Full path of a file inside the output directory.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }

    /// Appends one data line to `file_name`, creating the file and writing
    /// `header` first if the file does not exist yet. Returns the file path.
    pub fn append_line(&self, file_name: &str, header: &str, line: &str) -> Result<PathBuf> {
        let path = self.path_for(file_name);
        let write_header = !path.exists();

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        if write_header {
            writeln!(file, "{}", header)?;
        }
        writeln!(file, "{}", line)?;
        Ok(path)
    }

    /// Replaces `file_name` with `header` followed by `lines`, in a single
    /// write. Returns the file path.
    pub fn overwrite(&self, file_name: &str, header: &str, lines: &[String]) -> Result<PathBuf> {
        let path = self.path_for(file_name);
        let mut content = String::with_capacity(header.len() + lines.len() * 24);
        content.push_str(header);
        content.push('\n');
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(&path, content)?;
        Ok(path)
    }
}

/// Reads a whole output file back, for the aggregation pass.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_written_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path());

        sink.append_line("600000.SH_quote.txt", "时间, 现价(元)", "09:30:01, 11.25")
            .unwrap();
        sink.append_line("600000.SH_quote.txt", "时间, 现价(元)", "09:30:04, 11.26")
            .unwrap();

        let content = fs::read_to_string(dir.path().join("600000.SH_quote.txt")).unwrap();
        assert_eq!(content, "时间, 现价(元)\n09:30:01, 11.25\n09:30:04, 11.26\n");
    }

    #[test]
    fn first_write_is_header_plus_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path());

        let path = sink
            .append_line("000625.SZ_tick.txt", "h", "09:30:01,11.25,120,B")
            .unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["h", "09:30:01,11.25,120,B"]);
    }

    #[test]
    fn overwrite_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path());

        sink.append_line("a_tick.txt", "h", "stale").unwrap();
        let path = sink
            .overwrite(
                "a_tick.txt",
                "h",
                &["09:30:01,11.25,120,B".to_string(), "09:30:02,11.24,40,S".to_string()],
            )
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "h\n09:30:01,11.25,120,B\n09:30:02,11.24,40,S\n");
    }

    #[test]
    fn file_names_are_derived_from_the_symbol() {
        assert_eq!(quote_file_name("600000.SH"), "600000.SH_quote.txt");
        assert_eq!(tick_file_name("600000.SH"), "600000.SH_tick.txt");
        assert_eq!(minute_file_name("600000.SH"), "600000.SH_minute.txt");
    }
}
