//! Test utilities for creating temporary log files and rotating them.

#[cfg(test)]
use std::fs::{File, OpenOptions};
#[cfg(test)]
use std::io::Write;
#[cfg(test)]
use std::path::{Path, PathBuf};

#[cfg(test)]
pub struct TempLogFile {
    pub path: PathBuf,
    _temp_dir: tempfile::TempDir,
}

#[cfg(test)]
impl TempLogFile {
    /// Create a new temporary log file for testing
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("test.log");

        File::create(&path)?;

        Ok(Self {
            path,
            _temp_dir: temp_dir,
        })
    }

    /// Append content to the temporary log file
    pub fn append_content(&self, content: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;

        writeln!(file, "{}", content)?;
        file.flush()?;
        Ok(())
    }

    /// Move the file to `<name>.1` and create an empty one in its place
    pub fn rotate(&self) -> std::io::Result<PathBuf> {
        let rotated = self.path.with_extension("log.1");
        std::fs::rename(&self.path, &rotated)?;
        File::create(&self.path)?;
        Ok(rotated)
    }

    /// Create or touch a sibling file in the same directory
    pub fn write_sibling(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let sibling = self.dir().join(name);
        let mut file = OpenOptions::new().create(true).append(true).open(&sibling)?;
        writeln!(file, "{}", content)?;
        Ok(sibling)
    }

    pub fn dir(&self) -> &Path {
        self._temp_dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_log_file_creation() {
        let temp_file = TempLogFile::new().unwrap();
        assert!(temp_file.path().exists());
        assert_eq!(temp_file.path().parent().unwrap(), temp_file.dir());
    }

    #[test]
    fn test_append_content() {
        let temp_file = TempLogFile::new().unwrap();
        temp_file.append_content("line 1").unwrap();
        temp_file.append_content("line 2").unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, "line 1\nline 2\n");
    }

    #[test]
    fn test_rotate() {
        let temp_file = TempLogFile::new().unwrap();
        temp_file.append_content("before rotation").unwrap();

        let rotated = temp_file.rotate().unwrap();

        assert_eq!(rotated.file_name().unwrap(), "test.log.1");
        assert!(std::fs::read_to_string(&rotated).unwrap().contains("before rotation"));
        assert!(std::fs::read_to_string(temp_file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_write_sibling() {
        let temp_file = TempLogFile::new().unwrap();
        let sibling = temp_file.write_sibling("other.log", "noise").unwrap();

        assert_eq!(sibling.parent().unwrap(), temp_file.dir());
        assert!(std::fs::read_to_string(temp_file.path()).unwrap().is_empty());
    }
}
