// Identity Sink
//
// Writes the sorted identities to `<domain>_identities.txt` and the console.
// The file is staged in a temporary file next to its final name and renamed
// into place, so a failed run never leaves a half-written output file. The
// console only receives the identities once the file is in place.

use super::orderer::SortedOutput;
use crate::error::{Result, SearchError};
use crate::security::ValidDomain;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Dual console/file writer for one collection run
#[derive(Debug, Clone)]
pub struct IdentitySink {
    output_dir: PathBuf,
}

impl IdentitySink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path the identities for `domain` will be written to
    ///
    /// The working directory yields the bare file name.
    pub fn output_path(&self, domain: &ValidDomain) -> PathBuf {
        if self.output_dir == Path::new(".") {
            PathBuf::from(domain.output_file_name())
        } else {
            self.output_dir.join(domain.output_file_name())
        }
    }

    /// Confirm the output directory exists and accepts new files
    pub fn preflight(&self) -> Result<()> {
        let not_writable = || SearchError::OutputDirectory {
            path: self.output_dir.clone(),
        };

        if !self.output_dir.is_dir() {
            return Err(not_writable());
        }

        // Create (and immediately remove) a scratch file
        let _scratch = NamedTempFile::new_in(&self.output_dir).map_err(|_| not_writable())?;
        Ok(())
    }

    /// Write `output` to the domain's file, then to `console`
    ///
    /// Both destinations receive byte-identical content. Returns the path of
    /// the written file.
    pub fn write<W: Write>(
        &self,
        domain: &ValidDomain,
        output: &SortedOutput,
        console: &mut W,
    ) -> Result<PathBuf> {
        let path = self.output_path(domain);
        let rendered = output.render();

        self.write_file(&path, rendered.as_bytes())?;
        debug!("Wrote {} identities to {}", output.len(), path.display());

        console.write_all(rendered.as_bytes())?;
        console.flush()?;

        Ok(path)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut staged = staging_builder()
            .tempfile_in(&self.output_dir)
            .map_err(|e| SearchError::file_create(path, e))?;

        staged
            .write_all(contents)
            .and_then(|_| staged.flush())
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| SearchError::file_create(path, e))?;

        staged
            .persist(path)
            .map_err(|e| SearchError::file_create(path, e.error))?;

        Ok(())
    }
}

/// Staging files open with the mode a plain create would use; the umask
/// still applies
#[cfg(unix)]
fn staging_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;
    let mut builder = tempfile::Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn staging_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identities::classifier::Partition;
    use crate::security::validate_domain;
    use tempfile::TempDir;

    fn sample_output() -> SortedOutput {
        SortedOutput::from_partition(Partition {
            wildcard: vec!["*.z.example.com".to_string(), "*.a.example.com".to_string()],
            plain: vec!["plain.example.com".to_string()],
        })
    }

    #[test]
    fn test_console_and_file_identical() {
        let dir = TempDir::new().unwrap();
        let sink = IdentitySink::new(dir.path());
        let domain = validate_domain("example.com").unwrap();
        let mut console = Vec::new();

        let path = sink.write(&domain, &sample_output(), &mut console).unwrap();

        assert_eq!(path, dir.path().join("example.com_identities.txt"));
        let file = std::fs::read(&path).unwrap();
        assert_eq!(file, console);
        assert_eq!(
            String::from_utf8(file).unwrap(),
            "*.a.example.com\n*.z.example.com\nplain.example.com\n"
        );
    }

    #[test]
    fn test_empty_output_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let sink = IdentitySink::new(dir.path());
        let domain = validate_domain("example.com").unwrap();
        let mut console = Vec::new();

        let path = sink
            .write(&domain, &SortedOutput::default(), &mut console)
            .unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
        assert!(console.is_empty());
    }

    #[test]
    fn test_existing_file_replaced() {
        let dir = TempDir::new().unwrap();
        let sink = IdentitySink::new(dir.path());
        let domain = validate_domain("example.com").unwrap();
        let path = sink.output_path(&domain);
        std::fs::write(&path, "stale.example.com\nother.example.com\n").unwrap();

        sink.write(&domain, &sample_output(), &mut Vec::new()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        // No staging files left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_fails_without_console_output() {
        let dir = TempDir::new().unwrap();
        let sink = IdentitySink::new(dir.path().join("missing"));
        let domain = validate_domain("example.com").unwrap();
        let mut console = Vec::new();

        let err = sink
            .write(&domain, &sample_output(), &mut console)
            .unwrap_err();

        assert_eq!(err.kind(), crate::error::ErrorKind::FileCreateFailure);
        assert!(console.is_empty());
    }

    #[test]
    fn test_output_path_in_working_directory_is_bare() {
        let domain = validate_domain("example.com").unwrap();

        assert_eq!(
            IdentitySink::new(".").output_path(&domain),
            PathBuf::from("example.com_identities.txt")
        );
        assert_eq!(
            IdentitySink::new("out").output_path(&domain),
            PathBuf::from("out/example.com_identities.txt")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_mode_matches_plain_create() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let sink = IdentitySink::new(dir.path());
        let domain = validate_domain("example.com").unwrap();
        let path = sink.write(&domain, &sample_output(), &mut Vec::new()).unwrap();

        let reference = dir.path().join("reference.txt");
        std::fs::File::create(&reference).unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[test]
    fn test_preflight() {
        let dir = TempDir::new().unwrap();
        assert!(IdentitySink::new(dir.path()).preflight().is_ok());

        let missing = IdentitySink::new(dir.path().join("missing"));
        assert!(matches!(
            missing.preflight(),
            Err(SearchError::OutputDirectory { .. })
        ));

        let file_path = dir.path().join("not-a-dir");
        std::fs::write(&file_path, "").unwrap();
        assert!(IdentitySink::new(&file_path).preflight().is_err());
    }
}
