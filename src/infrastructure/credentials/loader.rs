use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::error::InitError;
use crate::domain::models::{ServiceAccountCredential, ServiceAccountKey};

/// Builds service-account credentials from key files and byte streams
pub struct CredentialLoader;

impl CredentialLoader {
    /// Read and validate the key file at `path`
    ///
    /// The file is read in full and closed before parsing starts, so no
    /// handle outlives this call on any path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<ServiceAccountCredential, InitError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| InitError::CredentialFile {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "read service account key file");

        Self::from_slice(&bytes)
    }

    /// Build a credential from a byte stream
    pub fn from_reader(mut reader: impl Read) -> Result<ServiceAccountCredential, InitError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| InitError::CredentialFile {
                path: PathBuf::from("<stream>"),
                source,
            })?;

        Self::from_slice(&bytes)
    }

    /// Parse a key document and validate it
    ///
    /// Syntax errors surface as `MalformedCredential`; well-formed JSON with
    /// missing or mistyped fields surfaces as `InvalidCredential`.
    pub fn from_slice(bytes: &[u8]) -> Result<ServiceAccountCredential, InitError> {
        let key: ServiceAccountKey = serde_json::from_slice(bytes).map_err(|e| {
            if e.is_data() {
                InitError::InvalidCredential(e.to_string())
            } else {
                InitError::MalformedCredential(e)
            }
        })?;

        ServiceAccountCredential::from_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    /// Reader that records when it is dropped
    struct TrackedReader {
        inner: Cursor<Vec<u8>>,
        dropped: Arc<AtomicBool>,
    }

    impl TrackedReader {
        fn new(bytes: &[u8]) -> (Self, Arc<AtomicBool>) {
            let dropped = Arc::new(AtomicBool::new(false));
            let reader = Self {
                inner: Cursor::new(bytes.to_vec()),
                dropped: dropped.clone(),
            };
            (reader, dropped)
        }
    }

    impl Read for TrackedReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl Drop for TrackedReader {
        fn drop(&mut self) {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }

    const FIXTURE: &str = include_str!("../../../tests/fixtures/service_account.json");

    #[test]
    fn test_from_path_valid() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        file.flush().unwrap();

        let credential = CredentialLoader::from_path(file.path()).unwrap();
        assert_eq!(credential.project_id(), Some("demo-project"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = CredentialLoader::from_path(&path).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_from_reader_valid() {
        let credential = CredentialLoader::from_reader(FIXTURE.as_bytes()).unwrap();
        assert!(credential.private_key_id().is_some());
    }

    #[test]
    fn test_from_slice_malformed_json() {
        let err = CredentialLoader::from_slice(b"{\"type\": \"service_account\",").unwrap_err();
        assert!(matches!(err, InitError::MalformedCredential(_)));
    }

    #[test]
    fn test_from_slice_missing_field_is_invalid() {
        let err = CredentialLoader::from_slice(br#"{"type": "service_account", "private_key": "x"}"#)
            .unwrap_err();
        match err {
            InitError::InvalidCredential(msg) => assert!(msg.contains("client_email")),
            other => panic!("Expected InvalidCredential, got {other:?}"),
        }
    }

    #[test]
    fn test_from_reader_releases_stream_on_every_path() {
        let (reader, dropped) = TrackedReader::new(FIXTURE.as_bytes());
        let credential = CredentialLoader::from_reader(reader).unwrap();
        assert!(dropped.load(Ordering::SeqCst));
        drop(credential);

        let (reader, dropped) = TrackedReader::new(b"{\"type\": \"service_");
        let err = CredentialLoader::from_reader(reader).unwrap_err();
        assert!(matches!(err, InitError::MalformedCredential(_)));
        assert!(dropped.load(Ordering::SeqCst));

        let (reader, dropped) = TrackedReader::new(br#"{"type": "authorized_user"}"#);
        assert!(CredentialLoader::from_reader(reader).is_err());
        assert!(dropped.load(Ordering::SeqCst));
    }
}
