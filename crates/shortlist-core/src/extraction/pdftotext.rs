use crate::error::ShortlistError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::{Read, Seek, SeekFrom};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs in reading-order mode (no `-layout`) so label/value pairs stay on the
/// same line, and kills the child process once `timeout` has elapsed.
pub struct PdftotextExtractor {
    timeout: Duration,
}

impl PdftotextExtractor {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> Self {
        PdftotextExtractor {
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        PdftotextExtractor { timeout }
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn wait_bounded(&self, child: &mut std::process::Child) -> Result<ExitStatus, ShortlistError> {
        let started = Instant::now();
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if started.elapsed() >= self.timeout {
                // The process may have exited between try_wait and kill.
                let _ = child.kill();
                let _ = child.wait();
                return Err(ShortlistError::PdftotextTimeout {
                    seconds: self.timeout.as_secs(),
                });
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ShortlistError> {
        let workdir = tempfile::tempdir().map_err(|e| ShortlistError::Extraction(e.to_string()))?;
        let input_path = workdir.path().join("input.pdf");
        let output_path = workdir.path().join("output.txt");
        std::fs::write(&input_path, pdf_bytes)
            .map_err(|e| ShortlistError::Extraction(e.to_string()))?;

        // stderr goes to a file so a chatty pdftotext cannot block on a full pipe.
        let mut stderr_file =
            tempfile::tempfile().map_err(|e| ShortlistError::Extraction(e.to_string()))?;
        let stderr_handle = stderr_file
            .try_clone()
            .map_err(|e| ShortlistError::Extraction(e.to_string()))?;

        let mut child = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(&input_path)
            .arg(&output_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::from(stderr_handle))
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ShortlistError::PdftotextNotFound
                } else {
                    ShortlistError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        let status = self.wait_bounded(&mut child)?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            let mut stderr = String::new();
            stderr_file.seek(SeekFrom::Start(0))?;
            stderr_file.read_to_string(&mut stderr)?;
            return Err(ShortlistError::PdftotextFailed {
                code,
                stderr: stderr.trim().to_string(),
            });
        }

        let raw = std::fs::read(&output_path)?;
        let text = String::from_utf8_lossy(&raw);
        let pages = split_pages(&text);
        debug!(pages = pages.len(), bytes = raw.len(), "pdftotext finished");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages (form feed `\x0c` ends each page).
fn split_pages(text: &str) -> Vec<PageContent> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            text: page_text.to_string(),
        })
        .filter(|p| !p.text.is_empty() || p.page_number == 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::join_pages;

    #[test]
    fn test_split_pages_on_form_feed() {
        let pages = split_pages("Jane Perera\nMs.\n\x0cAddress: Galle\n\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].text, "Jane Perera\nMs.\n");
        assert_eq!(pages[1].text, "Address: Galle\n");
    }

    #[test]
    fn test_split_then_join_inserts_nothing() {
        let pages = split_pages("a\n\x0cb\n\x0c");
        assert_eq!(join_pages(&pages), "a\nb\n");
    }

    #[test]
    fn test_empty_output_keeps_first_page() {
        let pages = split_pages("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].text.is_empty());
    }
}
