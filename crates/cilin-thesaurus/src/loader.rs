//! Thesaurus loading.
//!
//! Each source line is `<code> <word> <word> ...`, separated by any run of
//! whitespace. Empty lines, lines with fewer than two tokens, lines that are not
//! valid UTF-8 and lines whose code is malformed are skipped; none of them abort
//! the load. Only a source that cannot be opened or read fails.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cilin_core::constants::spans;
use cilin_core::errors::ThesaurusError;
use cilin_core::{DegradationEvent, SemanticCode};
use tracing::{info, info_span, warn};

use crate::thesaurus::Thesaurus;

const BOM: char = '\u{feff}';

/// Counters describing one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub lines_read: usize,
    /// Empty, single-token, or non-UTF-8 lines.
    pub lines_skipped: usize,
    /// Lines dropped because their leading code was not a valid semantic code.
    pub malformed_codes: usize,
    pub words: usize,
    pub code_assignments: usize,
}

/// A populated thesaurus and how it was built.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub thesaurus: Thesaurus,
    pub report: LoadReport,
}

/// Whether the engine got a real thesaurus or fell back to an empty one.
#[derive(Debug, Clone)]
pub enum ThesaurusStatus {
    Loaded(LoadReport),
    Degraded(DegradationEvent),
}

impl ThesaurusStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ThesaurusStatus::Degraded(_))
    }
}

/// Stateless thesaurus parser.
pub struct ThesaurusLoader;

impl ThesaurusLoader {
    /// Open and parse a thesaurus file. The file handle is released before returning,
    /// on success and on error alike.
    pub fn load_path(path: impl AsRef<Path>) -> Result<LoadOutcome, ThesaurusError> {
        let path = path.as_ref();
        let _span = info_span!(spans::THESAURUS_LOAD, path = %path.display()).entered();

        let file = File::open(path).map_err(|e| ThesaurusError::SourceUnavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let outcome = Self::parse_reader(BufReader::new(file))?;

        info!(
            words = outcome.report.words,
            code_assignments = outcome.report.code_assignments,
            lines_skipped = outcome.report.lines_skipped,
            malformed_codes = outcome.report.malformed_codes,
            "thesaurus loaded"
        );
        Ok(outcome)
    }

    /// Parse from any buffered reader. I/O errors fail the load; bad lines do not.
    pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<LoadOutcome, ThesaurusError> {
        let mut builder = Builder::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| ThesaurusError::ReadFailed {
                    line: builder.report.lines_read + 1,
                    reason: e.to_string(),
                })?;
            if n == 0 {
                break;
            }
            match std::str::from_utf8(&buf) {
                Ok(line) => builder.ingest(line),
                Err(e) => {
                    builder.report.lines_read += 1;
                    builder.report.lines_skipped += 1;
                    warn!(line = builder.report.lines_read, error = %e, "skipping non-UTF-8 line");
                }
            }
        }

        Ok(builder.finish())
    }

    /// Parse an in-memory thesaurus.
    pub fn parse_str(source: &str) -> LoadOutcome {
        let mut builder = Builder::default();
        for line in source.lines() {
            builder.ingest(line);
        }
        builder.finish()
    }
}

/// Load `path`, degrading to an empty thesaurus if it cannot be read.
///
/// Scoring against the empty thesaurus yields 0 for every pair; the returned
/// status lets callers tell that apart from genuinely unrelated texts.
pub fn load_or_empty(path: impl AsRef<Path>) -> (Thesaurus, ThesaurusStatus) {
    match ThesaurusLoader::load_path(path) {
        Ok(outcome) => (outcome.thesaurus, ThesaurusStatus::Loaded(outcome.report)),
        Err(e) => {
            warn!(error = %e, "thesaurus unavailable, continuing with an empty thesaurus");
            let event = DegradationEvent::now("thesaurus", e.to_string(), "empty thesaurus");
            (Thesaurus::new(), ThesaurusStatus::Degraded(event))
        }
    }
}

#[derive(Default)]
struct Builder {
    thesaurus: Thesaurus,
    report: LoadReport,
}

impl Builder {
    fn ingest(&mut self, raw: &str) {
        self.report.lines_read += 1;
        let line = if self.report.lines_read == 1 {
            raw.trim_start_matches(BOM)
        } else {
            raw
        };

        let mut tokens = line.split_whitespace();
        let (Some(code), Some(first_word)) = (tokens.next(), tokens.next()) else {
            self.report.lines_skipped += 1;
            return;
        };

        let code = match SemanticCode::parse(code) {
            Ok(code) => code,
            Err(e) => {
                self.report.malformed_codes += 1;
                warn!(line = self.report.lines_read, error = %e, "skipping line with malformed code");
                return;
            }
        };

        for word in std::iter::once(first_word).chain(tokens) {
            self.thesaurus.insert(word, code);
        }
    }

    fn finish(mut self) -> LoadOutcome {
        self.report.words = self.thesaurus.len();
        self.report.code_assignments = self.thesaurus.code_assignments();
        LoadOutcome {
            thesaurus: self.thesaurus,
            report: self.report,
        }
    }
}
