//! The currently loaded file and its pagination state.
//!
//! A load parses the whole file before touching the session, so a failed
//! load leaves the previous patient, records, and page exactly as they were.

use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::AscConfig;
use crate::constants::{NO_FILE_LOADED, PATIENT_INFO_UNAVAILABLE};
use crate::error::Result;
use crate::models::{ParseStats, PatientInfo, RecordSet};
use crate::paginator::Paginator;
use crate::parser::parse_asc_file;

/// Last outcome, for a status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Ready,
    Loaded { records: usize },
    Cleared,
    LoadFailed,
}

impl SessionStatus {
    pub fn message(&self) -> String {
        match self {
            SessionStatus::Ready => "Ready to load file".to_string(),
            SessionStatus::Loaded { records } => {
                format!("File loaded successfully. {} records found.", records)
            }
            SessionStatus::Cleared => "Table cleared - ready to load file".to_string(),
            SessionStatus::LoadFailed => "Error loading file".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    patient: PatientInfo,
    paginator: Paginator,
    stats: ParseStats,
    source: Option<PathBuf>,
    status: SessionStatus,
}

impl Session {
    pub fn new(config: &AscConfig) -> Self {
        Self {
            patient: PatientInfo::default(),
            paginator: Paginator::new(RecordSet::new(), config.page_size),
            stats: ParseStats::new(),
            source: None,
            status: SessionStatus::Ready,
        }
    }

    /// Parse `path` and replace the session contents with the result
    pub fn load_file(&mut self, path: &Path) -> Result<&ParseStats> {
        let outcome = match parse_asc_file(path) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Failed to load {}: {}", path.display(), e);
                self.status = SessionStatus::LoadFailed;
                return Err(e);
            }
        };

        let record_count = outcome.records.len();
        self.patient = outcome.patient;
        self.paginator.reset(outcome.records);
        self.stats = outcome.stats;
        self.source = Some(path.to_path_buf());
        self.status = SessionStatus::Loaded {
            records: record_count,
        };

        info!("Loaded {} records from {}", record_count, path.display());
        Ok(&self.stats)
    }

    /// Drop the loaded file; calling this repeatedly is harmless
    pub fn clear(&mut self) {
        self.patient = PatientInfo::default();
        self.paginator.reset(RecordSet::new());
        self.stats = ParseStats::new();
        self.source = None;
        self.status = SessionStatus::Cleared;
    }

    pub fn patient(&self) -> &PatientInfo {
        &self.patient
    }

    /// Banner text for the patient line
    ///
    /// Distinguishes "nothing loaded" from a loaded file whose preamble
    /// carried no patient fields.
    pub fn patient_summary(&self) -> String {
        match (self.source.is_some(), self.patient.summary()) {
            (_, Some(summary)) => summary,
            (true, None) => PATIENT_INFO_UNAVAILABLE.to_string(),
            (false, None) => NO_FILE_LOADED.to_string(),
        }
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn paginator_mut(&mut self) -> &mut Paginator {
        &mut self.paginator
    }

    /// Statistics from the most recent successful load
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }
}
