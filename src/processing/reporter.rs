//! Progress reporting for extraction runs

use crate::error::CvExtractorError;
use log::{info, warn};
use std::path::Path;

/// Receives pipeline progress. Injected so runs can be observed without a global logger.
pub trait RunReporter: Send + Sync {
    fn files_found(&self, dir: &Path, total: usize);
    fn file_started(&self, index: usize, total: usize, filename: &str);
    fn record_extracted(&self, filename: &str);
    fn file_skipped(&self, filename: &str, error: &CvExtractorError);
}

/// Forwards progress to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl RunReporter for LogReporter {
    fn files_found(&self, dir: &Path, total: usize) {
        if total == 0 {
            warn!("No CV files found in {}", dir.display());
        } else {
            info!("Found {} CV files to process", total);
        }
    }

    fn file_started(&self, index: usize, total: usize, filename: &str) {
        info!("Processing [{}/{}] {}", index, total, filename);
    }

    fn record_extracted(&self, filename: &str) {
        info!("✓ Extracted data from {}", filename);
    }

    fn file_skipped(&self, filename: &str, error: &CvExtractorError) {
        warn!("✗ Failed to extract data from {}: {}", filename, error);
    }
}
