//! The extraction pipeline: folder in, CV records out

use crate::error::Result;
use crate::input::manager::{display_name, InputManager};
use crate::llm::client::CompletionClient;
use crate::llm::extractor::FieldExtractor;
use crate::processing::record::{CvRecord, RunResult};
use crate::processing::reporter::{LogReporter, RunReporter};
use std::path::Path;
use std::sync::Arc;

pub struct ExtractionPipeline<C> {
    input: InputManager,
    extractor: FieldExtractor<C>,
    reporter: Arc<dyn RunReporter>,
}

impl<C: CompletionClient> ExtractionPipeline<C> {
    pub fn new(extractor: FieldExtractor<C>) -> Self {
        Self::with_reporter(extractor, Arc::new(LogReporter))
    }

    pub fn with_reporter(extractor: FieldExtractor<C>, reporter: Arc<dyn RunReporter>) -> Self {
        Self {
            input: InputManager::new(),
            extractor,
            reporter,
        }
    }

    /// Process every supported file in `dir`, one at a time.
    ///
    /// Only a missing folder is an error here; a file that fails at any stage is
    /// reported and left out of the result.
    pub async fn run(&self, dir: &Path) -> Result<RunResult> {
        let files = self.input.enumerate(dir)?;
        let total = files.len();
        self.reporter.files_found(dir, total);

        let mut result = RunResult::new(total);
        for (idx, path) in files.iter().enumerate() {
            let filename = display_name(path);
            self.reporter.file_started(idx + 1, total, &filename);

            match self.process_file(path, &filename).await {
                Ok(record) => {
                    self.reporter.record_extracted(&filename);
                    result.push(record);
                }
                Err(e) => {
                    self.reporter.file_skipped(&filename, &e);
                    result.skip(filename, &e);
                }
            }
        }

        Ok(result)
    }

    pub fn extractor(&self) -> &FieldExtractor<C> {
        &self.extractor
    }

    async fn process_file(&self, path: &Path, filename: &str) -> Result<CvRecord> {
        let cv_text = self.input.extract_text(path).await?;
        self.extractor.extract(&cv_text, filename).await
    }
}
