use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::app::ports::{ArchivePort, RowSinkPort, RowSourcePort};
use crate::domain::OUTPUT_HEADERS;
use crate::error::ScrubberError;
use crate::pipeline::identity::SequenceCounter;
use crate::pipeline::{project, Pipeline};

/// Destination identifiers for one configured deployment.
#[derive(Debug, Clone)]
pub struct RunTargets {
    pub source_handle: String,
    pub sink_handle: String,
    pub archive_folder: String,
}

/// Use case for one trigger invocation: read the source grid, normalize
/// every row, rewrite the sink, and archive a CSV export.
///
/// Collaborators are injected; nothing here owns network or filesystem
/// specifics. The whole batch is processed before returning. Any unrecovered
/// failure aborts the remainder of the run and surfaces as a single error to
/// the caller.
pub struct ProcessUseCase {
    source: Arc<dyn RowSourcePort>,
    sink: Arc<dyn RowSinkPort>,
    archive: Arc<dyn ArchivePort>,
    pipeline: Pipeline,
    targets: RunTargets,
}

impl ProcessUseCase {
    pub fn new(
        source: Arc<dyn RowSourcePort>,
        sink: Arc<dyn RowSinkPort>,
        archive: Arc<dyn ArchivePort>,
        pipeline: Pipeline,
        targets: RunTargets,
    ) -> Self {
        Self {
            source,
            sink,
            archive,
            pipeline,
            targets,
        }
    }

    /// Runs the batch end-to-end and returns the archival file identifier.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<String> {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S").to_string();

        let raw_headers = self
            .source
            .read_headers(&self.targets.source_handle)
            .await
            .map_err(ScrubberError::Source)?;
        let grid = self
            .source
            .read_rows(&self.targets.source_handle)
            .await
            .map_err(ScrubberError::Source)?;
        info!(rows = grid.len(), "read source grid");

        // Optional recovery path: an unreadable sink seeds the counter at 0
        let mut counter = match self.sink.read_records(&self.targets.sink_handle).await {
            Ok(records) => SequenceCounter::from_existing(&records),
            Err(err) => {
                warn!(error = %err, "could not read existing sink records, seeding sequence at 0");
                SequenceCounter::seeded(0)
            }
        };

        let normalized = self
            .pipeline
            .run(&raw_headers, grid, &mut counter, &timestamp)
            .await;
        let out_headers: Vec<String> = OUTPUT_HEADERS.iter().map(|h| h.to_string()).collect();
        let out_rows = project::project_output(&normalized);

        self.sink
            .clear(&self.targets.sink_handle)
            .await
            .map_err(ScrubberError::Sink)?;
        self.sink
            .write(&self.targets.sink_handle, &out_headers, &out_rows)
            .await
            .map_err(ScrubberError::Sink)?;
        info!(rows = out_rows.len(), "sink rewritten");

        let csv_bytes = to_csv(&out_headers, &out_rows)?;
        let file_name = format!("cleaned_data_{timestamp}.csv");
        let file_id = self
            .archive
            .upload(&file_name, csv_bytes, &self.targets.archive_folder)
            .await
            .map_err(ScrubberError::Archive)?;
        info!(%file_id, %file_name, "export archived");

        Ok(file_id)
    }
}

fn to_csv(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    Ok(writer
        .into_inner()
        .map_err(|e| ScrubberError::Archive(e.to_string()))?)
}
