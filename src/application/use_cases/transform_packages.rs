use crate::application::dto::{TransformRequest, TransformSummary};
use crate::dataset::field_rules::project_records;
use crate::dataset::{validate, DatasetMetadata, SchemaContract};
use crate::ports::outbound::{DatasetSink, ProgressReporter, RawStore, WriteMode};
use crate::shared::Result;
use tracing::info;

/// TransformPackagesUseCase - raw artifact to published dataset
///
/// Projects the raw records through the field rule table, checks the result
/// against the dataset contract and, only when every check passes, uploads
/// and publishes it. A failed check leaves the sink untouched.
///
/// # Type Parameters
/// * `RS` - RawStore implementation
/// * `DS` - DatasetSink implementation
/// * `PR` - ProgressReporter implementation
pub struct TransformPackagesUseCase<RS, DS, PR> {
    raw_store: RS,
    sink: DS,
    progress_reporter: PR,
}

impl<RS, DS, PR> TransformPackagesUseCase<RS, DS, PR>
where
    RS: RawStore,
    DS: DatasetSink,
    PR: ProgressReporter,
{
    pub fn new(raw_store: RS, sink: DS, progress_reporter: PR) -> Self {
        Self {
            raw_store,
            sink,
            progress_reporter,
        }
    }

    /// Executes the transform
    ///
    /// # Errors
    /// Returns an error if the raw artifact cannot be read, the table fails
    /// validation, or the sink rejects the upload or publish.
    pub fn execute(&self, request: &TransformRequest) -> Result<TransformSummary> {
        let metadata = DatasetMetadata::popular_packages();

        // Step 1: Load the artifact written by ingest
        let raw = self.raw_store.load_raw(&request.raw_slug)?;
        self.progress_reporter
            .report(&format!("Loaded {} raw records", raw.len()));

        // Step 2: Project into the typed table
        let projection = project_records(&raw)?;
        if projection.dropped > 0 {
            self.progress_reporter.report_warning(&format!(
                "Dropped {} record(s) without a package name",
                projection.dropped
            ));
        }
        let table = projection.table;
        info!(
            loaded = raw.len(),
            dropped = projection.dropped,
            rows = table.num_rows(),
            "projected raw records"
        );

        // Step 3: Gate on the data-quality contract
        let contract = SchemaContract::popular_packages(request.min_rows);
        validate(&table, &contract).into_result(&metadata.id)?;
        self.progress_reporter
            .report(&format!("Validated {} rows", table.num_rows()));

        // Step 4: Upload, then publish
        self.sink.upload(&table, &metadata, WriteMode::Overwrite)?;
        self.sink.publish(&metadata)?;
        self.progress_reporter.report_completion(&format!(
            "Published {} ({} rows)",
            metadata.id,
            table.num_rows()
        ));

        Ok(TransformSummary {
            dataset_id: metadata.id,
            loaded: raw.len(),
            dropped: projection.dropped,
            rows: table.num_rows(),
        })
    }
}
