use crate::application::dto::IngestSummary;
use crate::ports::outbound::{Clock, PackageSearch, ProgressReporter, RawStore, StateStore};
use crate::registry_ingest::domain::{IngestPlan, IngestState, SearchQuery};
use crate::shared::Result;
use chrono::Utc;
use tracing::{debug, info};


/// IngestPackagesUseCase - paginated, deduplicating scan of the registry
///
/// Scans each search term of an [`IngestPlan`] page by page, keeping only
/// names not seen before, until the target count is reached or every term is
/// exhausted. The checkpoint is saved after every page, so a rerun continues
/// where the last one stopped.
///
/// # Type Parameters
/// * `S` - PackageSearch implementation
/// * `ST` - StateStore implementation
/// * `RS` - RawStore implementation
/// * `PR` - ProgressReporter implementation
/// * `C` - Clock implementation (inter-page delay)
pub struct IngestPackagesUseCase<S, ST, RS, PR, C> {
    search: S,
    state_store: ST,
    raw_store: RS,
    progress_reporter: PR,
    clock: C,
}

/// How the scan of one term ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TermOutcome {
    Exhausted,
    Saturated,
    TargetReached,
}

impl<S, ST, RS, PR, C> IngestPackagesUseCase<S, ST, RS, PR, C>
where
    S: PackageSearch,
    ST: StateStore,
    RS: RawStore,
    PR: ProgressReporter,
    C: Clock,
{
    /// Creates a new IngestPackagesUseCase with injected dependencies
    pub fn new(search: S, state_store: ST, raw_store: RS, progress_reporter: PR, clock: C) -> Self {
        Self {
            search,
            state_store,
            raw_store,
            progress_reporter,
            clock,
        }
    }

    /// Executes the ingest
    ///
    /// # Returns
    /// IngestSummary with the final record count and the work done by this run
    ///
    /// # Errors
    /// Any search, checkpoint or raw-write failure aborts the run. Pages
    /// checkpointed before the failure are kept.
    pub fn execute(&self, plan: &IngestPlan) -> Result<IngestSummary> {
        // Step 1: Resume from the last checkpoint
        let mut state = self.load_state(plan)?;
        let starting_count = state.len();

        if state.is_target_reached(plan.target_count) {
            self.progress_reporter.report(&format!(
                "Already have {} packages cached",
                state.len()
            ));
            self.raw_store.save_raw(&plan.raw_slug, &state.packages)?;
            return Ok(Self::summarize(plan, &state, starting_count, 0));
        }

        self.progress_reporter.report(&format!(
            "Fetching top {} npm packages...",
            plan.target_count
        ));
        self.progress_reporter.report(&format!(
            "Starting with {} existing packages",
            starting_count
        ));

        // Step 2: Scan terms in order until the target is reached
        let mut pages_fetched = 0;
        for term in &plan.search_terms {
            if state.is_target_reached(plan.target_count) {
                break;
            }
            if state.is_term_complete(term) {
                debug!(term = %term, "term already completed in a previous run");
                continue;
            }

            let (outcome, pages) = self.scan_term(term, plan, &mut state)?;
            pages_fetched += pages;
            debug!(term = %term, ?outcome, pages, "term scan finished");
        }

        // Step 3: Hand the accumulated records to the transform phase
        self.progress_reporter
            .report_completion(&format!("Total: {} packages", state.len()));
        self.raw_store.save_raw(&plan.raw_slug, &state.packages)?;

        Ok(Self::summarize(plan, &state, starting_count, pages_fetched))
    }

    fn load_state(&self, plan: &IngestPlan) -> Result<IngestState> {
        let state = self.state_store.load(&plan.state_key)?;
        Ok(state.unwrap_or_default())
    }

    fn checkpoint(&self, plan: &IngestPlan, state: &mut IngestState) -> Result<()> {
        state.touch(Utc::now());
        self.state_store.save(&plan.state_key, state)
    }

    /// Pages through one term from its saved cursor.
    ///
    /// # Returns
    /// Why the scan stopped, and how many pages it requested
    fn scan_term(
        &self,
        term: &str,
        plan: &IngestPlan,
        state: &mut IngestState,
    ) -> Result<(TermOutcome, usize)> {
        let mut cursor = state.cursor_for(term);
        if cursor.offset > 0 {
            self.progress_reporter.report(&format!(
                "  Resuming term '{}' at offset {}",
                term, cursor.offset
            ));
        } else {
            self.progress_reporter
                .report(&format!("  Searching with term: '{}'", term));
        }

        let mut pages = 0;
        loop {
            if state.is_target_reached(plan.target_count) {
                return Ok((TermOutcome::TargetReached, pages));
            }

            let query = SearchQuery::new(term, plan.page_size, cursor.offset, plan.weights);
            let page = self.search.search(&query)?;
            pages += 1;

            if page.is_empty() {
                self.progress_reporter
                    .report(&format!("    No more results at offset {}", cursor.offset));
                state.complete_term(term);
                self.checkpoint(plan, state)?;
                return Ok((TermOutcome::Exhausted, pages));
            }

            let fetched = page.object_count;
            let added = state.absorb(page.records, plan.target_count);
            cursor.advance(plan.page_size, added);

            let saturated = cursor.is_saturated(plan.saturation_pages);
            state.set_cursor(cursor.clone());
            if saturated {
                state.complete_term(term);
            }
            self.checkpoint(plan, state)?;

            info!(
                term = %term,
                offset = cursor.offset,
                fetched,
                added,
                total = state.len(),
                "fetched search page"
            );
            self.progress_reporter.report(&format!(
                "    Fetched {} packages (+{} new, offset: {})",
                state.len(),
                added,
                cursor.offset
            ));
            self.progress_reporter
                .report_progress(state.len(), plan.target_count, Some(term));

            if saturated {
                self.progress_reporter.report_warning(&format!(
                    "Stopping '{}' - too many duplicates",
                    term
                ));
                return Ok((TermOutcome::Saturated, pages));
            }

            if !plan.page_delay.is_zero() && !state.is_target_reached(plan.target_count) {
                self.clock.sleep(plan.page_delay);
            }
        }
    }

    fn summarize(
        plan: &IngestPlan,
        state: &IngestState,
        starting_count: usize,
        pages_fetched: usize,
    ) -> IngestSummary {
        IngestSummary {
            total: state.len(),
            added: state.len().saturating_sub(starting_count),
            pages_fetched,
            target_reached: state.is_target_reached(plan.target_count),
        }
    }
}
