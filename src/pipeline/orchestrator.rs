//! The export orchestrator.
//!
//! Coordinates render, capture and assembly per user action. Each export is
//! keyed by the record's identity: independent records run concurrently up
//! to the configured cap, while a duplicate trigger for a record already in
//! flight is suppressed. Cleanup of the transient render target and of the
//! in-flight entry is owned by guards, so every exit path (success,
//! stage error, timeout) releases both.

use log::{debug, info, warn};
use parchment_compose as compose;
use parchment_raster::{FontStore, Rasterizer};
use parchment_template::{ExportableRecord, TemplateError, TemplateSet};
use parchment_types::{DocKind, RecordId};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tokio::task;
use tokio::time::timeout;

use crate::ExportError;
use crate::pipeline::config::ExportConfig;
use crate::pipeline::registry::{RenderTarget, TargetRegistry};

/// Where an in-flight export currently is. Terminal states are not tracked:
/// once an export finishes or fails, its entry disappears and the record is
/// idle again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPhase {
    Preparing,
    Capturing,
    Assembling,
}

/// The observable result of one export trigger.
#[derive(Debug)]
pub enum ExportOutcome {
    /// A PDF was assembled and saved.
    Saved { path: PathBuf, filename: String },
    /// The record was already being exported; this trigger was a no-op.
    SkippedInFlight,
}

impl ExportOutcome {
    pub fn saved_path(&self) -> Option<&std::path::Path> {
        match self {
            ExportOutcome::Saved { path, .. } => Some(path),
            ExportOutcome::SkippedInFlight => None,
        }
    }
}

/// The export pipeline. Cheap to share behind an [`Arc`]; all mutable state
/// is interior and keyed per record.
pub struct ExportPipeline {
    templates: TemplateSet,
    rasterizer: Arc<dyn Rasterizer>,
    fonts: Arc<FontStore>,
    config: ExportConfig,
    inflight: Mutex<HashMap<RecordId, ExportPhase>>,
    permits: Semaphore,
    targets: Arc<TargetRegistry>,
}

impl ExportPipeline {
    pub(crate) fn new(
        templates: TemplateSet,
        rasterizer: Arc<dyn Rasterizer>,
        fonts: Arc<FontStore>,
        config: ExportConfig,
    ) -> Self {
        let permits = Semaphore::new(config.max_concurrent.max(1));
        Self {
            templates,
            rasterizer,
            fonts,
            config,
            inflight: Mutex::new(HashMap::new()),
            permits,
            targets: Arc::new(TargetRegistry::new()),
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// The number of render targets currently attached. Zero whenever no
    /// export is between render and assembly.
    pub fn attached_targets(&self) -> usize {
        self.targets.attached_count()
    }

    /// The phase of an in-flight export, or `None` when the record is idle.
    pub fn phase_of(&self, id: &RecordId) -> Option<ExportPhase> {
        self.inflight.lock().expect("in-flight map poisoned").get(id).copied()
    }

    /// Exports one record as the given document kind.
    ///
    /// Returns [`ExportOutcome::SkippedInFlight`] when the same record is
    /// already being exported. Every failure is reported here; none leaves
    /// a render target attached or the busy flag set.
    pub async fn export(
        &self,
        record: Value,
        kind: DocKind,
    ) -> Result<ExportOutcome, ExportError> {
        let record = ExportableRecord::new(record)?;
        let template = self
            .templates
            .get(kind)
            .ok_or(TemplateError::UnknownKind(kind))?;
        let id = record.record_id(kind);

        let Some(_busy) = InflightGuard::try_begin(self, id.clone()) else {
            debug!("export of {} already in flight, ignoring trigger", id);
            return Ok(ExportOutcome::SkippedInFlight);
        };
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| ExportError::Worker(e.to_string()))?;

        // Readiness, not a settle delay: fonts are loaded before the first
        // capture and this returns immediately afterwards.
        let fonts = Arc::clone(&self.fonts);
        task::spawn_blocking(move || {
            fonts.ensure_ready();
        })
        .await
        .map_err(|e| ExportError::Worker(e.to_string()))?;

        debug!("preparing render target for {}", id);
        let markup = template.render(&record)?;
        let target = RenderTarget::attach(Arc::clone(&self.targets), id.clone(), markup);

        self.set_phase(&id, ExportPhase::Capturing);
        let rasterizer = Arc::clone(&self.rasterizer);
        let page_markup = target.markup();
        let options = self.config.capture_options();
        let capture = task::spawn_blocking(move || rasterizer.capture(&page_markup, &options));
        let image = match timeout(self.config.capture_timeout, capture).await {
            Err(_) => {
                warn!(
                    "capture of {} exceeded {:?}, abandoning export",
                    id, self.config.capture_timeout
                );
                return Err(ExportError::CaptureTimeout(self.config.capture_timeout));
            }
            Ok(Err(join_error)) => return Err(ExportError::Worker(join_error.to_string())),
            Ok(Ok(result)) => result?,
        };

        self.set_phase(&id, ExportPhase::Assembling);
        let mut doc = compose::assemble(&image, &template.page())?;
        let (first, last) = record.subject_names();
        let filename = compose::derive_filename(first, last, kind);
        fs::create_dir_all(&self.config.output_dir)?;
        let path = self.config.output_dir.join(&filename);
        compose::save_to_path(&mut doc, &path)?;
        drop(target);

        info!("exported {} as {}", id, path.display());
        Ok(ExportOutcome::Saved { path, filename })
    }

    /// Exports many records through a fixed pool of workers over a bounded
    /// channel, so a large batch never holds more than a couple of
    /// full-resolution captures alive at once. Results come back in input
    /// order.
    pub async fn export_batch(
        self: &Arc<Self>,
        records: Vec<Value>,
        kind: DocKind,
    ) -> Vec<Result<ExportOutcome, ExportError>> {
        let total = records.len();
        let workers = self.config.max_concurrent.max(1).min(total.max(1));
        let (work_tx, work_rx) = async_channel::bounded::<(usize, Value)>(workers);
        let (result_tx, result_rx) =
            async_channel::bounded::<(usize, Result<ExportOutcome, ExportError>)>(workers);

        info!("batch export of {} records with {} workers", total, workers);
        let producer = task::spawn(async move {
            for (index, record) in records.into_iter().enumerate() {
                if work_tx.send((index, record)).await.is_err() {
                    warn!("batch workers stopped early, dropping remaining records");
                    break;
                }
            }
        });

        let mut worker_handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            let pipeline = Arc::clone(self);
            worker_handles.push(task::spawn(async move {
                while let Ok((index, record)) = work_rx.recv().await {
                    debug!("[batch-worker-{}] exporting record #{}", worker_id, index);
                    let result = pipeline.export(record, kind).await;
                    if result_tx.send((index, result)).await.is_err() {
                        break;
                    }
                }
            }));
        }
        drop(work_rx);
        drop(result_tx);

        let mut results: Vec<Option<Result<ExportOutcome, ExportError>>> =
            (0..total).map(|_| None).collect();
        while let Ok((index, result)) = result_rx.recv().await {
            results[index] = Some(result);
        }
        let _ = producer.await;
        for handle in worker_handles {
            let _ = handle.await;
        }

        results
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| Err(ExportError::Worker("worker dropped record".into())))
            })
            .collect()
    }

    fn set_phase(&self, id: &RecordId, phase: ExportPhase) {
        let mut map = self.inflight.lock().expect("in-flight map poisoned");
        if let Some(slot) = map.get_mut(id) {
            *slot = phase;
        }
    }
}

/// Marks a record as busy for the duration of its export. Dropping the
/// guard, normally or on an error path, returns the record to idle.
struct InflightGuard<'a> {
    pipeline: &'a ExportPipeline,
    id: RecordId,
}

impl<'a> InflightGuard<'a> {
    fn try_begin(pipeline: &'a ExportPipeline, id: RecordId) -> Option<Self> {
        let mut map = pipeline.inflight.lock().expect("in-flight map poisoned");
        if map.contains_key(&id) {
            return None;
        }
        map.insert(id.clone(), ExportPhase::Preparing);
        Some(Self { pipeline, id })
    }
}

impl Drop for InflightGuard<'_> {
    fn drop(&mut self) {
        self.pipeline
            .inflight
            .lock()
            .expect("in-flight map poisoned")
            .remove(&self.id);
        debug!("record {} returned to idle", self.id);
    }
}
