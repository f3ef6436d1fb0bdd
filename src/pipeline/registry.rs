//! Render-target accounting.
//!
//! A render target is the transient, off-screen page a capture reads from.
//! Every attach is paired with a detach through an owning guard, so a
//! thrown error can never leave an orphaned target behind. The registry
//! exposes the live count, which tests assert drops back to zero on every
//! exit path.

use log::debug;
use parchment_template::PageMarkup;
use parchment_types::RecordId;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts currently attached render targets.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    attached: AtomicUsize,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many render targets are attached right now.
    pub fn attached_count(&self) -> usize {
        self.attached.load(Ordering::SeqCst)
    }
}

/// A populated render target, registered for the lifetime of one capture.
/// Detaches itself on drop, on success and failure paths alike.
pub struct RenderTarget {
    markup: Arc<PageMarkup>,
    registry: Arc<TargetRegistry>,
    id: RecordId,
}

impl RenderTarget {
    pub fn attach(registry: Arc<TargetRegistry>, id: RecordId, markup: PageMarkup) -> Self {
        registry.attached.fetch_add(1, Ordering::SeqCst);
        debug!("render target attached for {}", id);
        Self { markup: Arc::new(markup), registry, id }
    }

    pub fn markup(&self) -> Arc<PageMarkup> {
        Arc::clone(&self.markup)
    }
}

impl Drop for RenderTarget {
    fn drop(&mut self) {
        self.registry.attached.fetch_sub(1, Ordering::SeqCst);
        debug!("render target detached for {}", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parchment_types::{Color, Size};

    fn markup() -> PageMarkup {
        PageMarkup::new(Size::new(10.0, 10.0), Color::WHITE)
    }

    #[test]
    fn attach_and_drop_balance() {
        let registry = Arc::new(TargetRegistry::new());
        {
            let _a = RenderTarget::attach(Arc::clone(&registry), RecordId::new("a"), markup());
            let _b = RenderTarget::attach(Arc::clone(&registry), RecordId::new("b"), markup());
            assert_eq!(registry.attached_count(), 2);
        }
        assert_eq!(registry.attached_count(), 0);
    }

    #[test]
    fn detaches_on_unwind() {
        let registry = Arc::new(TargetRegistry::new());
        let result = std::panic::catch_unwind({
            let registry = Arc::clone(&registry);
            move || {
                let _t = RenderTarget::attach(registry, RecordId::new("x"), markup());
                panic!("boom");
            }
        });
        assert!(result.is_err());
        assert_eq!(registry.attached_count(), 0);
    }
}
