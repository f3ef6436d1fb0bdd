//! Font discovery and readiness.
//!
//! Capture must never start before the fonts a template references are
//! available, so the store exposes an explicit [`FontStore::ensure_ready`]
//! signal: the first call loads the database, later calls are free. There
//! is deliberately no timed delay anywhere in this pipeline.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use log::{debug, info, warn};
use parchment_template::FontFamily;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// A font file ready for outline extraction.
#[derive(Debug)]
pub struct LoadedFace {
    pub data: Vec<u8>,
    pub index: u32,
}

/// Lazily initialized font database with a per-family face cache.
pub struct FontStore {
    seed: Vec<Vec<u8>>,
    load_system: bool,
    db: OnceLock<Database>,
    cache: Mutex<HashMap<String, Option<Arc<LoadedFace>>>>,
}

impl FontStore {
    /// A store backed by the fonts installed on the host.
    pub fn system() -> Self {
        Self {
            seed: Vec::new(),
            load_system: true,
            db: OnceLock::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// A store backed only by the given font files. Used by templates that
    /// ship their own faces and by tests that need hermetic font state.
    pub fn with_fonts(seed: Vec<Vec<u8>>) -> Self {
        Self {
            seed,
            load_system: false,
            db: OnceLock::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Loads the database if it has not been loaded yet and returns it.
    ///
    /// This is the readiness signal the orchestrator awaits before the
    /// first capture: once it returns, every later face query is a lookup.
    pub fn ensure_ready(&self) -> &Database {
        self.db.get_or_init(|| {
            let mut db = Database::new();
            for data in &self.seed {
                db.load_font_data(data.clone());
            }
            if self.load_system {
                db.load_system_fonts();
            }
            info!("font database ready with {} faces", db.len());
            if db.is_empty() {
                warn!("no fonts available; text will be captured as placeholder rules");
            }
            db
        })
    }

    /// Resolves a markup font family to a loaded face, if any matches.
    pub fn face_for(&self, family: &FontFamily) -> Option<Arc<LoadedFace>> {
        let key = cache_key(family);
        if let Some(hit) = self.cache.lock().expect("font cache poisoned").get(&key) {
            return hit.clone();
        }

        let db = self.ensure_ready();
        let families = match family {
            FontFamily::Named(name) => {
                vec![Family::Name(name.as_str()), Family::SansSerif, Family::Serif]
            }
            FontFamily::Serif => vec![Family::Serif, Family::SansSerif],
            FontFamily::SansSerif => vec![Family::SansSerif, Family::Serif],
        };
        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };

        let loaded = db.query(&query).and_then(|id| {
            db.with_face_data(id, |data, index| {
                Arc::new(LoadedFace { data: data.to_vec(), index })
            })
        });
        if loaded.is_none() {
            debug!("no face matched family {:?}", family);
        }

        self.cache
            .lock()
            .expect("font cache poisoned")
            .insert(key, loaded.clone());
        loaded
    }
}

fn cache_key(family: &FontFamily) -> String {
    match family {
        FontFamily::Serif => "@serif".to_string(),
        FontFamily::SansSerif => "@sans".to_string(),
        FontFamily::Named(name) => name.to_ascii_lowercase(),
    }
}
