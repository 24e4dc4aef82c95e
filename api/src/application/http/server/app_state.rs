use std::sync::Arc;

use nutriscan_core::application::NutriScanService;
use tokio::sync::Mutex;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriScanService,
    /// Held by every mutating handler so load/modify/save cycles never
    /// interleave on the same files.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriScanService) -> Self {
        Self {
            args,
            service,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
