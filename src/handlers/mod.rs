pub mod calculate;
pub mod health;
pub mod metrics_handler;
pub mod render;

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::{planning::PlanningData, renderer::Renderer};

/// Application state shared by the handlers
#[derive(Clone)]
pub struct AppState {
    /// Swapped wholesale on reload
    pub planning: Arc<ArcSwap<PlanningData>>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(planning: PlanningData, renderer: Renderer) -> Self {
        Self {
            planning: Arc::new(ArcSwap::from_pointee(planning)),
            renderer: Arc::new(renderer),
        }
    }
}
