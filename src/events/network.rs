use crate::randomuser::{FetchRequest, RandomUser};
use crate::state::{State, WidgetId};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    Generate {
        widget_id: WidgetId,
        request: FetchRequest,
    },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    random_user: &'a RandomUser,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, random_user: &'a RandomUser) -> Self {
        Handler { state, random_user }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Generate { widget_id, request } => self.generate(widget_id, request).await?,
        }
        Ok(())
    }

    /// Fetch people for the request and hand the outcome to the widget. The
    /// state lock is not held while the request is in flight.
    ///
    async fn generate(&mut self, widget_id: WidgetId, request: FetchRequest) -> Result<()> {
        let outcome = self.random_user.people(&request).await;
        match &outcome {
            Ok(people) => info!(
                "Generated {} people for widget {}.",
                people.len(),
                widget_id
            ),
            Err(e) => warn!("Generation for widget {} failed: {}", widget_id, e),
        }
        let mut state = self.state.lock().await;
        if let Err(e) = state.apply_generated(widget_id, outcome) {
            debug!("Discarding generation result: {}", e);
        }
        Ok(())
    }
}
