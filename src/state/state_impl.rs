use super::error::StateError;
use super::form::{FormState, WidgetId};
use crate::app::NetworkEventSender;
use crate::catalog;
use crate::config::MountSpec;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::randomuser::{GeneratedPerson, RandomUserError};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;

/// Houses data representative of application state: every mounted widget
/// instance plus the chrome around them.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    widgets: Vec<FormState>,
    active_widget: usize,
    next_widget_id: WidgetId,
    spinner_index: usize,
    log_buffer: LogBuffer,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            widgets: vec![],
            active_widget: 0,
            next_widget_id: 0,
            spinner_index: 0,
            log_buffer: LogBuffer::default(),
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new state with the network sender, log buffer and theme.
    ///
    pub fn new(net_sender: NetworkEventSender, log_buffer: LogBuffer, theme: Theme) -> Self {
        State {
            net_sender: Some(net_sender),
            log_buffer,
            theme,
            ..State::default()
        }
    }

    /// Mount a new widget instance from a mount point and make it active.
    /// Returns the id of the new instance.
    ///
    pub fn mount(&mut self, spec: &MountSpec) -> WidgetId {
        let id = self.next_widget_id;
        self.next_widget_id += 1;
        let country = spec
            .country
            .as_deref()
            .unwrap_or(catalog::default_country().code);
        let form = match spec.quantity {
            Some(quantity) => FormState::restore(id, country, quantity),
            None => {
                let mut form = FormState::new(id);
                if !form.select_country(country) {
                    warn!(
                        "Ignoring unknown country '{}' for widget {}, keeping {}",
                        country,
                        id,
                        form.country()
                    );
                }
                form
            }
        };
        debug!(
            "Mounted widget {} (country {}, quantity {})",
            id,
            form.country(),
            form.quantity()
        );
        self.widgets.push(form);
        self.active_widget = self.widgets.len() - 1;
        id
    }

    /// Unmount the active widget. A fetch still in flight for it is dropped
    /// when it completes.
    ///
    pub fn unmount_active(&mut self) -> Result<WidgetId, StateError> {
        if self.widgets.is_empty() {
            return Err(StateError::NoWidgetMounted);
        }
        let form = self.widgets.remove(self.active_widget);
        if self.active_widget >= self.widgets.len() {
            self.active_widget = self.widgets.len().saturating_sub(1);
        }
        debug!("Unmounted widget {}", form.id());
        Ok(form.id())
    }

    pub fn widgets(&self) -> &[FormState] {
        &self.widgets
    }

    pub fn active_widget_index(&self) -> usize {
        self.active_widget
    }

    pub fn active_widget(&self) -> Option<&FormState> {
        self.widgets.get(self.active_widget)
    }

    pub fn active_widget_mut(&mut self) -> Option<&mut FormState> {
        self.widgets.get_mut(self.active_widget)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&FormState> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    fn widget_mut(&mut self, id: WidgetId) -> Option<&mut FormState> {
        self.widgets.iter_mut().find(|w| w.id() == id)
    }

    /// Activate the next widget, wrapping.
    ///
    pub fn next_widget(&mut self) {
        if !self.widgets.is_empty() {
            self.active_widget = (self.active_widget + 1) % self.widgets.len();
        }
    }

    /// Activate the previous widget, wrapping.
    ///
    pub fn previous_widget(&mut self) {
        if !self.widgets.is_empty() {
            self.active_widget = self
                .active_widget
                .checked_sub(1)
                .unwrap_or(self.widgets.len() - 1);
        }
    }

    /// Submit the active widget's form. Loading is set before the request is
    /// queued for the network thread. Returns whether a request was queued.
    ///
    pub fn submit_active(&mut self) -> Result<bool, StateError> {
        let form = self
            .widgets
            .get_mut(self.active_widget)
            .ok_or(StateError::NoWidgetMounted)?;
        let request = match form.begin_submit() {
            Some(request) => request,
            None => return Ok(false),
        };
        let widget_id = form.id();
        info!(
            "Generating {} people for '{}' in widget {}...",
            request.count, request.nationality, widget_id
        );
        let sent = match &self.net_sender {
            Some(sender) => sender
                .send(NetworkEvent::Generate { widget_id, request })
                .is_ok(),
            None => false,
        };
        if !sent {
            error!("Network worker unavailable, abandoning submit for widget {}", widget_id);
            form.abort_submit("API error: network worker unavailable".to_string());
        }
        Ok(sent)
    }

    /// Apply a fetch outcome to the widget that requested it. Outcomes for
    /// widgets that are no longer mounted are dropped.
    ///
    pub fn apply_generated(
        &mut self,
        widget_id: WidgetId,
        outcome: Result<Vec<GeneratedPerson>, RandomUserError>,
    ) -> Result<(), StateError> {
        match self.widget_mut(widget_id) {
            Some(form) => {
                form.finish_submit(outcome);
                Ok(())
            }
            None => {
                debug!("Dropping result for unmounted widget {}", widget_id);
                Err(StateError::WidgetNotFound { id: widget_id })
            }
        }
    }

    /// Advance the spinner frame.
    ///
    pub fn advance_spinner_index(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ResultArea, VALIDATION_MESSAGE};
    use std::sync::mpsc;

    fn state_with_channel() -> (State, mpsc::Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        (State::new(tx, LogBuffer::default(), Theme::default()), rx)
    }

    fn mount_us(state: &mut State, quantity: i64) -> WidgetId {
        state.mount(&MountSpec {
            country: Some("US".to_string()),
            quantity: Some(quantity),
        })
    }

    #[test]
    fn test_mount_assigns_unique_ids() {
        let (mut state, _rx) = state_with_channel();
        let first = state.mount(&MountSpec::default());
        let second = mount_us(&mut state, 3);
        assert_ne!(first, second);
        assert_eq!(state.widgets().len(), 2);
        assert_eq!(state.active_widget().map(|w| w.id()), Some(second));
        assert_eq!(state.widget(first).map(|w| w.country()), Some("AU"));
    }

    #[test]
    fn test_mount_with_unknown_country_keeps_default() {
        let (mut state, _rx) = state_with_channel();
        let id = state.mount(&MountSpec {
            country: Some("XX".to_string()),
            quantity: None,
        });
        assert_eq!(state.widget(id).map(|w| w.country()), Some("AU"));
    }

    #[test]
    fn test_submit_queues_request() {
        let (mut state, rx) = state_with_channel();
        let id = mount_us(&mut state, 2);

        assert!(state.submit_active().unwrap());
        assert!(state.active_widget().unwrap().is_loading());
        match rx.try_recv().unwrap() {
            NetworkEvent::Generate { widget_id, request } => {
                assert_eq!(widget_id, id);
                assert_eq!(request.nationality, "us");
                assert_eq!(request.count, 2);
            }
        }
    }

    #[test]
    fn test_submit_with_zero_quantity_sends_nothing() {
        let (mut state, rx) = state_with_channel();
        mount_us(&mut state, 0);

        assert!(!state.submit_active().unwrap());
        assert!(rx.try_recv().is_err());
        let form = state.active_widget().unwrap();
        assert_eq!(form.error(), Some(VALIDATION_MESSAGE));
        assert!(form.people().is_empty());
    }

    #[test]
    fn test_submit_while_loading_sends_once() {
        let (mut state, rx) = state_with_channel();
        mount_us(&mut state, 1);

        assert!(state.submit_active().unwrap());
        assert!(!state.submit_active().unwrap());
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn test_submit_without_worker_settles_widget() {
        let mut state = State::default();
        state.mount(&MountSpec::default());

        assert!(!state.submit_active().unwrap());
        let form = state.active_widget().unwrap();
        assert!(!form.is_loading());
        assert!(form.error().unwrap().starts_with("API error"));
    }

    #[test]
    fn test_submit_without_widgets_is_an_error() {
        let (mut state, _rx) = state_with_channel();
        assert!(matches!(
            state.submit_active(),
            Err(StateError::NoWidgetMounted)
        ));
    }

    #[test]
    fn test_widgets_have_isolated_state() {
        let (mut state, _rx) = state_with_channel();
        let first = mount_us(&mut state, 1);
        let second = mount_us(&mut state, 1);

        state.submit_active().unwrap();
        state
            .apply_generated(second, Err(RandomUserError::ApiError { status: 500 }))
            .unwrap();

        assert_eq!(state.widget(first).unwrap().result(), &ResultArea::Idle);
        assert_eq!(
            state.widget(second).unwrap().error(),
            Some("API error: 500")
        );
    }

    #[test]
    fn test_result_for_unmounted_widget_is_dropped() {
        let (mut state, _rx) = state_with_channel();
        let id = mount_us(&mut state, 1);
        state.submit_active().unwrap();
        assert_eq!(state.unmount_active().unwrap(), id);

        let outcome = state.apply_generated(id, Ok(vec![]));
        assert!(matches!(outcome, Err(StateError::WidgetNotFound { .. })));
        assert!(state.widgets().is_empty());
    }

    #[test]
    fn test_widget_navigation_wraps() {
        let (mut state, _rx) = state_with_channel();
        state.mount(&MountSpec::default());
        state.mount(&MountSpec::default());
        state.mount(&MountSpec::default());
        assert_eq!(state.active_widget_index(), 2);

        state.next_widget();
        assert_eq!(state.active_widget_index(), 0);
        state.previous_widget();
        assert_eq!(state.active_widget_index(), 2);

        state.unmount_active().unwrap();
        assert_eq!(state.active_widget_index(), 1);
    }

    #[test]
    fn test_unmount_without_widgets() {
        let (mut state, _rx) = state_with_channel();
        assert!(matches!(
            state.unmount_active(),
            Err(StateError::NoWidgetMounted)
        ));
    }

    #[test]
    fn test_spinner_wraps() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.get_spinner_index(), 0);
    }
}
