use crate::config::MountSpec;
use crate::state::{Field, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => (),
                    Err(e) => error!("Failed to poll terminal events: {}", e),
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => handle_key(state, key),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

/// Apply one key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(true);
    }
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Esc, ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        KeyEvent {
            code: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            let id = state.mount(&MountSpec::default());
            info!("Mounted widget {}.", id);
        }
        KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => match state.unmount_active() {
            Ok(id) => info!("Unmounted widget {}.", id),
            Err(e) => warn!("Nothing to unmount: {}", e),
        },
        KeyEvent {
            code: KeyCode::PageDown,
            ..
        } => state.next_widget(),
        KeyEvent {
            code: KeyCode::PageUp, ..
        } => state.previous_widget(),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => submit(state),
        _ => handle_form_key(state, key),
    }
    Ok(true)
}

/// Route keys that act on the active widget's focused field.
///
fn handle_form_key(state: &mut State, key: KeyEvent) {
    let focus = match state.active_widget() {
        Some(form) => form.focus(),
        None => return,
    };
    if focus == Field::Generate && key.code == KeyCode::Char(' ') {
        submit(state);
        return;
    }
    let form = match state.active_widget_mut() {
        Some(form) => form,
        None => return,
    };
    match (focus, key.code) {
        (_, KeyCode::Tab) | (_, KeyCode::Down) => form.focus_next(),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => form.focus_prev(),
        (Field::Country, KeyCode::Right) | (Field::Country, KeyCode::Char('l')) => {
            form.cycle_country(1)
        }
        (Field::Country, KeyCode::Left) | (Field::Country, KeyCode::Char('h')) => {
            form.cycle_country(-1)
        }
        (Field::Quantity, KeyCode::Char(c)) => form.push_quantity_char(c),
        (Field::Quantity, KeyCode::Backspace) => form.pop_quantity_char(),
        _ => trace!("Unhandled key '{:?}' on {:?}", key.code, focus),
    }
}

fn submit(state: &mut State) {
    if let Err(e) = state.submit_active() {
        warn!("Cannot submit: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::network::Event as NetworkEvent;
    use crate::logger::LogBuffer;
    use crate::ui::Theme;

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn state_with_widget() -> (State, mpsc::Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        let mut state = State::new(tx, LogBuffer::default(), Theme::default());
        state.mount(&MountSpec::default());
        (state, rx)
    }

    #[test]
    fn test_exit_keys() {
        let (mut state, _rx) = state_with_widget();
        assert!(!press(&mut state, KeyCode::Esc));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key(&mut state, ctrl_c).unwrap());
    }

    #[test]
    fn test_country_cycles_when_focused() {
        let (mut state, _rx) = state_with_widget();
        press(&mut state, KeyCode::Right);
        assert_eq!(state.active_widget().unwrap().country(), "BR");
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.active_widget().unwrap().country(), "US");
    }

    #[test]
    fn test_quantity_typing() {
        let (mut state, _rx) = state_with_widget();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.active_widget().unwrap().focus(), Field::Quantity);

        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Char('7'));
        press(&mut state, KeyCode::Char('q'));
        assert_eq!(state.active_widget().unwrap().quantity(), 7);

        press(&mut state, KeyCode::Char('7'));
        assert_eq!(state.active_widget().unwrap().quantity(), 20);
    }

    #[test]
    fn test_enter_submits_active_widget() {
        let (mut state, rx) = state_with_widget();
        assert!(press(&mut state, KeyCode::Enter));
        assert!(state.active_widget().unwrap().is_loading());
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn test_enter_with_cleared_quantity_sends_nothing() {
        let (mut state, rx) = state_with_widget();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Enter);

        assert_eq!(rx.try_iter().count(), 0);
        let form = state.active_widget().unwrap();
        assert_eq!(form.error(), Some(crate::state::VALIDATION_MESSAGE));
        assert!(!form.is_loading());
    }

    #[test]
    fn test_space_on_generate_button_submits() {
        let (mut state, rx) = state_with_widget();
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.active_widget().unwrap().focus(), Field::Generate);
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn test_mount_and_unmount_keys() {
        let (mut state, _rx) = state_with_widget();
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        handle_key(&mut state, ctrl('n')).unwrap();
        assert_eq!(state.widgets().len(), 2);
        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.active_widget_index(), 0);

        handle_key(&mut state, ctrl('x')).unwrap();
        handle_key(&mut state, ctrl('x')).unwrap();
        handle_key(&mut state, ctrl('x')).unwrap();
        assert!(state.widgets().is_empty());
        assert!(press(&mut state, KeyCode::Enter));
    }
}
