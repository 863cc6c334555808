//! Form state for one widget instance.
//!
//! This module contains the per-instance form data and every operation that
//! mutates it: country selection, quantity editing, submission and the
//! application of a fetch outcome.

use super::navigation::Field;
use crate::catalog;
use crate::randomuser::{FetchRequest, GeneratedPerson, RandomUserError, NO_USERS_MESSAGE};
use log::*;

pub const MIN_QUANTITY: i64 = 1;
pub const MAX_QUANTITY: i64 = 20;

/// Shown when a submission is attempted with a quantity below the minimum.
///
pub const VALIDATION_MESSAGE: &str = "Please enter a number greater than 0.";

/// Identifies a widget instance for the lifetime of the process.
///
pub type WidgetId = u64;

/// Specifying what the result area currently shows. Only one can hold, so a
/// pending request never coexists with an error or a list.
///
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ResultArea {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(Vec<GeneratedPerson>),
}

/// Clamp a quantity into the accepted range.
///
pub fn clamp_quantity(value: i64) -> i64 {
    value.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

/// Parse raw field text as a quantity. Returns `None` for non-numeric text.
/// Fractions truncate toward zero.
///
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // `as` saturates for out-of-range floats
    Some(value.trunc() as i64)
}

/// Houses the transient data of one widget instance.
///
#[derive(Clone, Debug)]
pub struct FormState {
    id: WidgetId,
    country: &'static str,
    quantity: i64,
    quantity_input: String,
    focus: Field,
    result: ResultArea,
}

impl FormState {
    /// Return a new instance with the default country and a quantity of one.
    ///
    pub fn new(id: WidgetId) -> Self {
        FormState {
            id,
            country: catalog::default_country().code,
            quantity: MIN_QUANTITY,
            quantity_input: MIN_QUANTITY.to_string(),
            focus: Field::Country,
            result: ResultArea::Idle,
        }
    }

    /// Return an instance with restored values. The quantity is taken as-is,
    /// so out-of-range values are only caught when the form is submitted.
    ///
    pub fn restore(id: WidgetId, country: &str, quantity: i64) -> Self {
        let mut form = FormState::new(id);
        if !form.select_country(country) {
            warn!(
                "Ignoring unknown country '{}' for widget {}, keeping {}",
                country, id, form.country
            );
        }
        form.quantity = quantity;
        form.quantity_input = quantity.to_string();
        form
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn country(&self) -> &'static str {
        self.country
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn quantity_input(&self) -> &str {
        &self.quantity_input
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn result(&self) -> &ResultArea {
        &self.result
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.result, ResultArea::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.result {
            ResultArea::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// People currently displayed; empty unless the last fetch succeeded.
    ///
    pub fn people(&self) -> &[GeneratedPerson] {
        match &self.result {
            ResultArea::Ready(people) => people,
            _ => &[],
        }
    }

    /// Select a catalog country. Returns false and leaves the selection
    /// unchanged when the code is not in the catalog.
    ///
    pub fn select_country(&mut self, code: &str) -> bool {
        match catalog::find(code) {
            Some(country) => {
                self.country = country.code;
                true
            }
            None => false,
        }
    }

    /// Move the selection `step` places through the catalog.
    ///
    pub fn cycle_country(&mut self, step: isize) {
        self.country = catalog::cycle(self.country, step);
    }

    /// Apply raw quantity text. Numeric text is clamped immediately,
    /// non-numeric text is ignored. An empty field is shown empty while the
    /// quantity keeps its last value.
    ///
    pub fn edit_quantity(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            self.quantity_input.clear();
            return;
        }
        match parse_quantity(raw) {
            Some(value) => {
                self.quantity = clamp_quantity(value);
                self.quantity_input = self.quantity.to_string();
            }
            None => trace!("Ignoring non-numeric quantity input '{}'", raw),
        }
    }

    /// Append a typed character to the quantity field.
    ///
    pub fn push_quantity_char(&mut self, c: char) {
        let candidate = format!("{}{}", self.quantity_input, c);
        self.edit_quantity(&candidate);
    }

    /// Remove the last character of the quantity field.
    ///
    pub fn pop_quantity_char(&mut self) {
        let mut candidate = self.quantity_input.clone();
        candidate.pop();
        self.edit_quantity(&candidate);
    }

    /// Re-clamp the quantity and resynchronize the field text.
    ///
    pub fn blur_quantity(&mut self) {
        self.quantity = clamp_quantity(self.quantity);
        self.quantity_input = self.quantity.to_string();
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Move focus; leaving the quantity field blurs it.
    ///
    pub fn set_focus(&mut self, field: Field) {
        if self.focus == Field::Quantity && field != Field::Quantity {
            self.blur_quantity();
        }
        self.focus = field;
    }

    /// Start a submission. Returns the request to issue, or `None` when the
    /// trigger is disabled (already loading) or validation failed.
    ///
    pub fn begin_submit(&mut self) -> Option<FetchRequest> {
        if self.is_loading() {
            debug!("Widget {} is already loading, ignoring submit", self.id);
            return None;
        }
        // A cleared field counts as zero
        if self.quantity_input.trim().is_empty() || self.quantity < MIN_QUANTITY {
            info!(
                "Rejecting submit for widget {} with quantity '{}'",
                self.id, self.quantity_input
            );
            self.result = ResultArea::Failed(VALIDATION_MESSAGE.to_string());
            return None;
        }
        self.blur_quantity();
        self.result = ResultArea::Loading;
        let count = u8::try_from(self.quantity).unwrap_or(MAX_QUANTITY as u8);
        Some(FetchRequest::new(self.country, count))
    }

    /// Settle a submission whose request could not be issued.
    ///
    pub fn abort_submit(&mut self, message: String) {
        if self.is_loading() {
            self.result = ResultArea::Failed(message);
        }
    }

    /// Apply the outcome of a fetch started by `begin_submit`. Returns false
    /// when the widget was not waiting for one.
    ///
    pub fn finish_submit(
        &mut self,
        outcome: Result<Vec<GeneratedPerson>, RandomUserError>,
    ) -> bool {
        if !self.is_loading() {
            warn!("Widget {} received a result it did not ask for", self.id);
            return false;
        }
        self.result = match outcome {
            Ok(people) if people.is_empty() => ResultArea::Failed(NO_USERS_MESSAGE.to_string()),
            Ok(people) => ResultArea::Ready(people),
            Err(e) => {
                warn!("Generation failed for widget {}: {}", self.id, e);
                ResultArea::Failed(e.user_message())
            }
        };
        true
    }
}
