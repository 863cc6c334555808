//! Display projection of a widget's result area.
//!
//! Rendering never reads `FormState` fields directly for the result area; it
//! goes through `ResultView`, which is a pure function of the form.

use crate::catalog;
use crate::randomuser::GeneratedPerson;
use crate::state::{FormState, ResultArea};

/// Specifying what the result area of a widget renders.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultView {
    Idle,
    Busy,
    Alert { message: String },
    Listing { heading: String, entries: Vec<String> },
}

impl ResultView {
    /// Project the form's result area.
    ///
    pub fn of(form: &FormState) -> Self {
        match form.result() {
            ResultArea::Idle => ResultView::Idle,
            ResultArea::Loading => ResultView::Busy,
            ResultArea::Failed(message) => ResultView::Alert {
                message: message.clone(),
            },
            ResultArea::Ready(people) => ResultView::Listing {
                heading: heading(people),
                entries: people
                    .iter()
                    .enumerate()
                    .map(|(i, person)| entry(i + 1, person))
                    .collect(),
            },
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ResultView::Busy)
    }

    pub fn alert(&self) -> Option<&str> {
        match self {
            ResultView::Alert { message } => Some(message),
            _ => None,
        }
    }
}

/// Heading naming the country the people were generated for.
///
pub fn heading(people: &[GeneratedPerson]) -> String {
    let name = people
        .first()
        .map(|p| catalog::country_name(&p.nat))
        .unwrap_or(catalog::PLACEHOLDER);
    format!("People from {}", name)
}

/// One numbered list entry.
///
pub fn entry(number: usize, person: &GeneratedPerson) -> String {
    format!(
        "{}. [{}] {}, {} | {} {} | {} | UTC {}h | {} {}",
        number,
        person.nat,
        person.state,
        person.city,
        person.street_name,
        person.street_number,
        person.postcode,
        person.utc_offset,
        catalog::dialing_prefix(&person.nat),
        person.phone,
    )
}
