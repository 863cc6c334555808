//! Wire models for the random user API response.

use super::resource::GeneratedPerson;
use serde::Deserialize;
use std::fmt;

/// Top-level response body. A missing `results` key reads as empty.
///
#[derive(Deserialize, Debug)]
pub(crate) struct ResultsWrapper {
    #[serde(default)]
    pub results: Vec<PersonModel>,
}

/// Scalar the API sends as either a string or a number depending on country.
///
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct PersonModel {
    pub nat: String,
    pub location: LocationModel,
    pub phone: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct LocationModel {
    pub street: StreetModel,
    pub state: String,
    pub city: String,
    pub postcode: Scalar,
    pub timezone: TimezoneModel,
}

#[derive(Deserialize, Debug)]
pub(crate) struct StreetModel {
    pub number: Scalar,
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TimezoneModel {
    pub offset: String,
}

impl From<PersonModel> for GeneratedPerson {
    fn from(model: PersonModel) -> Self {
        let location = model.location;
        GeneratedPerson {
            nat: model.nat,
            street_number: location.street.number.to_string(),
            street_name: location.street.name,
            state: location.state,
            city: location.city,
            postcode: location.postcode.to_string(),
            utc_offset: location.timezone.offset,
            phone: model.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_model_accepts_numeric_fields() {
        let body = json!({
            "results": [{
                "nat": "DE",
                "location": {
                    "street": { "number": 4711, "name": "Bahnhofstraße" },
                    "state": "Bayern",
                    "city": "München",
                    "postcode": 80331,
                    "timezone": { "offset": "+1:00", "description": "Brussels" }
                },
                "phone": "0171-1234567",
                "email": "ignored@example.com"
            }]
        });

        let wrapper: ResultsWrapper = serde_json::from_value(body).unwrap();
        let person: GeneratedPerson = wrapper.results.into_iter().next().unwrap().into();
        assert_eq!(person.street_number, "4711");
        assert_eq!(person.postcode, "80331");
        assert_eq!(person.utc_offset, "+1:00");
    }

    #[test]
    fn test_missing_results_reads_as_empty() {
        let wrapper: ResultsWrapper =
            serde_json::from_value(json!({ "error": "Uh oh" })).unwrap();
        assert!(wrapper.results.is_empty());
    }

    #[test]
    fn test_record_without_location_is_rejected() {
        let body = json!({ "results": [{ "nat": "US", "phone": "555" }] });
        assert!(serde_json::from_value::<ResultsWrapper>(body).is_err());
    }
}
