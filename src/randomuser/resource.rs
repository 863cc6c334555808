use fake::Dummy;

/// Defines generated person display data.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct GeneratedPerson {
    pub nat: String,
    pub street_number: String,
    pub street_name: String,
    pub state: String,
    pub city: String,
    pub postcode: String,
    pub utc_offset: String,
    pub phone: String,
}

/// Defines one outbound generation request.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub count: u8,
    pub nationality: String,
}

impl FetchRequest {
    /// Return a request for the catalog code; the nationality is sent lowercased.
    ///
    pub fn new(country_code: &str, count: u8) -> Self {
        FetchRequest {
            count,
            nationality: country_code.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_request_lowercases_nationality() {
        let request = FetchRequest::new("GB", 3);
        assert_eq!(request.nationality, "gb");
        assert_eq!(request.count, 3);
    }
}
