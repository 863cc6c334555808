//! Compiled-in country catalog.
//!
//! The same table parameterizes outbound requests (nationality code) and
//! resolves display values (country name, dialing prefix) for results.

/// Glyph shown when a nationality code has no catalog entry.
///
pub const PLACEHOLDER: &str = "?";

/// Defines country catalog entry.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub phone_code: &'static str,
}

/// Every selectable country, in display order.
///
pub const COUNTRIES: [Country; 21] = [
    Country { code: "AU", name: "Australia", phone_code: "+61" },
    Country { code: "BR", name: "Brazil", phone_code: "+55" },
    Country { code: "CA", name: "Canada", phone_code: "+1" },
    Country { code: "CH", name: "Switzerland", phone_code: "+41" },
    Country { code: "DE", name: "Germany", phone_code: "+49" },
    Country { code: "DK", name: "Denmark", phone_code: "+45" },
    Country { code: "ES", name: "Spain", phone_code: "+34" },
    Country { code: "FI", name: "Finland", phone_code: "+358" },
    Country { code: "FR", name: "France", phone_code: "+33" },
    Country { code: "GB", name: "United Kingdom", phone_code: "+44" },
    Country { code: "IE", name: "Ireland", phone_code: "+353" },
    Country { code: "IN", name: "India", phone_code: "+91" },
    Country { code: "IR", name: "Iran", phone_code: "+98" },
    Country { code: "MX", name: "Mexico", phone_code: "+52" },
    Country { code: "NL", name: "Netherlands", phone_code: "+31" },
    Country { code: "NO", name: "Norway", phone_code: "+47" },
    Country { code: "NZ", name: "New Zealand", phone_code: "+64" },
    Country { code: "RS", name: "Serbia", phone_code: "+381" },
    Country { code: "TR", name: "Turkey", phone_code: "+90" },
    Country { code: "UA", name: "Ukraine", phone_code: "+380" },
    Country { code: "US", name: "United States", phone_code: "+1" },
];

/// Return the default selection.
///
pub fn default_country() -> &'static Country {
    &COUNTRIES[0]
}

/// Return the catalog entry for the code, ignoring case.
///
pub fn find(code: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// Return the catalog position of the code, ignoring case.
///
pub fn position(code: &str) -> Option<usize> {
    COUNTRIES
        .iter()
        .position(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// Display name for a nationality code, or the placeholder glyph.
///
pub fn country_name(nat: &str) -> &'static str {
    find(nat).map(|c| c.name).unwrap_or(PLACEHOLDER)
}

/// Dialing prefix for a nationality code, or the placeholder glyph.
///
pub fn dialing_prefix(nat: &str) -> &'static str {
    find(nat).map(|c| c.phone_code).unwrap_or(PLACEHOLDER)
}

/// Code of the entry `step` places away from `code`, wrapping at both ends.
/// Unknown codes start from the default selection.
///
pub fn cycle(code: &str, step: isize) -> &'static str {
    let len = COUNTRIES.len() as isize;
    let current = position(code).unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(len);
    COUNTRIES[next as usize].code
}
