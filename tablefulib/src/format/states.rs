//! US state names, postal codes, FIPS codes and AP abbreviations.

use crate::data::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct State {
    pub name: &'static str,
    pub postal: &'static str,
    pub fips: u8,
    pub ap: &'static str,
}

const fn state(name: &'static str, postal: &'static str, fips: u8, ap: &'static str) -> State {
    State {
        name,
        postal,
        fips,
        ap,
    }
}

const STATES: &[State] = &[
    state("Alabama", "AL", 1, "Ala."),
    state("Alaska", "AK", 2, "Alaska"),
    state("Arizona", "AZ", 4, "Ariz."),
    state("Arkansas", "AR", 5, "Ark."),
    state("California", "CA", 6, "Calif."),
    state("Colorado", "CO", 8, "Colo."),
    state("Connecticut", "CT", 9, "Conn."),
    state("Delaware", "DE", 10, "Del."),
    state("District of Columbia", "DC", 11, "D.C."),
    state("Florida", "FL", 12, "Fla."),
    state("Georgia", "GA", 13, "Ga."),
    state("Hawaii", "HI", 15, "Hawaii"),
    state("Idaho", "ID", 16, "Idaho"),
    state("Illinois", "IL", 17, "Ill."),
    state("Indiana", "IN", 18, "Ind."),
    state("Iowa", "IA", 19, "Iowa"),
    state("Kansas", "KS", 20, "Kan."),
    state("Kentucky", "KY", 21, "Ky."),
    state("Louisiana", "LA", 22, "La."),
    state("Maine", "ME", 23, "Maine"),
    state("Maryland", "MD", 24, "Md."),
    state("Massachusetts", "MA", 25, "Mass."),
    state("Michigan", "MI", 26, "Mich."),
    state("Minnesota", "MN", 27, "Minn."),
    state("Mississippi", "MS", 28, "Miss."),
    state("Missouri", "MO", 29, "Mo."),
    state("Montana", "MT", 30, "Mont."),
    state("Nebraska", "NE", 31, "Neb."),
    state("Nevada", "NV", 32, "Nev."),
    state("New Hampshire", "NH", 33, "N.H."),
    state("New Jersey", "NJ", 34, "N.J."),
    state("New Mexico", "NM", 35, "N.M."),
    state("New York", "NY", 36, "N.Y."),
    state("North Carolina", "NC", 37, "N.C."),
    state("North Dakota", "ND", 38, "N.D."),
    state("Ohio", "OH", 39, "Ohio"),
    state("Oklahoma", "OK", 40, "Okla."),
    state("Oregon", "OR", 41, "Ore."),
    state("Pennsylvania", "PA", 42, "Pa."),
    state("Rhode Island", "RI", 44, "R.I."),
    state("South Carolina", "SC", 45, "S.C."),
    state("South Dakota", "SD", 46, "S.D."),
    state("Tennessee", "TN", 47, "Tenn."),
    state("Texas", "TX", 48, "Texas"),
    state("Utah", "UT", 49, "Utah"),
    state("Vermont", "VT", 50, "Vt."),
    state("Virginia", "VA", 51, "Va."),
    state("Washington", "WA", 53, "Wash."),
    state("West Virginia", "WV", 54, "W.Va."),
    state("Wisconsin", "WI", 55, "Wis."),
    state("Wyoming", "WY", 56, "Wyo."),
];

/// Find a state by postal code, FIPS code, full name or AP abbreviation.
pub(crate) fn lookup(value: &Value) -> Option<&'static State> {
    if let Value::Int(fips) = value {
        return STATES.iter().find(|s| i64::from(s.fips) == *fips);
    }

    let key = value.as_str()?.trim();
    if key.is_empty() {
        return None;
    }
    if let Ok(fips) = key.parse::<u8>() {
        return STATES.iter().find(|s| s.fips == fips);
    }

    STATES.iter().find(|s| {
        s.postal.eq_ignore_ascii_case(key)
            || s.name.eq_ignore_ascii_case(key)
            || s.ap.eq_ignore_ascii_case(key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_each_key() {
        let by_name = lookup(&Value::from("california")).unwrap();
        let by_postal = lookup(&Value::from("CA")).unwrap();
        let by_fips = lookup(&Value::Int(6)).unwrap();
        let by_padded_fips = lookup(&Value::from("06")).unwrap();
        let by_ap = lookup(&Value::from("Calif.")).unwrap();

        for found in [by_postal, by_fips, by_padded_fips, by_ap] {
            assert_eq!(found, by_name);
        }
        assert_eq!(by_name.ap, "Calif.");
    }

    #[test]
    fn test_lookup_misses() {
        assert!(lookup(&Value::from("foo")).is_none());
        assert!(lookup(&Value::from("")).is_none());
        assert!(lookup(&Value::Int(3)).is_none());
        assert!(lookup(&Value::Bool(true)).is_none());
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(STATES.len(), 51);
    }
}
