//! Address conversion functions.

use shipstation_endpoint_core::NormalizedAddress;

use crate::shipstation::{RemoteAddress, ShipStationError};

/// Convert a normalized address into ShipStation's schema.
///
/// ShipStation rejects orders missing name, street1, city, state, postal
/// code, or country, so absence of any of those is refused here, before
/// anything goes on the wire. Whitespace-only values count as absent.
///
/// # Errors
///
/// Returns a validation error naming the missing field.
pub fn to_remote(addr: &NormalizedAddress) -> Result<RemoteAddress, ShipStationError> {
    let name = addr.full_name();
    if name.trim().is_empty() {
        return Err(ShipStationError::MissingField("address.name".to_string()));
    }

    Ok(RemoteAddress {
        name,
        company: addr.company.clone(),
        street1: require(addr.address1.as_deref(), "address1")?,
        street2: addr.address2.clone().filter(|s| !s.trim().is_empty()),
        street3: addr.address3.clone().filter(|s| !s.trim().is_empty()),
        city: require(addr.city.as_deref(), "city")?,
        state: require(addr.state.as_deref(), "state")?,
        postal_code: require(addr.zipcode.as_deref(), "zipcode")?,
        country: require(addr.country.as_deref(), "country")?,
        phone: addr.phone.clone(),
        residential: addr.residential,
    })
}

/// Convert a ShipStation address back into the hub's schema.
///
/// The remote side stores one flat name, so the split is lossy by policy:
/// first whitespace token becomes the first name, last token the last name,
/// middle tokens are dropped.
#[must_use]
pub fn from_remote(addr: &RemoteAddress) -> NormalizedAddress {
    let mut tokens = addr.name.split_whitespace();
    let firstname = tokens.next().map(str::to_string);
    let lastname = tokens.next_back().map(str::to_string);

    NormalizedAddress {
        firstname,
        lastname,
        address1: Some(addr.street1.clone()),
        address2: addr.street2.clone(),
        address3: addr.street3.clone(),
        city: Some(addr.city.clone()),
        state: Some(addr.state.clone()),
        zipcode: Some(addr.postal_code.clone()),
        country: Some(addr.country.clone()),
        phone: addr.phone.clone(),
        company: addr.company.clone(),
        residential: addr.residential,
    }
}

fn require(value: Option<&str>, field: &str) -> Result<String, ShipStationError> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ShipStationError::MissingField(format!("address.{field}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_address() -> NormalizedAddress {
        NormalizedAddress {
            firstname: Some("Bruno".to_string()),
            lastname: Some("Buccolo".to_string()),
            address1: Some("Rua Canario, 183".to_string()),
            address2: Some("".to_string()),
            city: Some("São Paulo".to_string()),
            state: Some("SP".to_string()),
            zipcode: Some("01155-030".to_string()),
            country: Some("BR".to_string()),
            phone: Some("5511955111091".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_to_remote_maps_required_fields() {
        let remote = to_remote(&full_address()).expect("valid address");
        assert_eq!(remote.name, "Bruno Buccolo");
        assert_eq!(remote.street1, "Rua Canario, 183");
        assert_eq!(remote.postal_code, "01155-030");
        assert_eq!(remote.country, "BR");
        // Empty street2 is dropped, not sent as "".
        assert_eq!(remote.street2, None);
    }

    #[test]
    fn test_to_remote_rejects_missing_required_fields() {
        let mut addr = full_address();
        addr.city = None;
        let err = to_remote(&addr).expect_err("city is required");
        assert_eq!(err.to_string(), "missing required field: address.city");

        let mut addr = full_address();
        addr.zipcode = Some("   ".to_string());
        let err = to_remote(&addr).expect_err("blank zipcode is absent");
        assert_eq!(err.to_string(), "missing required field: address.zipcode");
    }

    #[test]
    fn test_to_remote_rejects_empty_address() {
        let err = to_remote(&NormalizedAddress::default()).expect_err("empty address");
        assert_eq!(err.to_string(), "missing required field: address.name");
    }

    #[test]
    fn test_round_trip_recovers_postal_fields_exactly() {
        let addr = full_address();
        let back = from_remote(&to_remote(&addr).expect("valid address"));
        assert_eq!(back.address1, addr.address1);
        assert_eq!(back.city, addr.city);
        assert_eq!(back.state, addr.state);
        assert_eq!(back.zipcode, addr.zipcode);
        assert_eq!(back.country, addr.country);
        assert_eq!(back.firstname, addr.firstname);
        assert_eq!(back.lastname, addr.lastname);
    }

    #[test]
    fn test_name_split_drops_middle_tokens() {
        // Splitting a flat name is lossy on purpose: first token, last
        // token, nothing in between survives the round trip.
        let remote = RemoteAddress {
            name: "Maria da Silva Santos".to_string(),
            ..minimal_remote()
        };
        let back = from_remote(&remote);
        assert_eq!(back.firstname.as_deref(), Some("Maria"));
        assert_eq!(back.lastname.as_deref(), Some("Santos"));
    }

    #[test]
    fn test_name_split_single_token() {
        let remote = RemoteAddress {
            name: "Cher".to_string(),
            ..minimal_remote()
        };
        let back = from_remote(&remote);
        assert_eq!(back.firstname.as_deref(), Some("Cher"));
        assert_eq!(back.lastname, None);
    }

    fn minimal_remote() -> RemoteAddress {
        RemoteAddress {
            name: "A B".to_string(),
            company: None,
            street1: "1 Main St".to_string(),
            street2: None,
            street3: None,
            city: "Austin".to_string(),
            state: "TX".to_string(),
            postal_code: "78701".to_string(),
            country: "US".to_string(),
            phone: None,
            residential: None,
        }
    }
}
