//! Normalized postal address as the hub sends it.

use serde::{Deserialize, Serialize};

/// A postal address in the hub's canonical schema.
///
/// Field names match the hub's JSON (`firstname`, `address1`, `zipcode`, ...).
/// Everything is optional at the type level; the address mapper rejects
/// addresses missing the fields ShipStation requires (street1, city, state,
/// postal code, country, and a derivable full name) before any remote call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizedAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,
}

impl NormalizedAddress {
    /// Full name as ShipStation expects it: `"{firstname} {lastname}"`,
    /// with either half omitted when absent.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.firstname.as_deref(), self.lastname.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_first_and_last() {
        let addr = NormalizedAddress {
            firstname: Some("Bruno".to_string()),
            lastname: Some("Buccolo".to_string()),
            ..Default::default()
        };
        assert_eq!(addr.full_name(), "Bruno Buccolo");
    }

    #[test]
    fn test_full_name_with_missing_half() {
        let addr = NormalizedAddress {
            firstname: Some("Cher".to_string()),
            ..Default::default()
        };
        assert_eq!(addr.full_name(), "Cher");

        let addr = NormalizedAddress {
            lastname: Some("Buccolo".to_string()),
            ..Default::default()
        };
        assert_eq!(addr.full_name(), "Buccolo");
    }

    #[test]
    fn test_full_name_empty_when_unset() {
        assert_eq!(NormalizedAddress::default().full_name(), "");
    }

    #[test]
    fn test_deserialize_hub_json() {
        let addr: NormalizedAddress = serde_json::from_str(
            r#"{
                "firstname": "Bruno",
                "lastname": "Buccolo",
                "address1": "Rua Canario, 183",
                "address2": "",
                "zipcode": "01155-030",
                "city": "São Paulo",
                "state": "SP",
                "country": "BR",
                "phone": "5511955111091"
            }"#,
        )
        .expect("valid address json");

        assert_eq!(addr.city.as_deref(), Some("São Paulo"));
        assert_eq!(addr.zipcode.as_deref(), Some("01155-030"));
        assert_eq!(addr.address2.as_deref(), Some(""));
        assert!(addr.company.is_none());
    }
}
