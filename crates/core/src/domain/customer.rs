// Customer Demographics Domain Model

use super::error::Result;
use super::user::UserId;
use super::validate::{self, MAX_NAME_LEN};
use super::RowId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RowId,
    pub user_id: UserId,
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub city: Option<String>,
}

impl Customer {
    pub fn profile(&self) -> CustomerProfile {
        CustomerProfile {
            gender: self.gender.clone(),
            age_group: self.age_group.clone(),
            city: self.city.clone(),
        }
    }
}

/// The demographic attributes of a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub city: Option<String>,
}

impl NewCustomer {
    pub fn new(gender: Option<&str>, age_group: Option<&str>, city: Option<&str>) -> Result<Self> {
        Ok(Self {
            gender: validate::optional_text("gender", gender, MAX_NAME_LEN)?,
            age_group: validate::optional_text("age_group", age_group, MAX_NAME_LEN)?,
            city: validate::optional_text("city", city, MAX_NAME_LEN)?,
        })
    }
}

/// Customer counts per attribute value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub total_customers: usize,
    pub by_gender: BTreeMap<String, u64>,
    pub by_age_group: BTreeMap<String, u64>,
    pub by_city: BTreeMap<String, u64>,
}

impl Demographics {
    /// Count attribute values; missing or blank values are skipped
    pub fn from_profiles<'a>(profiles: impl IntoIterator<Item = &'a CustomerProfile>) -> Self {
        fn bump(map: &mut BTreeMap<String, u64>, value: &Option<String>) {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                *map.entry(v.to_string()).or_insert(0) += 1;
            }
        }

        let mut demographics = Demographics::default();
        for profile in profiles {
            demographics.total_customers += 1;
            bump(&mut demographics.by_gender, &profile.gender);
            bump(&mut demographics.by_age_group, &profile.age_group);
            bump(&mut demographics.by_city, &profile.city);
        }
        demographics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(
        gender: Option<&str>,
        age_group: Option<&str>,
        city: Option<&str>,
    ) -> CustomerProfile {
        CustomerProfile {
            gender: gender.map(String::from),
            age_group: age_group.map(String::from),
            city: city.map(String::from),
        }
    }

    #[test]
    fn test_demographics_counts() {
        let profiles = vec![
            profile(Some("F"), Some("18-25"), Some("Beograd")),
            profile(Some("M"), Some("18-25"), Some("Novi Sad")),
            profile(Some("F"), None, Some("Beograd")),
            profile(Some(" "), Some("40+"), None),
        ];

        let d = Demographics::from_profiles(&profiles);
        assert_eq!(d.total_customers, 4);
        assert_eq!(d.by_gender.get("F"), Some(&2));
        assert_eq!(d.by_gender.get("M"), Some(&1));
        assert_eq!(d.by_gender.len(), 2);
        assert_eq!(d.by_age_group.get("18-25"), Some(&2));
        assert_eq!(d.by_city.get("Beograd"), Some(&2));
        assert_eq!(d.by_city.keys().collect::<Vec<_>>(), vec!["Beograd", "Novi Sad"]);
    }

    #[test]
    fn test_new_customer_blank_fields() {
        let c = NewCustomer::new(Some(""), None, Some(" Niš ")).unwrap();
        assert_eq!(c.gender, None);
        assert_eq!(c.city.as_deref(), Some("Niš"));
    }
}
