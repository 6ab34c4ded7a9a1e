//! Load Search - Filtering and ordering of the load board

use serde::{Deserialize, Serialize};

use crate::domain::entities::Load;

/// Search criteria. Every unset criterion matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoadSearchCriteria {
    /// Case-insensitive exact match
    pub equipment_type: Option<String>,
    /// Case-insensitive substring of the origin
    pub origin: Option<String>,
    /// Case-insensitive substring of the destination
    pub destination: Option<String>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    pub max_miles: Option<f64>,
    /// Case-insensitive substring of the commodity
    pub commodity: Option<String>,
}

impl LoadSearchCriteria {
    /// Whether the load's attributes satisfy every set criterion.
    /// Status is not considered here.
    pub fn matches(&self, load: &Load) -> bool {
        if let Some(equipment) = &self.equipment_type {
            if !load.equipment_type.eq_ignore_ascii_case(equipment) {
                return false;
            }
        }
        if !contains_ci(&load.origin, self.origin.as_deref()) {
            return false;
        }
        if !contains_ci(&load.destination, self.destination.as_deref()) {
            return false;
        }
        if matches!(self.min_rate, Some(min) if load.loadboard_rate < min) {
            return false;
        }
        if matches!(self.max_rate, Some(max) if load.loadboard_rate > max) {
            return false;
        }
        if matches!(self.max_miles, Some(max) if f64::from(load.miles) > max) {
            return false;
        }
        contains_ci(&load.commodity_type, self.commodity.as_deref())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Available loads matching the criteria, highest loadboard rate first.
/// Equal rates keep catalog order.
pub fn search_available(loads: Vec<Load>, criteria: &LoadSearchCriteria) -> Vec<Load> {
    let mut matching: Vec<Load> = loads
        .into_iter()
        .filter(|load| load.is_available() && criteria.matches(load))
        .collect();

    // sort_by is stable
    matching.sort_by(|a, b| b.loadboard_rate.total_cmp(&a.loadboard_rate));

    tracing::debug!(count = matching.len(), "Load search evaluated");
    matching
}

/// Loads in any status matching the criteria, in catalog order
pub fn filter_catalog(loads: Vec<Load>, criteria: &LoadSearchCriteria) -> Vec<Load> {
    loads
        .into_iter()
        .filter(|load| criteria.matches(load))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures::load;
    use crate::domain::LoadStatus;

    fn board() -> Vec<Load> {
        let mut l1 = load("L001", 1500.0);
        l1.origin = "Dallas, TX".to_string();
        l1.equipment_type = "Flatbed".to_string();
        l1.miles = 240;

        let mut l2 = load("L002", 1200.0);
        l2.origin = "Chicago, IL".to_string();
        l2.destination = "Detroit, MI".to_string();
        l2.equipment_type = "Reefer".to_string();
        l2.commodity_type = "Food".to_string();
        l2.miles = 280;

        let mut l3 = load("L003", 800.0);
        l3.origin = "Los Angeles, CA".to_string();
        l3.equipment_type = "Dry Van".to_string();
        l3.commodity_type = "Electronics".to_string();
        l3.miles = 370;

        let mut l4 = load("L004", 1100.0);
        l4.origin = "Miami, FL".to_string();
        l4.equipment_type = "Flatbed".to_string();
        l4.miles = 660;

        vec![l1, l2, l3, l4]
    }

    fn ids(loads: &[Load]) -> Vec<&str> {
        loads.iter().map(|l| l.load_id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_sorted_by_rate_desc() {
        let result = search_available(board(), &LoadSearchCriteria::default());
        assert_eq!(ids(&result), vec!["L001", "L002", "L004", "L003"]);
    }

    #[test]
    fn test_equipment_is_case_insensitive_exact() {
        let criteria = LoadSearchCriteria {
            equipment_type: Some("flatbed".to_string()),
            ..Default::default()
        };
        let result = search_available(board(), &criteria);
        assert_eq!(ids(&result), vec!["L001", "L004"]);

        let partial = LoadSearchCriteria {
            equipment_type: Some("flat".to_string()),
            ..Default::default()
        };
        assert!(search_available(board(), &partial).is_empty());
    }

    #[test]
    fn test_origin_substring_and_max_miles() {
        let criteria = LoadSearchCriteria {
            origin: Some("dallas".to_string()),
            max_miles: Some(500.0),
            ..Default::default()
        };
        assert_eq!(ids(&search_available(board(), &criteria)), vec!["L001"]);
    }

    #[test]
    fn test_rate_bounds_are_inclusive() {
        let criteria = LoadSearchCriteria {
            min_rate: Some(1100.0),
            max_rate: Some(1200.0),
            ..Default::default()
        };
        assert_eq!(ids(&search_available(board(), &criteria)), vec!["L002", "L004"]);
    }

    #[test]
    fn test_never_returns_above_max_rate_or_unavailable() {
        let mut loads = board();
        loads[1].status = LoadStatus::Booked;
        loads[3].status = LoadStatus::Negotiated;

        for max in [0.0, 799.0, 800.0, 1199.0, 1500.0, 10_000.0] {
            let criteria = LoadSearchCriteria {
                max_rate: Some(max),
                ..Default::default()
            };
            let result = search_available(loads.clone(), &criteria);
            assert!(result
                .iter()
                .all(|l| l.loadboard_rate <= max && l.status == LoadStatus::Available));
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let loads = vec![
            load("A", 900.0),
            load("B", 1000.0),
            load("C", 900.0),
            load("D", 1000.0),
            load("E", 900.0),
        ];
        let result = search_available(loads, &LoadSearchCriteria::default());
        assert_eq!(ids(&result), vec!["B", "D", "A", "C", "E"]);
    }

    #[test]
    fn test_commodity_and_destination_substrings() {
        let criteria = LoadSearchCriteria {
            destination: Some("DETROIT".to_string()),
            commodity: Some("foo".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search_available(board(), &criteria)), vec!["L002"]);
    }

    #[test]
    fn test_filter_catalog_keeps_status_and_order() {
        let mut loads = board();
        loads[0].status = LoadStatus::Booked;
        let criteria = LoadSearchCriteria {
            equipment_type: Some("Flatbed".to_string()),
            ..Default::default()
        };
        let result = filter_catalog(loads, &criteria);
        assert_eq!(ids(&result), vec!["L001", "L004"]);
    }
}
