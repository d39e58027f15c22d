use crate::domain::model::Venue;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BackfillCounts {
    pub updated: usize,
    pub already_set: usize,
}

/// Whether a `city` value counts as present. Absent, `null`, `false`, zero and
/// the empty string do not; anything else does.
pub fn city_is_set(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

/// Assigns `default_city` to every venue whose city is not set, in order.
/// Existing cities are never inspected beyond the presence check.
pub fn backfill_city(venues: &mut [Venue], default_city: &str) -> BackfillCounts {
    let mut counts = BackfillCounts::default();

    for venue in venues.iter_mut() {
        if city_is_set(venue.city()) {
            counts.already_set += 1;
        } else {
            tracing::debug!(
                "Setting city '{}' on venue {}",
                default_city,
                venue.name().unwrap_or("<unnamed>")
            );
            venue.set_city(default_city);
            counts.updated += 1;
        }
    }

    counts
}

pub fn city_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Number of venues per distinct city. Venues without a city are not counted.
pub fn city_distribution(venues: &[Venue]) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for venue in venues {
        if let Some(city) = venue.city().filter(|c| city_is_set(Some(c))) {
            *distribution.entry(city_label(city)).or_insert(0) += 1;
        }
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn venues(value: Value) -> Vec<Venue> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_city_is_set_truthiness() {
        assert!(!city_is_set(None));
        assert!(!city_is_set(Some(&json!(null))));
        assert!(!city_is_set(Some(&json!(""))));
        assert!(!city_is_set(Some(&json!(false))));
        assert!(!city_is_set(Some(&json!(0))));
        assert!(!city_is_set(Some(&json!(0.0))));

        assert!(city_is_set(Some(&json!("Struga"))));
        assert!(city_is_set(Some(&json!(" "))));
        assert!(city_is_set(Some(&json!(true))));
        assert!(city_is_set(Some(&json!(7))));
        assert!(city_is_set(Some(&json!([]))));
        assert!(city_is_set(Some(&json!({}))));
    }

    #[test]
    fn test_backfill_sets_default_only_where_missing() {
        let mut list = venues(json!([
            {"name": "A"},
            {"name": "B", "city": "Struga"},
            {"name": "C", "city": ""},
            {"name": "D", "city": null}
        ]));

        let counts = backfill_city(&mut list, "Ohrid");

        assert_eq!(counts, BackfillCounts { updated: 3, already_set: 1 });
        assert_eq!(list[0].city(), Some(&json!("Ohrid")));
        assert_eq!(list[1].city(), Some(&json!("Struga")));
        assert_eq!(list[2].city(), Some(&json!("Ohrid")));
        assert_eq!(list[3].city(), Some(&json!("Ohrid")));
    }

    #[test]
    fn test_backfill_preserves_other_fields_and_order() {
        let mut list = venues(json!([
            {"id": 2, "name": "Kaneo", "tags": ["church", "lake"], "rating": 4.5},
            {"id": 1, "name": "Bay of Bones", "meta": {"open": true}}
        ]));
        let before = list.clone();

        backfill_city(&mut list, "Ohrid");

        for (after, before) in list.iter().zip(before.iter()) {
            for (key, value) in &before.data {
                assert_eq!(after.data.get(key), Some(value));
            }
            assert_eq!(after.data.len(), before.data.len() + 1);
        }
        assert_eq!(list[0].name(), Some("Kaneo"));
        assert_eq!(list[1].name(), Some("Bay of Bones"));
    }

    #[test]
    fn test_backfill_is_idempotent() {
        let mut list = venues(json!([{"name": "A"}, {"name": "B", "city": "Struga"}]));
        backfill_city(&mut list, "Ohrid");
        let first = list.clone();

        let counts = backfill_city(&mut list, "Ohrid");

        assert_eq!(counts, BackfillCounts { updated: 0, already_set: 2 });
        assert_eq!(list, first);
    }

    #[test]
    fn test_empty_collection() {
        let mut list: Vec<Venue> = Vec::new();
        assert_eq!(backfill_city(&mut list, "Ohrid"), BackfillCounts::default());
        assert!(city_distribution(&list).is_empty());
    }

    #[test]
    fn test_city_distribution() {
        let list = venues(json!([
            {"name": "A", "city": "Ohrid"},
            {"name": "B", "city": "Struga"},
            {"name": "C", "city": "Ohrid"},
            {"name": "D", "city": 5},
            {"name": "E"}
        ]));

        let distribution = city_distribution(&list);

        assert_eq!(distribution.len(), 3);
        assert_eq!(distribution["Ohrid"], 2);
        assert_eq!(distribution["Struga"], 1);
        assert_eq!(distribution["5"], 1);
    }
}
