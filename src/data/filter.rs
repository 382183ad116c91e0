use std::collections::HashSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Selection predicates: category and sub-category
// ---------------------------------------------------------------------------

/// Distinct categories in first-seen order.
pub fn distinct_categories(dataset: &Dataset) -> Vec<String> {
    first_seen(dataset.iter().map(|r| r.category.as_str()))
}

/// Distinct sub-categories of one category, in first-seen order.
pub fn subcategories_of(dataset: &Dataset, category: &str) -> Vec<String> {
    first_seen(
        dataset
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.sub_category.as_str()),
    )
}

/// Rows whose category equals `category` exactly (case-sensitive).
pub fn filter_by_category(dataset: &Dataset, category: &str) -> Dataset {
    dataset
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

/// Rows whose sub-category is one of `selected`.
///
/// An empty selection means nothing is selected and yields an empty dataset.
pub fn filter_by_subcategories<S: AsRef<str>>(dataset: &Dataset, selected: &[S]) -> Dataset {
    let selected: HashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();
    dataset
        .iter()
        .filter(|r| selected.contains(r.sub_category.as_str()))
        .cloned()
        .collect()
}

/// The initial sub-category selection: the first `n` available, or all of
/// them when fewer exist.
pub fn default_subcategories(available: &[String], n: usize) -> Vec<String> {
    available.iter().take(n).cloned().collect()
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::model::Record;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new("Technology", "Phones", date(2020, 3, 1), 300.0, 45.0),
            Record::new("Furniture", "Chairs", date(2020, 1, 15), 100.0, 20.0),
            Record::new("Furniture", "Tables", date(2020, 2, 10), 50.0, -10.0),
            Record::new("Technology", "Machines", date(2020, 3, 2), 900.0, -60.0),
            Record::new("Furniture", "Chairs", date(2020, 4, 1), 75.0, 5.0),
            Record::new("furniture", "Lamps", date(2020, 4, 2), 10.0, 1.0),
        ])
    }

    #[test]
    fn categories_in_first_seen_order() {
        assert_eq!(
            distinct_categories(&dataset()),
            ["Technology", "Furniture", "furniture"]
        );
    }

    #[test]
    fn subcategories_restricted_to_category() {
        let ds = dataset();
        assert_eq!(subcategories_of(&ds, "Furniture"), ["Chairs", "Tables"]);
        assert_eq!(subcategories_of(&ds, "Technology"), ["Phones", "Machines"]);
        assert!(subcategories_of(&ds, "Office Supplies").is_empty());
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let filtered = filter_by_category(&dataset(), "Furniture");
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.category == "Furniture"));
    }

    #[test]
    fn subcategory_filter_keeps_source_order() {
        let filtered = filter_by_subcategories(&dataset(), &["Chairs", "Phones"]);
        let subs: Vec<&str> = filtered.iter().map(|r| r.sub_category.as_str()).collect();
        assert_eq!(subs, ["Phones", "Chairs", "Chairs"]);
    }

    #[test]
    fn empty_selection_yields_empty_dataset() {
        let none: [&str; 0] = [];
        assert!(filter_by_subcategories(&dataset(), &none).is_empty());
    }

    #[test]
    fn filtering_leaves_source_untouched() {
        let ds = dataset();
        let before = ds.clone();
        let _ = filter_by_category(&ds, "Technology");
        let _ = filter_by_subcategories(&ds, &["Tables".to_string()]);
        assert_eq!(ds, before);
    }

    #[test]
    fn default_selection_takes_first_two() {
        let available = vec!["Chairs".to_string(), "Tables".to_string(), "Lamps".to_string()];
        assert_eq!(default_subcategories(&available, 2), ["Chairs", "Tables"]);
        assert_eq!(default_subcategories(&available[..1], 2), ["Chairs"]);
    }
}
