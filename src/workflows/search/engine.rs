use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::domain::{Property, SearchFilters, SortKey, SortOrder, SortSpec};

/// Filter `properties` with every predicate in `filters`, then order the survivors by `sort`.
///
/// The input is never modified. Listings comparing equal under `sort` keep their input order.
pub fn search(properties: &[Property], filters: &SearchFilters, sort: SortSpec) -> Vec<Property> {
    let mut results: Vec<Property> = properties
        .iter()
        .filter(|property| matches(property, filters))
        .cloned()
        .collect();

    sort_properties(&mut results, sort);
    results
}

/// Conjunction of every search predicate.
pub fn matches(property: &Property, filters: &SearchFilters) -> bool {
    matches_term(property, &filters.search_term)
        && contains_folded(&property.city, &filters.city)
        && contains_folded(&property.state, &filters.state)
        && matches_price(property, filters)
        && property.no_of_rooms >= filters.min_rooms
        && property.max_no_of_guests >= filters.max_guests
        && matches_amenities(property, filters)
        && property.is_available()
}

pub fn sort_properties(properties: &mut [Property], sort: SortSpec) {
    properties.sort_by(|a, b| {
        let ordering = compare(a, b, sort.sort_by);
        match sort.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &Property, b: &Property, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.price_per_day.total_cmp(&b.price_per_day),
        SortKey::Rating => a.property_rate.total_cmp(&b.property_rate),
        SortKey::Name => collate(&a.property_name, &b.property_name),
        SortKey::Rooms => a.no_of_rooms.cmp(&b.no_of_rooms),
    }
}

/// Dictionary ordering for display names.
///
/// Letters compare by their base form first (`É` sorts with `E`), then accents break ties
/// with the unaccented spelling first, then case with lowercase first.
pub(crate) fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn base_letters(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn matches_term(property: &Property, term: &str) -> bool {
    term.is_empty()
        || contains_folded(&property.property_name, term)
        || contains_folded(&property.city, term)
        || contains_folded(&property.state, term)
}

fn matches_price(property: &Property, filters: &SearchFilters) -> bool {
    let price = property.price_per_day;
    price >= filters.min_price && filters.max_price.map_or(true, |ceiling| price <= ceiling)
}

fn matches_amenities(property: &Property, filters: &SearchFilters) -> bool {
    filters
        .amenities
        .iter()
        .all(|amenity| property.amenities.has(*amenity))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::search::domain::{Amenity, AmenityFlags, PropertyId, PropertyStatus};

    fn listing(id: u64, name: &str, city: &str, state: &str, price: f64) -> Property {
        Property {
            property_id: PropertyId(id),
            property_name: name.to_string(),
            property_description: String::new(),
            no_of_rooms: 2,
            no_of_bathrooms: 1,
            max_no_of_guests: 4,
            price_per_day: price,
            image_url: String::new(),
            city: city.to_string(),
            state: state.to_string(),
            country: "India".to_string(),
            property_status: PropertyStatus::Available,
            property_rate: 4.0,
            property_rating_count: 10,
            amenities: AmenityFlags::default(),
        }
    }

    fn ids(properties: &[Property]) -> Vec<u64> {
        properties.iter().map(|property| property.property_id.0).collect()
    }

    #[test]
    fn free_text_checks_name_city_and_state() {
        let listings = vec![
            listing(1, "Palm Villa", "Panaji", "Goa", 3000.0),
            listing(2, "City Studio", "Pune", "Maharashtra", 1500.0),
            listing(3, "Hill Nest", "Manali", "Himachal Pradesh", 2000.0),
        ];

        for (term, expected) in [("palm", vec![1]), ("PUNE", vec![2]), ("pradesh", vec![3])] {
            let filters = SearchFilters {
                search_term: term.to_string(),
                ..SearchFilters::default()
            };
            assert_eq!(ids(&search(&listings, &filters, SortSpec::default())), expected);
        }
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let listings = vec![
            listing(1, "A", "X", "Y", 100.0),
            listing(2, "B", "X", "Y", 200.0),
            listing(3, "C", "X", "Y", 300.0),
        ];
        let filters = SearchFilters {
            min_price: 100.0,
            max_price: Some(200.0),
            ..SearchFilters::default()
        };

        assert_eq!(ids(&search(&listings, &filters, SortSpec::default())), vec![1, 2]);
    }

    #[test]
    fn guest_filter_requires_capacity_at_least_the_value() {
        let mut roomy = listing(1, "Roomy", "X", "Y", 100.0);
        roomy.max_no_of_guests = 8;
        let snug = listing(2, "Snug", "X", "Y", 100.0);
        let filters = SearchFilters {
            max_guests: 6,
            ..SearchFilters::default()
        };

        assert_eq!(ids(&search(&[roomy, snug], &filters, SortSpec::default())), vec![1]);
    }

    #[test]
    fn unavailable_listings_never_match() {
        let mut booked = listing(1, "Booked", "X", "Y", 100.0);
        booked.property_status = PropertyStatus::Other("MAINTENANCE".to_string());

        assert!(!matches(&booked, &SearchFilters::default()));
    }

    #[test]
    fn amenities_are_conjunctive() {
        let mut property = listing(1, "Flat", "X", "Y", 100.0);
        property.amenities.set(Amenity::Wifi, true);

        let mut filters = SearchFilters::default();
        filters.toggle_amenity(Amenity::Wifi);
        assert!(matches(&property, &filters));

        filters.toggle_amenity(Amenity::Pool);
        assert!(!matches(&property, &filters));
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut listings = vec![
            listing(1, "banyan", "X", "Y", 1.0),
            listing(2, "Acacia", "X", "Y", 1.0),
            listing(3, "Cedar", "X", "Y", 1.0),
        ];
        sort_properties(
            &mut listings,
            SortSpec {
                sort_by: SortKey::Name,
                sort_order: SortOrder::Ascending,
            },
        );

        assert_eq!(ids(&listings), vec![2, 1, 3]);
    }

    #[test]
    fn descending_rating_keeps_ties_in_input_order() {
        let mut first = listing(1, "A", "X", "Y", 1.0);
        first.property_rate = 4.5;
        let mut second = listing(2, "B", "X", "Y", 1.0);
        second.property_rate = 3.0;
        let mut third = listing(3, "C", "X", "Y", 1.0);
        third.property_rate = 4.5;

        let results = search(
            &[first, second, third],
            &SearchFilters::default(),
            SortSpec {
                sort_by: SortKey::Rating,
                sort_order: SortOrder::Descending,
            },
        );

        assert_eq!(ids(&results), vec![1, 3, 2]);
    }

    #[test]
    fn collate_puts_lowercase_first_on_case_ties() {
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("Apple", "apple"), Ordering::Greater);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut listings = vec![
            listing(1, "Zebra Lodge", "X", "Y", 1.0),
            listing(2, "Éclair Villa", "X", "Y", 1.0),
            listing(3, "Dune House", "X", "Y", 1.0),
            listing(4, "Eclair Villa", "X", "Y", 1.0),
        ];
        sort_properties(
            &mut listings,
            SortSpec {
                sort_by: SortKey::Name,
                sort_order: SortOrder::Ascending,
            },
        );

        assert_eq!(ids(&listings), vec![3, 4, 2, 1]);
        assert_eq!(collate("Ñandú", "Nube"), Ordering::Less);
    }
}
