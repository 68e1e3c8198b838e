// src/rules/category.rs

use crate::core::osm::OsmFeature;
use crate::model::Category;

/// Tags that name what a facility is, in the order they are consulted.
const TYPE_KEYS: [&str; 5] = ["amenity", "shop", "office", "tourism", "industrial"];
const DEFAULT_TYPE: &str = "Business";

const EDUCATION_AMENITIES: [&str; 3] = ["school", "college", "university"];

/// One category per feature. Rules are checked in a fixed order and the first
/// hit wins, so a school that also carries an `office` tag is Education.
pub fn categorize(feature: &OsmFeature) -> Category {
    let amenity = feature.tag("amenity");
    if amenity == Some("place_of_worship") {
        Category::Religious
    } else if amenity.is_some_and(|a| EDUCATION_AMENITIES.contains(&a)) {
        Category::Education
    } else if feature.has_tag("tourism") {
        Category::Hospitality
    } else if feature.has_tag("office") {
        Category::OfficeGovt
    } else if feature.has_tag("industrial") {
        Category::Industrial
    } else {
        Category::Business
    }
}

/// Raw facility type: first present of amenity/shop/office/tourism/industrial.
pub fn facility_type(feature: &OsmFeature) -> &str {
    TYPE_KEYS
        .iter()
        .find_map(|k| feature.tag(k))
        .unwrap_or(DEFAULT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f() -> OsmFeature { OsmFeature::new(7.0, 6.0) }

    #[test]
    fn precedence_order() {
        let worship_hotel = f().with_tag("amenity", "place_of_worship").with_tag("tourism", "hotel");
        assert_eq!(categorize(&worship_hotel), Category::Religious);

        let school_office = f().with_tag("amenity", "school").with_tag("office", "government");
        assert_eq!(categorize(&school_office), Category::Education);

        let hotel_office = f().with_tag("tourism", "hotel").with_tag("office", "ngo");
        assert_eq!(categorize(&hotel_office), Category::Hospitality);

        let office_factory = f().with_tag("office", "cooperative").with_tag("industrial", "factory");
        assert_eq!(categorize(&office_factory), Category::OfficeGovt);

        assert_eq!(categorize(&f().with_tag("industrial", "sawmill")), Category::Industrial);
        assert_eq!(categorize(&f().with_tag("amenity", "bank")), Category::Business);
        assert_eq!(categorize(&f()), Category::Business);
    }

    #[test]
    fn type_prefers_amenity_then_shop() {
        let x = f().with_tag("shop", "mall").with_tag("amenity", "fuel");
        assert_eq!(facility_type(&x), "fuel");
        assert_eq!(facility_type(&f().with_tag("shop", "mall")), "mall");
        assert_eq!(facility_type(&f()), "Business");
    }
}
