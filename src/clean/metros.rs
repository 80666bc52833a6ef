use once_cell::sync::Lazy;

use super::groups::{Fallback, GroupingTable, OTHER_GROUP};

/// `"City, ST"` → metro area. Cities outside these metros land in [`OTHER_GROUP`].
const METRO_AREAS: &[(&str, &str)] = &[
    // NYC Metro
    ("New York, NY", "NYC Metro"),
    ("Brooklyn, NY", "NYC Metro"),
    ("Bronx, NY", "NYC Metro"),
    ("Queens Village, NY", "NYC Metro"),
    ("Far Rockaway, NY", "NYC Metro"),
    ("Staten Island, NY", "NYC Metro"),
    ("Mount Vernon, NY", "NYC Metro"),
    ("Great Neck, NY", "NYC Metro"),
    ("Manhasset, NY", "NYC Metro"),
    ("Harrison, NY", "NYC Metro"),
    ("Lake Success, NY", "NYC Metro"),
    ("Valley Stream, NY", "NYC Metro"),
    ("West Orange, NJ", "NYC Metro"),
    ("Parsippany, NJ", "NYC Metro"),
    ("Whippany, NJ", "NYC Metro"),
    ("Woodbridge, NJ", "NYC Metro"),
    ("Iselin, NJ", "NYC Metro"),
    ("Jersey City, NJ", "NYC Metro"),
    ("Hoboken, NJ", "NYC Metro"),
    ("Secaucus, NJ", "NYC Metro"),
    ("Fairfield, NJ", "NYC Metro"),
    ("Weehawken, NJ", "NYC Metro"),
    ("Florham Park, NJ", "NYC Metro"),
    ("Newark, NJ", "NYC Metro"),
    ("Berkeley Heights, NJ", "NYC Metro"),
    ("Montvale, NJ", "NYC Metro"),
    ("Woodcliff Lake, NJ", "NYC Metro"),
    ("Little Ferry, NJ", "NYC Metro"),
    ("Essex Fells, NJ", "NYC Metro"),
    ("Franklin Lakes, NJ", "NYC Metro"),
    ("Camden, NJ", "NYC Metro"),
    ("Marlton, NJ", "NYC Metro"),
    ("Moorestown, NJ", "NYC Metro"),
    // SF Bay Area
    ("San Francisco, CA", "SF Bay Area"),
    ("Oakland, CA", "SF Bay Area"),
    ("Berkeley, CA", "SF Bay Area"),
    ("San Mateo, CA", "SF Bay Area"),
    ("Redwood City, CA", "SF Bay Area"),
    ("Foster City, CA", "SF Bay Area"),
    ("Palo Alto, CA", "SF Bay Area"),
    ("East Palo Alto, CA", "SF Bay Area"),
    ("Cupertino, CA", "SF Bay Area"),
    ("Santa Clara, CA", "SF Bay Area"),
    ("San Jose, CA", "SF Bay Area"),
    ("Sunnyvale, CA", "SF Bay Area"),
    ("Mountain View, CA", "SF Bay Area"),
    ("Menlo Park, CA", "SF Bay Area"),
    ("Los Gatos, CA", "SF Bay Area"),
    ("Milpitas, CA", "SF Bay Area"),
    ("Pleasanton, CA", "SF Bay Area"),
    ("Union City, CA", "SF Bay Area"),
    ("Newark, CA", "SF Bay Area"),
    ("Campbell, CA", "SF Bay Area"),
    ("San Ramon, CA", "SF Bay Area"),
    ("Walnut Creek, CA", "SF Bay Area"),
    ("Emeryville, CA", "SF Bay Area"),
    // Los Angeles Metro
    ("Los Angeles, CA", "Los Angeles Metro"),
    ("Santa Monica, CA", "Los Angeles Metro"),
    ("Burbank, CA", "Los Angeles Metro"),
    ("Pasadena, CA", "Los Angeles Metro"),
    ("Beverly Hills, CA", "Los Angeles Metro"),
    ("Long Beach, CA", "Los Angeles Metro"),
    ("Carson, CA", "Los Angeles Metro"),
    ("Torrance, CA", "Los Angeles Metro"),
    ("Glendale, CA", "Los Angeles Metro"),
    ("Inglewood, CA", "Los Angeles Metro"),
    ("Monterey Park, CA", "Los Angeles Metro"),
    ("Venice, CA", "Los Angeles Metro"),
    ("Anaheim, CA", "Los Angeles Metro"),
    ("Signal Hill, CA", "Los Angeles Metro"),
    ("Northridge, CA", "Los Angeles Metro"),
    ("Whittier, CA", "Los Angeles Metro"),
    ("Pico Rivera, CA", "Los Angeles Metro"),
    ("Culver City, CA", "Los Angeles Metro"),
    ("Gardena, CA", "Los Angeles Metro"),
    ("Marina del Rey, CA", "Los Angeles Metro"),
    ("Hawthorne, CA", "Los Angeles Metro"),
    ("City of Industry, CA", "Los Angeles Metro"),
    ("Alhambra, CA", "Los Angeles Metro"),
    ("Arcadia, CA", "Los Angeles Metro"),
    ("Irwindale, CA", "Los Angeles Metro"),
    // San Diego Metro
    ("San Diego, CA", "San Diego Metro"),
    ("El Cajon, CA", "San Diego Metro"),
    ("National City, CA", "San Diego Metro"),
    // Chicago Metro
    ("Chicago, IL", "Chicago Metro"),
    ("Evanston, IL", "Chicago Metro"),
    ("Naperville, IL", "Chicago Metro"),
    ("Arlington Heights, IL", "Chicago Metro"),
    ("Oak Brook, IL", "Chicago Metro"),
    ("Northbrook, IL", "Chicago Metro"),
    ("Deerfield, IL", "Chicago Metro"),
    ("Downers Grove, IL", "Chicago Metro"),
    ("Rolling Meadows, IL", "Chicago Metro"),
    ("Northlake, IL", "Chicago Metro"),
    ("Broadview, IL", "Chicago Metro"),
    ("Bridgeview, IL", "Chicago Metro"),
    ("Itasca, IL", "Chicago Metro"),
    ("Maywood, IL", "Chicago Metro"),
    ("Glenview, IL", "Chicago Metro"),
    ("Elk Grove Village, IL", "Chicago Metro"),
    ("Burr Ridge, IL", "Chicago Metro"),
    // Houston Metro
    ("Houston, TX", "Houston Metro"),
    ("Sugar Land, TX", "Houston Metro"),
    ("Pearland, TX", "Houston Metro"),
    ("Pasadena, TX", "Houston Metro"),
    ("Spring, TX", "Houston Metro"),
    // Dallas-Fort Worth
    ("Dallas, TX", "DFW Metro"),
    ("Fort Worth, TX", "DFW Metro"),
    ("Arlington, TX", "DFW Metro"),
    ("Plano, TX", "DFW Metro"),
    ("Richardson, TX", "DFW Metro"),
    ("Irving, TX", "DFW Metro"),
    ("Grapevine, TX", "DFW Metro"),
    ("Lewisville, TX", "DFW Metro"),
    ("Addison, TX", "DFW Metro"),
    ("Carrollton, TX", "DFW Metro"),
    ("Coppell, TX", "DFW Metro"),
    ("Farmers Branch, TX", "DFW Metro"),
    ("Southlake, TX", "DFW Metro"),
    ("Roanoke, TX", "DFW Metro"),
    // Austin Metro
    ("Austin, TX", "Austin Metro"),
    ("Round Rock, TX", "Austin Metro"),
    ("Cedar Park, TX", "Austin Metro"),
    ("West Lake Hills, TX", "Austin Metro"),
    // San Antonio Metro
    ("San Antonio, TX", "San Antonio Metro"),
    ("Fort Sam Houston, TX", "San Antonio Metro"),
    ("Lackland AFB, TX", "San Antonio Metro"),
    // Phoenix Metro
    ("Phoenix, AZ", "Phoenix Metro"),
    ("Scottsdale, AZ", "Phoenix Metro"),
    ("Tempe, AZ", "Phoenix Metro"),
    ("Mesa, AZ", "Phoenix Metro"),
    ("Chandler, AZ", "Phoenix Metro"),
    ("Glendale, AZ", "Phoenix Metro"),
    // Salt Lake City Metro
    ("Salt Lake City, UT", "Salt Lake City Metro"),
    ("West Jordan, UT", "Salt Lake City Metro"),
    ("Sandy, UT", "Salt Lake City Metro"),
    ("Draper, UT", "Salt Lake City Metro"),
    ("Lehi, UT", "Salt Lake City Metro"),
    ("American Fork, UT", "Salt Lake City Metro"),
    // Philadelphia Metro
    ("Philadelphia, PA", "Philadelphia Metro"),
    ("King of Prussia, PA", "Philadelphia Metro"),
    ("Radnor, PA", "Philadelphia Metro"),
    ("Malvern, PA", "Philadelphia Metro"),
    ("Conshohocken, PA", "Philadelphia Metro"),
    ("West Chester, PA", "Philadelphia Metro"),
    ("Blue Bell, PA", "Philadelphia Metro"),
    ("Norristown, PA", "Philadelphia Metro"),
    ("Plymouth Meeting, PA", "Philadelphia Metro"),
    ("Wayne, PA", "Philadelphia Metro"),
    ("Horsham, PA", "Philadelphia Metro"),
    ("Newtown Square, PA", "Philadelphia Metro"),
    // Seattle Metro
    ("Seattle, WA", "Seattle Metro"),
    ("Redmond, WA", "Seattle Metro"),
    ("Bellevue, WA", "Seattle Metro"),
    ("Renton, WA", "Seattle Metro"),
    ("Kirkland, WA", "Seattle Metro"),
    ("Issaquah, WA", "Seattle Metro"),
    ("Kent, WA", "Seattle Metro"),
    // Denver Metro
    ("Denver, CO", "Denver Metro"),
    ("Centennial, CO", "Denver Metro"),
    ("Aurora, CO", "Denver Metro"),
    ("Boulder, CO", "Denver Metro"),
    ("Lakewood, CO", "Denver Metro"),
    ("Greenwood Village, Arapahoe, CO", "Denver Metro"),
    ("Englewood, CO", "Denver Metro"),
    ("Littleton, CO", "Denver Metro"),
    ("Broomfield, CO", "Denver Metro"),
    ("Louisville, CO", "Denver Metro"),
    ("Lone Tree, CO", "Denver Metro"),
    // Minor Metros / Other US
    ("Gainesville, FL", "Other US"),
    ("Jacksonville, FL", "Other US"),
    ("Athens, GA", "Other US"),
    ("Columbus, OH", "Other US"),
    ("Westerville, OH", "Other US"),
    ("Hilliard, OH", "Other US"),
    ("Dublin, OH", "Other US"),
    ("Charlotte, NC", "Other US"),
    ("Huntersville, NC", "Other US"),
    ("Mooresville, NC", "Other US"),
    ("Indian Trail, NC", "Other US"),
    ("Fort Mill, SC", "Other US"),
    ("Indianapolis, IN", "Other US"),
    ("Whitestown, IN", "Other US"),
    ("Carmel, IN", "Other US"),
    ("Beech Grove, IN", "Other US"),
    ("Jeffersonville, IN", "Other US"),
    ("Lawrence, IN", "Other US"),
    ("Reedley, CA", "Other US"),
    ("Visalia, CA", "Other US"),
    ("Hanford, CA", "Other US"),
    ("Hampton, VA", "Other US"),
    ("Newport News, VA", "Other US"),
    ("Portsmouth, VA", "Other US"),
    ("Suffolk, VA", "Other US"),
    ("Virginia Beach, VA", "Other US"),
    ("Yorktown, VA", "Other US"),
    ("Smithfield, VA", "Other US"),
    ("Norfolk, VA", "Other US"),
    ("Chesapeake, VA", "Other US"),
];

/// `Location` → `Location grouped`.
pub static LOCATION: Lazy<GroupingTable> = Lazy::new(|| {
    GroupingTable::new(
        "location",
        METRO_AREAS.iter().map(|&(city, metro)| (city, Some(metro))),
        Fallback::Default(OTHER_GROUP),
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cities_map_to_their_metro() {
        assert_eq!(LOCATION.lookup("Brooklyn, NY"), Some("NYC Metro"));
        assert_eq!(LOCATION.lookup("Jersey City, NJ"), Some("NYC Metro"));
        assert_eq!(LOCATION.lookup("Emeryville, CA"), Some("SF Bay Area"));
        assert_eq!(LOCATION.lookup("Plano, TX"), Some("DFW Metro"));
        assert_eq!(LOCATION.lookup("Greenwood Village, Arapahoe, CO"), Some("Denver Metro"));
    }

    #[test]
    fn same_city_name_differs_by_state() {
        assert_eq!(LOCATION.lookup("Pasadena, CA"), Some("Los Angeles Metro"));
        assert_eq!(LOCATION.lookup("Pasadena, TX"), Some("Houston Metro"));
        assert_eq!(LOCATION.lookup("Newark, NJ"), Some("NYC Metro"));
        assert_eq!(LOCATION.lookup("Newark, CA"), Some("SF Bay Area"));
    }

    #[test]
    fn unlisted_cities_are_other() {
        assert_eq!(LOCATION.lookup("Boston, MA"), Some(OTHER_GROUP));
        assert_eq!(LOCATION.lookup("-1"), Some(OTHER_GROUP));
    }

    #[test]
    fn keys_are_unique() {
        assert_eq!(LOCATION.len(), METRO_AREAS.len());
    }
}
