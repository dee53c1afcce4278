//! Loader coverage for the CSV-backed airport and hotel directories.

use std::io::Write;

use layover_ai::reference::{AirportDirectory, HotelDirectory, InMemoryAirports, InMemoryHotels};

const AIRPORT_CSV: &str = "\
Code,Name,City,Timezone,Latitude,Longitude
SEA,Seattle-Tacoma International,Seattle,America/Los_Angeles,47.4502,-122.3088
ANC,Ted Stevens Anchorage International,Anchorage,America/Anchorage,61.1743,-149.9962
";

const HOTEL_CSV: &str = "\
HotelId,Name,Brand,Address,Latitude,Longitude,Rating,Reviews,Amenities,NightlyRate,TaxesAndFees
htl-1,Hilton Seattle Airport,Hilton,17620 International Blvd Seattle,47.4489,-122.3094,4.3,2178,Airport Shuttle;WiFi,189.00,28.35
htl-2,Anchorage Harbor Inn,Independent,239 W 4th Ave Anchorage,61.2176,-149.8953,4.1,412,WiFi,,
";

#[test]
fn airport_csv_round_trips_through_lookup() {
    let airports = InMemoryAirports::from_reader(AIRPORT_CSV.as_bytes()).expect("csv loads");

    assert_eq!(airports.len(), 2);
    let anchorage = airports.lookup("anc").expect("case-insensitive lookup");
    assert_eq!(anchorage.city, "Anchorage");
    assert!((anchorage.latitude - 61.1743).abs() < 1e-9);

    let missing = airports.lookup("SJC").expect_err("unknown code fails");
    assert!(missing.to_string().contains("SJC"));
}

#[test]
fn hotel_csv_parses_amenities_and_optional_rates() {
    let hotels = InMemoryHotels::from_reader(HOTEL_CSV.as_bytes()).expect("csv loads");

    assert_eq!(hotels.len(), 2);
    let seattle = hotels.find_in_city("Seattle", "SEA");
    assert_eq!(seattle.len(), 1);
    assert_eq!(
        seattle[0].amenities,
        vec!["Airport Shuttle".to_string(), "WiFi".to_string()]
    );
    assert_eq!(seattle[0].nightly_rate, Some(189.0));

    let anchorage = hotels.find_in_city("Anchorage", "ANC");
    assert_eq!(anchorage.len(), 1);
    assert_eq!(anchorage[0].nightly_rate, None, "blank rate maps to None");
}

#[test]
fn loads_from_a_file_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(HOTEL_CSV.as_bytes()).expect("write csv");

    let hotels = InMemoryHotels::from_csv_path(file.path()).expect("csv loads from path");
    assert_eq!(hotels.len(), 2);
}

#[test]
fn malformed_rows_surface_a_typed_error() {
    let broken = "\
Code,Name,City,Timezone,Latitude,Longitude
SEA,Seattle-Tacoma International,Seattle,America/Los_Angeles,not-a-number,-122.3088
";

    let error = InMemoryAirports::from_reader(broken.as_bytes()).expect_err("bad row fails");
    assert!(error.to_string().contains("malformed"));
}

#[test]
fn empty_search_result_is_not_an_error() {
    let hotels = InMemoryHotels::from_reader(HOTEL_CSV.as_bytes()).expect("csv loads");

    let nothing = hotels.find_in_city("Lisbon", "LIS");
    assert!(nothing.is_empty());
}
