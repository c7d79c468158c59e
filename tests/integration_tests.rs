//! Integration tests for the MoveNest quote CLI and library

use std::process::{Command, Output};

use movenest::{
    ContractDuration, ContractTerms, DistanceEstimator, FareCalculator, GazetteerResolver,
    LocationResolver, QuoteEngine, QuoteRequest, ResolutionMethod, ServiceType,
    TravelTimeEstimator, models::LocationQuery,
};
use serde_json::Value;

/// Run the binary against built-in defaults, ignoring any user config file
fn movenest(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_movenest"))
        .args(["--config", "does-not-exist/movenest.toml"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI describes itself in help output
#[test]
fn test_cli_help() {
    let output = movenest(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Trip estimation and quote engine"));
    assert!(stdout.contains("quote"));
    assert!(stdout.contains("serve"));
}

/// Test JSON output for a long trip between two gazetteer cities
#[test]
fn test_quote_command_json() {
    let output = movenest(&[
        "quote",
        "--service",
        "kids",
        "--pickup",
        "Johannesburg",
        "--dropoff",
        "Durban",
        "--json",
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let quote: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(quote["distance"]["road_km"], 625.4);
    assert_eq!(quote["distance"]["correction_factor"], 1.25);
    assert_eq!(quote["time"]["total_minutes"], 360);
    assert_eq!(quote["fare"]["base_fare"], 100.0);
}

/// Test the human-readable summary for a monthly contract
#[test]
fn test_quote_command_monthly_contract() {
    let output = movenest(&[
        "quote",
        "--service",
        "kids",
        "--pickup",
        "Sandton City",
        "--dropoff",
        "Midrand",
        "--monthly",
        "--organization",
        "Greenside Primary",
        "--trips-per-week",
        "10",
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Kids Transport quote"));
    assert!(stdout.contains("Discount:  -R 69"));
    assert!(stdout.contains("Monthly:   R 11016"));
}

/// Test the WhatsApp output prints a click-to-chat link
#[test]
fn test_quote_command_whatsapp() {
    let output = movenest(&[
        "quote",
        "--service",
        "events",
        "--pickup",
        "Pretoria",
        "--dropoff",
        "Centurion",
        "--whatsapp",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Service: Car Hire"));
    assert!(stdout.contains("https://wa.me/27781918983?text="));
}

/// Test error handling for empty location
#[test]
fn test_quote_empty_location_error() {
    let output = movenest(&[
        "quote", "--service", "kids", "--pickup", "", "--dropoff", "Durban",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
}

/// Test that an unsupported contract length is refused
#[test]
fn test_quote_invalid_duration_error() {
    let output = movenest(&[
        "quote", "--service", "staff", "--pickup", "Sandton", "--dropoff", "Midrand", "--monthly",
        "--duration", "4",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("3, 6 or 12"));
}

/// Test the documented Johannesburg to Durban flow component by component
#[test]
fn test_components_compose_into_quote() {
    let resolver = GazetteerResolver::default();
    let pickup = resolver.resolve(&LocationQuery::new("Johannesburg").unwrap());
    let dropoff = resolver.resolve(&LocationQuery::new("durban").unwrap());
    assert_eq!(pickup.method, ResolutionMethod::Exact);

    let distance = DistanceEstimator::estimate(&pickup.coordinate, &dropoff.coordinate);
    let time = TravelTimeEstimator::estimate(distance.road_km).unwrap();
    let fare = FareCalculator::default().calculate(&ServiceType::Luggage, distance.road_km, false, None);

    let quote = QuoteEngine::default()
        .build_quote(&QuoteRequest::new("Johannesburg", "durban", ServiceType::parse("elderly")))
        .unwrap();

    assert_eq!(quote.distance, distance);
    assert_eq!(quote.time, time);
    assert_eq!(quote.fare, fare);
}

/// Test that a quote serializes into a booking payload
#[test]
fn test_quote_serializes_for_booking() {
    let request = QuoteRequest::new("Cape Town", "Port Elizabeth", ServiceType::Staff).with_contract(
        ContractTerms {
            organization_name: "Harbour Logistics".to_string(),
            duration: ContractDuration::TwelveMonths,
            trips_per_week: 5,
        },
    );
    let quote = QuoteEngine::default().build_quote(&request).unwrap();

    let payload = serde_json::to_value(&quote).unwrap();
    assert_eq!(payload["service"], "staff");
    assert_eq!(payload["pickup"]["query"], "Cape Town");
    assert_eq!(payload["dropoff"]["method"], "EXACT");
    assert_eq!(payload["contract"]["duration_months"], 12);
    assert_eq!(payload["contract"]["trips_per_week"], 5);
    assert_eq!(payload["time"]["formatted"], quote.time.formatted.as_str());

    let restored: movenest::Quote = serde_json::from_value(payload).unwrap();
    assert_eq!(restored.contract, quote.contract);
    assert_eq!(restored.time, quote.time);
}
