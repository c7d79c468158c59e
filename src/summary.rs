//! Customer-facing renderings of a quote
//!
//! Builds the WhatsApp enquiry message sent from the quote page and
//! formats distances in the unit chosen in the display settings.

use std::fmt::Write;

use crate::config::{BusinessConfig, DistanceUnit};
use crate::models::Quote;

const MILES_PER_KM: f64 = 0.621371;

/// Format a distance in the configured unit, one decimal place
#[must_use]
pub fn format_distance(km: f64, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::Km => format!("{km:.1} km"),
        DistanceUnit::Miles => format!("{:.1} mi", km * MILES_PER_KM),
    }
}

/// Enquiry text a customer sends to the business on WhatsApp
#[must_use]
pub fn whatsapp_message(quote: &Quote, business: &BusinessConfig, unit: DistanceUnit) -> String {
    let currency = &business.currency_symbol;
    let mut message = format!("Hi {}! I'd like to get a quote for:\n\n", business.name);

    // Writing to a String cannot fail
    let _ = writeln!(message, "Service: {}", quote.service.display_name());
    let _ = writeln!(message, "Pickup: {}", quote.pickup.query.as_str().trim());
    let _ = writeln!(message, "Dropoff: {}", quote.dropoff.query.as_str().trim());
    let _ = writeln!(message, "Distance: {}", format_distance(quote.distance.road_km, unit));
    let _ = writeln!(message, "Estimated Time: {}", quote.time.formatted);
    let _ = writeln!(message, "Estimated Price: {currency} {}", quote.fare.display_total());

    if let Some(contract) = &quote.contract {
        let _ = writeln!(message);
        let _ = writeln!(message, "Monthly Contract for: {}", contract.organization_name);
        let _ = writeln!(message, "Contract Duration: {} months", contract.duration.months());
        let _ = writeln!(message, "Trips per Week: {}", contract.trips_per_week);
        let _ = writeln!(
            message,
            "Monthly Total: {currency} {}",
            quote.fare.display_monthly_total()
        );
    }

    message.push_str("\nPlease confirm availability and final pricing.");
    message
}

/// Marks `encodeURIComponent` leaves alone but `urlencoding` escapes
const UNRESERVED_MARKS: [(&str, &str); 5] =
    [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

/// Click-to-chat link that opens WhatsApp with `message` prefilled
///
/// Encoded the same way the storefront builds its links.
#[must_use]
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let text = UNRESERVED_MARKS
        .iter()
        .fold(urlencoding::encode(message).into_owned(), |text, (escaped, mark)| {
            text.replace(escaped, mark)
        });
    format!("https://wa.me/{number}?text={text}")
}

/// Plain-text breakdown printed by the CLI
#[must_use]
pub fn text_summary(quote: &Quote, currency: &str, unit: DistanceUnit) -> String {
    let fare = &quote.fare;
    let mut out = String::new();

    let _ = writeln!(out, "{} quote", quote.service.display_name());
    let _ = writeln!(
        out,
        "  Pickup:    {} ({})",
        quote.pickup.query.as_str().trim(),
        quote.pickup.coordinate.format_coordinates()
    );
    let _ = writeln!(
        out,
        "  Dropoff:   {} ({})",
        quote.dropoff.query.as_str().trim(),
        quote.dropoff.coordinate.format_coordinates()
    );
    let _ = writeln!(out, "  Distance:  {}", format_distance(quote.distance.road_km, unit));
    let _ = writeln!(out, "  Time:      {}", quote.time.formatted);
    let _ = writeln!(out, "  Base fare: {currency} {}", fare.display_base_fare());
    let _ = writeln!(out, "  Distance:  {currency} {}", fare.display_distance_fare());
    if quote.contract.is_some() {
        let _ = writeln!(out, "  Discount:  -{currency} {}", fare.display_discount());
    }
    let _ = writeln!(out, "  Total:     {currency} {}", fare.display_total());
    if quote.contract.is_some() {
        let _ = writeln!(out, "  Monthly:   {currency} {}", fare.display_monthly_total());
    }

    out
}
