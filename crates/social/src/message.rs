//! Post message composition.
//!
//! Pure text assembly from a listing snapshot. The same snapshot always
//! produces byte-identical output, which the orchestrator relies on to format
//! once and reuse the message for every platform.

use crate::models::{ListingPost, PriceKind};

/// Closing sentence appended to every post.
const CALL_TO_ACTION: &str = "Contactez-nous pour plus d'informations !";

/// Composes the plain-text post body for a listing.
pub fn format_listing_message(post: &ListingPost) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(post.title.clone());
    lines.push(String::new());
    lines.push(post.description.clone());
    lines.push(String::new());
    lines.push(format!("Prix : {}", format_price(post.price, post.price_kind)));
    lines.push(format!("Localisation : {}", post.location));

    if let Some(beds) = post.beds {
        lines.push(format!("Chambres : {}", beds));
    }
    if let Some(area) = post.area {
        lines.push(format!("Surface : {} m2", area));
    }
    if !post.features.is_empty() {
        lines.push(format!("Equipements : {}", post.features.join(", ")));
    }

    lines.push(String::new());
    lines.push(CALL_TO_ACTION.to_string());

    lines.join("\n")
}

/// Renders a price with its pricing-mode suffix, e.g. `350 000 EUR` or
/// `1 200 EUR/mois`.
pub fn format_price(amount: i64, kind: PriceKind) -> String {
    let suffix = match kind {
        PriceKind::Rent => "EUR/mois",
        PriceKind::Vacation => "EUR/nuit",
        PriceKind::Sale => "EUR",
    };
    format!("{} {}", group_thousands(amount), suffix)
}

/// Groups digits by thousands with spaces, fr-FR style.
fn group_thousands(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
