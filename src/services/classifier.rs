use serde::{Deserialize, Serialize};

/// Downstream handling chosen for an inbound message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Chat,
    Itinerary,
}

// Substring matches, no word boundaries: "day" also covers "days",
// "itinerary" covers "itineraries" via "itinerar".
const INTENT_TERMS: &[&str] = &["itinerar", "plan", "trip", "day"];
const LOCATIVE_TERMS: &[&str] = &["to", "in", "for"];

/// Coarse keyword routing: a message is an itinerary request iff it contains
/// at least one intent term and one locative term, case-insensitive.
/// False positives and negatives are accepted; callers reject empty text
/// before classification.
pub fn classify(text: &str) -> Route {
    let lower = text.to_lowercase();

    let has_intent = INTENT_TERMS.iter().any(|t| lower.contains(t));
    let has_locative = LOCATIVE_TERMS.iter().any(|t| lower.contains(t));

    if has_intent && has_locative {
        Route::Itinerary
    } else {
        Route::Chat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itinerary_when_both_families_present() {
        assert_eq!(classify("Plan a 3 day trip to Lisbon"), Route::Itinerary);
        assert_eq!(classify("itinerary for Rome please"), Route::Itinerary);
        assert_eq!(classify("5 days in Tokyo"), Route::Itinerary);
    }

    #[test]
    fn chat_when_either_family_missing() {
        assert_eq!(classify("What's the weather like"), Route::Chat);
        // Intent term but no locative term.
        assert_eq!(classify("day by day"), Route::Chat);
        // Locative term but no intent term.
        assert_eq!(classify("what about food?"), Route::Chat);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("PLAN A TRIP TO OSLO"), Route::Itinerary);
        assert_eq!(classify("Itinerary FOR Madrid"), Route::Itinerary);
    }

    #[test]
    fn substrings_count_as_matches() {
        // "today" contains both "day" and "to"; accepted coarseness.
        assert_eq!(classify("today"), Route::Itinerary);
    }
}
