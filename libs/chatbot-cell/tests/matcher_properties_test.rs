// =====================================================================================
// INTENT MATCHER PROPERTY TESTS
// =====================================================================================

use chatbot_cell::{
    services::rules::{
        BOOKING_RESPONSE, CANCELLATION_RESPONSE, EMERGENCY_RESPONSE, FALLBACK_RESPONSE,
        GREETING_RESPONSE,
    },
    IntentMatcher,
};
use proptest::prelude::*;

const ALL_KEYWORDS: &[&str] = &[
    "hello", "hi", "hey", "greetings", "book", "schedule", "make", "appointment", "doctor",
    "specialist", "physician", "price", "cost", "fee", "fees", "charges", "cancel", "reschedule",
    "change", "register", "sign up", "create account", "login", "sign in", "password", "forgot",
    "symptom", "pain", "fever", "cough", "cold", "headache", "migraine", "covid", "corona", "virus",
    "pandemic", "emergency", "urgent", "critical", "ambulance",
];

fn contains_keyword(message: &str) -> bool {
    let lowered = message.to_lowercase();
    ALL_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

proptest! {
    #[test]
    fn classify_is_total_and_non_empty(message in any::<String>()) {
        let matcher = IntentMatcher::with_default_rules();
        prop_assert!(!matcher.classify(&message).is_empty());
    }

    #[test]
    fn classify_is_deterministic(message in any::<String>()) {
        let matcher = IntentMatcher::with_default_rules();
        prop_assert_eq!(matcher.classify(&message), matcher.classify(&message));
    }

    #[test]
    fn classify_ignores_ascii_case(message in "[a-zA-Z ?!]{0,64}") {
        let matcher = IntentMatcher::with_default_rules();
        prop_assert_eq!(
            matcher.classify(&message.to_uppercase()),
            matcher.classify(&message.to_lowercase())
        );
    }

    #[test]
    fn keyword_free_messages_fall_back(message in "[0-9 .,?!xqzjw]{0,64}") {
        prop_assume!(!contains_keyword(&message));
        let matcher = IntentMatcher::with_default_rules();
        prop_assert_eq!(matcher.classify(&message), FALLBACK_RESPONSE);
    }

    #[test]
    fn detailed_agrees_with_classify(message in any::<String>()) {
        let matcher = IntentMatcher::with_default_rules();
        let detailed = matcher.classify_detailed(&message);
        prop_assert_eq!(detailed.response.as_str(), matcher.classify(&message));
        prop_assert_eq!(detailed.matched, detailed.intent.is_some());
    }
}

#[test]
fn first_declared_rule_wins() {
    let matcher = IntentMatcher::with_default_rules();

    // greeting (1) beats emergency (10)
    assert_eq!(matcher.classify("hey, this is urgent"), GREETING_RESPONSE);
    // booking (2) beats cancellation (5)
    assert_eq!(matcher.classify("I need to cancel and book again"), BOOKING_RESPONSE);
}

/// Known quirk: "appointment" belongs to both the booking and the cancellation
/// rule, so cancellation is only reachable through its other keywords.
#[test]
fn appointment_keyword_always_resolves_to_booking() {
    let matcher = IntentMatcher::with_default_rules();

    assert_eq!(matcher.classify("appointment"), BOOKING_RESPONSE);
    assert_eq!(matcher.classify("cancel my appointment"), BOOKING_RESPONSE);
    assert_eq!(matcher.classify("cancel my visit"), CANCELLATION_RESPONSE);
}

#[test]
fn long_and_non_ascii_inputs() {
    let matcher = IntentMatcher::with_default_rules();

    let long = "z".repeat(1_000_000);
    assert_eq!(matcher.classify(&long), FALLBACK_RESPONSE);

    let long_with_keyword = format!("{}ambulance", "z".repeat(500_000));
    assert_eq!(matcher.classify(&long_with_keyword), EMERGENCY_RESPONSE);

    assert_eq!(matcher.classify("Здравствуйте 🙂"), FALLBACK_RESPONSE);
    assert_eq!(matcher.classify("ÉMERGENCY? no: EMERGENCY"), EMERGENCY_RESPONSE);
}
