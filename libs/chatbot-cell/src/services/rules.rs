// =====================================================================================
// DEFAULT RULE TABLE
// =====================================================================================
//
// Priority order matters: rules are tried top to bottom and the first hit wins.
// "appointment" appears in both the booking and the cancellation rule, so a
// message containing it always resolves to booking.

use crate::models::RuleDefinition;

pub const FALLBACK_RESPONSE: &str = "I'm sorry, I didn't understand your query. Could you please rephrase or ask something about appointments, doctors, or our services?";

pub const GREETING_RESPONSE: &str =
    "Hello! I'm your Medicare assistant. How can I help you today?";

pub const BOOKING_RESPONSE: &str = "To book an appointment, please browse our list of doctors, select one, and click on 'Book Appointment'. You'll need to be logged in to complete the booking.";

pub const DOCTORS_RESPONSE: &str = "We have specialists in various fields including cardiology, pediatrics, orthopedics, dermatology, and neurology. You can view all our doctors and their specialties on the Doctors page.";

pub const PRICING_RESPONSE: &str = "Each doctor has their own consultation fee which is displayed on their profile. The fees typically range from ₹1000 to ₹2500 depending on the specialization.";

pub const CANCELLATION_RESPONSE: &str = "You can cancel or reschedule your appointment by going to 'My Appointments' section after logging in. Please note that cancellations should be made at least 24 hours before the appointment time.";

pub const REGISTRATION_RESPONSE: &str = "To register, click on the 'Sign Up' link in the navigation bar. You'll need to provide a username, email address, and password.";

pub const LOGIN_RESPONSE: &str = "To log in, use your registered email and password. If you've forgotten your password, please contact our support team.";

pub const SYMPTOMS_RESPONSE: &str = "I'm not qualified to provide medical advice. If you're experiencing symptoms, please book an appointment with an appropriate specialist.";

pub const COVID_RESPONSE: &str = "For COVID-19 related queries, please consult our specialists. We follow all safety protocols during appointments. If you have symptoms, please inform us in advance.";

pub const EMERGENCY_RESPONSE: &str = "If you're experiencing a medical emergency, please call emergency services (102/108/112) immediately. Our chatbot is not equipped to handle emergency situations.";

pub fn default_rule_definitions() -> Vec<RuleDefinition> {
    vec![
        RuleDefinition::new("greeting", &["hello", "hi", "hey", "greetings"], GREETING_RESPONSE),
        RuleDefinition::new("booking", &["book", "schedule", "make", "appointment"], BOOKING_RESPONSE),
        RuleDefinition::new("doctors", &["doctor", "specialist", "physician"], DOCTORS_RESPONSE),
        RuleDefinition::new("pricing", &["price", "cost", "fee", "fees", "charges"], PRICING_RESPONSE),
        RuleDefinition::new(
            "cancellation",
            &["cancel", "reschedule", "change", "appointment"],
            CANCELLATION_RESPONSE,
        ),
        RuleDefinition::new(
            "registration",
            &["register", "sign up", "create account"],
            REGISTRATION_RESPONSE,
        ),
        RuleDefinition::new("login", &["login", "sign in", "password", "forgot"], LOGIN_RESPONSE),
        RuleDefinition::new(
            "symptoms",
            &["symptom", "pain", "fever", "cough", "cold", "headache", "migraine"],
            SYMPTOMS_RESPONSE,
        ),
        RuleDefinition::new("covid", &["covid", "corona", "virus", "pandemic"], COVID_RESPONSE),
        RuleDefinition::new(
            "emergency",
            &["emergency", "urgent", "critical", "ambulance"],
            EMERGENCY_RESPONSE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_order_is_fixed() {
        let intents: Vec<String> = default_rule_definitions()
            .into_iter()
            .map(|rule| rule.intent)
            .collect();

        assert_eq!(
            intents,
            vec![
                "greeting", "booking", "doctors", "pricing", "cancellation",
                "registration", "login", "symptoms", "covid", "emergency",
            ]
        );
    }

    #[test]
    fn booking_and_cancellation_share_appointment() {
        let rules = default_rule_definitions();
        let shares = |intent: &str| {
            rules
                .iter()
                .find(|rule| rule.intent == intent)
                .map(|rule| rule.keywords.iter().any(|k| k == "appointment"))
                .unwrap_or(false)
        };

        assert!(shares("booking"));
        assert!(shares("cancellation"));
    }

    #[test]
    fn every_keyword_is_lowercase() {
        for rule in default_rule_definitions() {
            for keyword in &rule.keywords {
                assert_eq!(keyword, &keyword.to_lowercase(), "rule {}", rule.intent);
            }
        }
    }
}
