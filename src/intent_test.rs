use super::*;

#[test]
fn attr_wins_over_label() {
    assert_eq!(
        ButtonIntent::resolve(Some("demo"), "Contact Sales"),
        Some(ButtonIntent::ScheduleDemo)
    );
}

#[test]
fn unknown_attr_falls_back_to_label() {
    assert_eq!(
        ButtonIntent::resolve(Some("launch"), "Get Started"),
        Some(ButtonIntent::Signup)
    );
}

#[test]
fn label_table_covers_every_cta() {
    for label in ["Get Started Free", "Get Started", "Start Free Trial"] {
        assert_eq!(ButtonIntent::from_label(label), Some(ButtonIntent::Signup));
    }
    for label in ["Watch Demo", "Schedule Demo"] {
        assert_eq!(ButtonIntent::from_label(label), Some(ButtonIntent::ScheduleDemo));
    }
    assert_eq!(
        ButtonIntent::from_label("Contact Sales"),
        Some(ButtonIntent::ContactSales)
    );
}

#[test]
fn labels_are_trimmed_before_matching() {
    assert_eq!(ButtonIntent::from_label("  Get Started \n"), Some(ButtonIntent::Signup));
}

#[test]
fn unrecognized_button_resolves_to_none() {
    assert_eq!(ButtonIntent::resolve(None, "Learn More"), None);
    assert_eq!(ButtonIntent::from_attr("unknown"), None);
}

#[test]
fn every_intent_has_a_message() {
    for intent in [
        ButtonIntent::Signup,
        ButtonIntent::ScheduleDemo,
        ButtonIntent::ContactSales,
    ] {
        assert!(!intent.message().is_empty());
    }
}
