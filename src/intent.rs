//! Call-to-action button intents.

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

/// What a call-to-action button is meant to do.
///
/// Buttons declare this with a `data-intent` attribute; known label text is
/// accepted as a fallback for markup that predates the attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonIntent {
    Signup,
    ScheduleDemo,
    ContactSales,
}

impl ButtonIntent {
    /// Parse a `data-intent` attribute value.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "signup" => Some(Self::Signup),
            "demo" => Some(Self::ScheduleDemo),
            "contact-sales" => Some(Self::ContactSales),
            _ => None,
        }
    }

    /// Fallback mapping from the visible label text.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Get Started Free" | "Get Started" | "Start Free Trial" => Some(Self::Signup),
            "Watch Demo" | "Schedule Demo" => Some(Self::ScheduleDemo),
            "Contact Sales" => Some(Self::ContactSales),
            _ => None,
        }
    }

    /// Resolve from the attribute first, then the label table.
    #[must_use]
    pub fn resolve(attr: Option<&str>, label: &str) -> Option<Self> {
        attr.and_then(Self::from_attr).or_else(|| Self::from_label(label))
    }

    /// Placeholder confirmation shown until the real flows exist.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Signup => "Thank you for your interest! This would redirect to a signup page.",
            Self::ScheduleDemo => "Demo scheduling feature would be implemented here.",
            Self::ContactSales => "Contact sales feature would be implemented here.",
        }
    }
}
