// SPDX-License-Identifier: MPL-2.0
//! Navigable page sections.
//!
//! Each section carries the anchor identifier used by navigation requests.
//! The testimonial carousel is rendered between qualifications and the
//! appointment section but has no anchor of its own.

use std::fmt;
use std::str::FromStr;

/// Page sections that navigation can scroll to, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Qualifications,
    Appointment,
    Contact,
}

impl Section {
    /// All anchored sections in page order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Qualifications,
        Section::Appointment,
        Section::Contact,
    ];

    /// Anchor identifier of the section.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Qualifications => "qualifications",
            Section::Appointment => "appointment",
            Section::Contact => "contact",
        }
    }

    /// Looks up a section by anchor identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// i18n key of the navigation label.
    #[must_use]
    pub fn nav_label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Services => "nav-services",
            Section::Qualifications => "nav-qualifications",
            Section::Appointment => "nav-book-appointment",
            Section::Contact => "nav-contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("unknown section: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn unknown_id_does_not_resolve() {
        assert_eq!(Section::from_id("nonexistent"), None);
        assert_eq!(Section::from_id("testimonials"), None);
        assert!("Services".parse::<Section>().is_err());
    }

    #[test]
    fn display_uses_anchor_id() {
        assert_eq!(Section::Appointment.to_string(), "appointment");
    }
}
