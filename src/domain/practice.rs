// SPDX-License-Identifier: MPL-2.0
//! Static content of the practice: profile, services, qualifications,
//! highlights, contact details and external documents.

/// Full name of the physician.
pub const DOCTOR_NAME: &str = "Dr. Abdullah Al Noman Tohid";

/// Short name used in the navigation bar.
pub const DOCTOR_SHORT_NAME: &str = "Dr. A. A. N. Tohid";

/// Role badges displayed under the name in the hero banner.
pub const CREDENTIAL_BADGES: &[&str] = &["Medicine Specialist", "MBBS", "FCPS"];

/// Paragraphs of the about section.
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Dr. Abdullah Al Noman Tohid is a highly qualified Medicine Specialist with extensive \
     experience in internal medicine and patient care. With his MBBS and FCPS qualifications, \
     he brings a wealth of knowledge and expertise to his practice.",
    "Dr. Tohid is committed to providing comprehensive, compassionate healthcare services. \
     His approach combines evidence-based medicine with personalized patient care, ensuring \
     that each patient receives the attention and treatment they deserve.",
    "Specializing in internal medicine, preventive healthcare, and chronic disease management, \
     Dr. Tohid has helped countless patients achieve better health outcomes through his \
     dedicated and thorough approach to medical care.",
];

/// A headline figure in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub caption: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "500+ Patients",
        caption: "Successfully treated and cared for",
    },
    Highlight {
        title: "5+ Years",
        caption: "Of medical practice experience",
    },
    Highlight {
        title: "Excellence",
        caption: "In patient care and medical expertise",
    },
];

/// A medical service offered by the practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    /// Glyph shown in place of the service icon.
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        glyph: "⚕",
        title: "Internal Medicine",
        description: "Comprehensive diagnosis and treatment of adult diseases and conditions",
    },
    Service {
        glyph: "♥",
        title: "Preventive Healthcare",
        description: "Regular check-ups and preventive care to maintain optimal health",
    },
    Service {
        glyph: "⛨",
        title: "Chronic Disease Management",
        description: "Specialized care for diabetes, hypertension, and other chronic conditions",
    },
];

/// A degree or position on the qualifications timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Qualification {
    pub years: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
}

pub const QUALIFICATIONS: &[Qualification] = &[
    Qualification {
        years: "2018-2023",
        title: "FCPS (Fellow of College of Physicians and Surgeons)",
        institution: "College of Physicians and Surgeons Pakistan",
        description: "Specialized training in Internal Medicine",
    },
    Qualification {
        years: "2012-2017",
        title: "MBBS (Bachelor of Medicine, Bachelor of Surgery)",
        institution: "Dhaka Medical College",
        description: "Medical degree with distinction",
    },
    Qualification {
        years: "2023-Present",
        title: "Medicine Specialist",
        institution: "City General Hospital",
        description: "Senior consultant in Internal Medicine department",
    },
];

/// Ways to reach the clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub glyph: &'static str,
    /// i18n key of the card title.
    pub title_key: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        glyph: "☎",
        title_key: "contact-phone-title",
        lines: &["+880 1234-567890", "+880 9876-543210"],
    },
    ContactChannel {
        glyph: "✉",
        title_key: "contact-email-title",
        lines: &["dr.tohid@clinic.com", "appointments@clinic.com"],
    },
    ContactChannel {
        glyph: "⌖",
        title_key: "contact-address-title",
        lines: &["City General Hospital", "123 Medical Street, Dhaka 1000"],
    },
];

/// Condensed contact lines shown in the footer.
pub const FOOTER_CONTACT_LINES: &[&str] = &[
    "☎ +880 1234-567890",
    "✉ dr.tohid@clinic.com",
    "⌖ City General Hospital, Dhaka",
];

/// A third-party document the page links to instead of hosting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalDocument {
    pub title: &'static str,
    pub url: &'static str,
}

/// Appointment booking form.
pub const BOOKING_FORM: ExternalDocument = ExternalDocument {
    title: "Dr. Tohid Appointment Booking Form",
    url: "https://docs.google.com/forms/d/e/1FAIpQLScESG7lwKMfiKjFeZYuy81RR-f1zlNATPQzz3iWyyuMiu04aw/viewform?embedded=true",
};

/// Location map of the clinic.
pub const CLINIC_MAP: ExternalDocument = ExternalDocument {
    title: "Google Map of DD Lab",
    url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3651.9000000000004!2d91.368463!3d23.0094185!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x375369001d3c363b%3A0x15539f5a286f5568!2sDD%20Lab!5e0!3m2!1sen!2sbd!4v1700000000000!5m2!1sen!2sbd",
};

/// Copyright line of the footer.
pub const COPYRIGHT: &str = "© 2024 Dr. Abdullah Al Noman Tohid. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_lists_are_populated() {
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(QUALIFICATIONS.len(), 3);
        assert_eq!(HIGHLIGHTS.len(), 3);
        assert_eq!(CONTACT_CHANNELS.len(), 3);
        assert_eq!(ABOUT_PARAGRAPHS.len(), 3);
    }

    #[test]
    fn external_documents_use_https() {
        for doc in [BOOKING_FORM, CLINIC_MAP] {
            assert!(doc.url.starts_with("https://"), "{} must be https", doc.title);
        }
    }

    #[test]
    fn every_contact_channel_has_lines() {
        assert!(CONTACT_CHANNELS.iter().all(|c| !c.lines.is_empty()));
    }
}
