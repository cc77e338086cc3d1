// SPDX-License-Identifier: MPL-2.0
//! Patient testimonials shown in the carousel.
//!
//! The sequence is fixed at compile time; nothing adds or removes entries at
//! runtime, so any index below `TESTIMONIALS.len()` stays valid for the
//! lifetime of the process.

use std::num::NonZeroUsize;

// =============================================================================
// StarRating
// =============================================================================

/// Star rating bounds (1 to 5 stars).
pub mod rating_bounds {
    /// Lowest rating a testimonial can carry.
    pub const MIN: u8 = 1;
    /// Highest rating a testimonial can carry.
    pub const MAX: u8 = 5;
}

/// Star rating, guaranteed to be within 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StarRating(u8);

impl StarRating {
    /// Creates a new rating, clamping the value to the valid range.
    #[must_use]
    pub const fn new(stars: u8) -> Self {
        if stars < rating_bounds::MIN {
            Self(rating_bounds::MIN)
        } else if stars > rating_bounds::MAX {
            Self(rating_bounds::MAX)
        } else {
            Self(stars)
        }
    }

    /// Returns the number of stars.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns whether this is the best possible rating.
    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 >= rating_bounds::MAX
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self(rating_bounds::MAX)
    }
}

// =============================================================================
// Testimonial
// =============================================================================

/// A single patient testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub display_name: &'static str,
    pub body_text: &'static str,
    pub star_rating: StarRating,
    /// URI of the avatar picture.
    pub avatar_reference: &'static str,
}

impl Testimonial {
    /// Upper-case initials of the display name, used as the avatar fallback.
    ///
    /// ```
    /// use clinic_brochure::domain::TESTIMONIALS;
    ///
    /// assert_eq!(TESTIMONIALS[0].initials(), "SA");
    /// ```
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// The fixed, ordered testimonial sequence.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        display_name: "Sarah Ahmed",
        body_text: "Dr. Tohid's compassionate care and expertise helped me through a difficult \
                    diagnosis. His thorough approach and clear communication made all the difference.",
        star_rating: StarRating::new(5),
        avatar_reference: "https://via.placeholder.com/50/0000FF/FFFFFF?text=SA",
    },
    Testimonial {
        display_name: "Mohammad Rahman",
        body_text: "Excellent doctor with great bedside manner. He takes time to listen and \
                    explains everything clearly. Highly recommend!",
        star_rating: StarRating::new(5),
        avatar_reference: "https://via.placeholder.com/50/FF0000/FFFFFF?text=MR",
    },
    Testimonial {
        display_name: "Fatima Khan",
        body_text: "Professional, knowledgeable, and caring. Dr. Tohid provided exceptional \
                    treatment for my chronic condition.",
        star_rating: StarRating::new(5),
        avatar_reference: "https://via.placeholder.com/50/00FF00/FFFFFF?text=FK",
    },
];

/// Number of testimonials, usable where an empty carousel is unrepresentable.
pub const TESTIMONIAL_COUNT: NonZeroUsize = match NonZeroUsize::new(TESTIMONIALS.len()) {
    Some(count) => count,
    None => panic!("at least one testimonial is required"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(StarRating::new(0).value(), rating_bounds::MIN);
        assert_eq!(StarRating::new(9).value(), rating_bounds::MAX);
    }

    #[test]
    fn new_accepts_valid_values() {
        for stars in 1..=5 {
            assert_eq!(StarRating::new(stars).value(), stars);
        }
    }

    #[test]
    fn default_is_max() {
        assert!(StarRating::default().is_max());
        assert!(!StarRating::new(3).is_max());
    }

    #[test]
    fn initials_take_first_letters() {
        assert_eq!(TESTIMONIALS[1].initials(), "MR");
        let single = Testimonial {
            display_name: "anonymous",
            ..TESTIMONIALS[0]
        };
        assert_eq!(single.initials(), "A");
    }

    #[test]
    fn testimonial_sequence_is_fixed() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(TESTIMONIAL_COUNT.get(), TESTIMONIALS.len());
        assert!(TESTIMONIALS.iter().all(|t| t.star_rating.is_max()));
        assert!(TESTIMONIALS
            .iter()
            .all(|t| t.avatar_reference.starts_with("https://")));
    }
}
