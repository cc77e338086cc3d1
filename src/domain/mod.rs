// SPDX-License-Identifier: MPL-2.0
//! Domain layer - page content and value objects with no external dependencies.
//!
//! # Modules
//!
//! - [`testimonial`]: Patient testimonials ([`Testimonial`](testimonial::Testimonial),
//!   [`StarRating`](testimonial::StarRating))
//! - [`practice`]: Static practice content (services, qualifications, contact, embeds)
//! - [`section`]: Navigable page sections ([`Section`](section::Section))

pub mod practice;
pub mod section;
pub mod testimonial;

pub use section::Section;
pub use testimonial::{StarRating, Testimonial, TESTIMONIALS, TESTIMONIAL_COUNT};
