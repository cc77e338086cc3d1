// SPDX-License-Identifier: MPL-2.0
//! Scroll target lookup supplied by the host.

/// Resolves a section identifier to something the host can scroll to.
///
/// Unresolvable identifiers return `None`; callers treat that as a no-op.
pub trait ScrollTargets {
    type Anchor;

    fn resolve(&self, section_id: &str) -> Option<Self::Anchor>;
}

impl<F, A> ScrollTargets for F
where
    F: Fn(&str) -> Option<A>,
{
    type Anchor = A;

    fn resolve(&self, section_id: &str) -> Option<A> {
        self(section_id)
    }
}
