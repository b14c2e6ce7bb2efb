//! In-page anchor resolution for smooth scrolling.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id targeted by an in-page link, if the link should be intercepted.
///
/// A bare `#` (the usual "top of page"/placeholder link) and anything that is
/// not a fragment link are left to the browser.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
