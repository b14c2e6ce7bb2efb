//! Plain state models for the site behaviors.
//!
//! DESIGN
//! ======
//! Each behavior keeps its state model here, free of browser types, so the
//! `dom` layer only translates between these models and element attributes.

pub mod filter;
pub mod menu;
pub mod theme;
