//! Behavior logic shared by the browser layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules hold everything that does not need a live document, so the
//! `dom` layer stays a thin translation onto web-sys calls.

pub mod anchor;
pub mod newsletter;
pub mod preference_store;
pub mod theme_service;
