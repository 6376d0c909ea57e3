//! Form rendering module
//!
//! - `field_renderer`: text, select and multi-select field widgets
//! - `contact_form`: the contact form card

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact_form;
