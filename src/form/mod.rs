//! Form controller over one editable customer draft

pub mod controller;
pub mod draft;

pub use controller::{FormController, PanProbe, PostcodeProbe};
pub use draft::{AddressDraft, CustomerDraft};
