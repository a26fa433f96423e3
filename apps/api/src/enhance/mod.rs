// Content enhancement: fixed templates, filled in around the caller's text.
// No model calls happen here; the only nondeterminism is the template pick.

pub mod enhancer;
pub mod handlers;
pub mod templates;

pub use enhancer::Enhancer;
