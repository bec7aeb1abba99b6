// Contact form: shared presence validation, the server-side handler, the
// delivery collaborator, and the submitting client.

pub mod client;
pub mod handlers;
pub mod sink;
pub mod validation;
