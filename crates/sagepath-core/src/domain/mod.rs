//! Domain entities - the core business objects.

mod delete_flow;
mod post;
mod session;
mod slug;
mod validation;

pub use delete_flow::{CONFIRM_PHRASE, DeleteFlow, FlowError, phrase_matches};
pub use post::{ImageUpload, Post, PostDraft, PostWrite, paragraphs};
pub use session::Session;
pub use slug::slugify;
pub use validation::{
    FieldError, MAX_IMAGE_BYTES, ValidationErrors, validate_image, validate_login,
    validate_post,
};
