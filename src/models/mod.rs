pub mod login;
pub mod post;

pub use login::{LoginFields, LoginPayload};
pub use post::{PostDraft, PostEntry, PostError};
