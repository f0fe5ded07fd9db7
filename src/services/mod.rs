pub mod login;
#[cfg(feature = "ssr")]
pub mod posts;

pub use login::{LoginClient, SubmitError, LOGIN_ENDPOINT};
