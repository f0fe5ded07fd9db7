mod home;
mod login;
mod new_post;

pub use home::HomePage;
pub use login::{handle_submit, FormSubmission, LoginForm, LoginPage};
pub use new_post::NewPostPage;
