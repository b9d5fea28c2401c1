mod profile;
mod signin;
mod signup;

pub use profile::profile;
pub use signin::signin;
pub use signup::signup;
