pub mod errors;
pub mod models;
pub mod policy;

pub use errors::EmailError;
pub use errors::PasswordPolicyError;
pub use errors::RegistrationError;
pub use models::EmailAddress;
pub use policy::validate_password;
pub use policy::validate_registration;
