mod error;
mod requests;
mod types;
mod validation;

pub use error::{FieldError, ValidationError};
pub use requests::{ContactChanges, CreateContactRequest, UpdateContactRequest};
pub use types::{Contact, ContactId, NewContact};
pub use validation::validate_email;
