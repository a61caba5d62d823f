mod department;
mod error;
mod identifier;
mod lenient;
mod user;

pub use department::{Department, NewDepartment};
pub use error::{Error, Result};
pub use identifier::Identifier;
pub use user::{NewUser, User, UserDetails};

#[doc(hidden)]
pub use eyre::eyre as internal_eyre_dont_use;
