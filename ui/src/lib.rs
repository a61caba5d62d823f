//! View state for the console, independent of any rendering framework.
//!
//! Each view owns one of these values and drives it from its event handlers;
//! nothing here is shared between views.

mod department_form;
mod form;
mod lookup;
mod notice;
mod overview;
mod panel;
mod tab;
mod user_form;

pub use department_form::{DepartmentField, DepartmentForm};
pub use form::{FieldSpec, Rejection};
pub use lookup::{Found, Lookup, Resource};
pub use notice::{Level, Notice};
pub use overview::{OVERVIEW_STATS, Stat};
pub use panel::{
    ADDRESS_NOT_SPECIFIED, DepartmentPanel, NOT_AVAILABLE, NOT_SPECIFIED, UserPanel,
};
pub use tab::Tab;
pub use user_form::{UserField, UserForm};
