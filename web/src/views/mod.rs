mod components;

mod dashboard;
pub use dashboard::Dashboard;

mod department_form;
use department_form::DepartmentFormView;

mod department_lookup;
use department_lookup::DepartmentLookup;

mod user_form;
use user_form::UserFormView;

mod user_lookup;
use user_lookup::UserLookup;
