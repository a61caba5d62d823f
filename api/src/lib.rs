//! Server functions backing the console views. Each one forwards a single
//! request to the backend through the shared [`server::BackendClient`].

use dioxus::prelude::*;
use types::{Department, NewDepartment, NewUser, UserDetails};

#[post("/console/departments/create")]
pub async fn create_department(department: NewDepartment) -> ServerFnResult<()> {
    server::backend()?.create_department(&department).await?;
    Ok(())
}

#[post("/console/departments/find")]
pub async fn find_department(id: String) -> ServerFnResult<Department> {
    Ok(server::backend()?.get_department(&id).await?)
}

#[post("/console/users/create")]
pub async fn create_user(user: NewUser) -> ServerFnResult<()> {
    server::backend()?.create_user(&user).await?;
    Ok(())
}

#[post("/console/users/find")]
pub async fn find_user(id: String) -> ServerFnResult<UserDetails> {
    Ok(server::backend()?.get_user(&id).await?)
}
