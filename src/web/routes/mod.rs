mod login;
mod not_found;
mod register;
mod users;

use self::{
    login::LoginPage,
    not_found::NotFoundPage,
    register::RegisterPage,
    users::{UserDetailPage, UsersListPage},
};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/users") view=UsersListPage />
            <Route path=path!("/users/:id") view=UserDetailPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
