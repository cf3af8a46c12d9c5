//! User list: one request on mount, one row per user, and the logout action.

use crate::{
    pages::users::{self, UserRow},
    web::{
        Browser, BrowserShell,
        components::{Button, ButtonStyle, Spinner},
    },
};
use leptos::prelude::*;

#[component]
pub fn UsersListPage() -> impl IntoView {
    let shell = BrowserShell::new();

    let rows = LocalResource::new({
        let shell = shell.clone();
        move || {
            let browser = Browser::connect(shell.clone());
            async move { users::load(&browser.context()).await }
        }
    });

    let logout_action = Action::new_local({
        let shell = shell.clone();
        move |_: &()| {
            let browser = Browser::connect(shell.clone());
            async move { browser.context().logout().await }
        }
    });

    let open = move |row: &UserRow| {
        let browser = Browser::connect(shell.clone());
        users::open(&browser.context(), row);
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-gray-900">"Users"</h1>
                <Button
                    style=ButtonStyle::Secondary
                    disabled=logout_action.pending()
                    on_click=Callback::new(move |()| {
                        logout_action.dispatch(());
                    })
                >
                    "Logout"
                </Button>
            </div>

            <div class="overflow-hidden bg-white shadow-sm border border-gray-200 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "Username"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "Status"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200">
                        {move || match rows.get() {
                            None => view! {
                                <tr>
                                    <td colspan="2" class="px-6 py-6 text-center"><Spinner label="Loading users" /></td>
                                </tr>
                            }
                            .into_any(),
                            Some(Some(list)) if list.is_empty() => view! {
                                <tr>
                                    <td colspan="2" class="px-6 py-12 text-center text-sm text-gray-500">
                                        "No users found."
                                    </td>
                                </tr>
                            }
                            .into_any(),
                            Some(Some(list)) => list
                                .into_iter()
                                .map(|row| {
                                    let username = row.username.clone();
                                    let status = row.status.to_string();
                                    let color = format!("color: {}", row.status_color);
                                    let open = open.clone();
                                    view! {
                                        <tr
                                            class="cursor-pointer hover:bg-gray-50 transition-colors"
                                            on:click=move |_| open(&row)
                                        >
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                                {username}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm font-semibold" style=color>
                                                {status}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any(),
                            // Already alerted, or the session ended and we are leaving.
                            Some(None) => ().into_any(),
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
