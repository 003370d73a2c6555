use dioxus::prelude::*;

use crate::Route;

/// Session teardown target: clears the stored tokens and returns to login.
/// The notes page only ever navigates here; it never touches the session
/// itself.
#[component]
pub fn Logout() -> Element {
    let nav = use_navigator();

    api::session::clear();
    nav.replace(Route::Login {});

    rsx! {}
}
