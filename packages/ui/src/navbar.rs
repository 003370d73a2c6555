use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-content",
                {children}
            }
        }
    }
}
