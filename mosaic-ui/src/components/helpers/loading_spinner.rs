//! Loading spinner component

use dioxus::prelude::*;

/// Spinner with a message, shown while the next page loads
#[component]
pub fn LoadingSpinner(
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-8", role: "status",
            div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-sky-500" }
            p { class: "ml-4 text-gray-400 text-sm", "{message}" }
        }
    }
}
