use dioxus::prelude::*;

#[component]
pub fn TitleBanner(viewer_name: String) -> Element {
    rsx! {
        div {
            class: "bg-[#181D31] text-white py-5 px-5 shadow-md mb-6 flex items-baseline justify-between",
            span {
                class: "font-semibold text-2xl tracking-wide",
                "Skill Exchange"
            }
            span {
                class: "text-sm text-white/70",
                "Signed in as {viewer_name}"
            }
        }
    }
}
