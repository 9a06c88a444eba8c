use dioxus::prelude::*;
use lucide_dioxus::Video;

/// Modal shell for a video call room. Media transport is not handled here.
#[component]
pub fn VideoCall(
    is_open: bool,
    on_close: EventHandler<()>,
    room_id: String,
    user_id: String,
    user_name: String
) -> Element {
    if !is_open {
        return rsx! {};
    }

    log::debug!("VideoCall: rendering room {} for user {}", room_id, user_id);
    let initial = user_name.chars().next().map(String::from).unwrap_or_default();

    rsx! {
        // Backdrop
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_close.call(()),

            // Dialog
            div {
                class: "bg-white rounded-xl p-6 shadow-xl max-w-lg w-full mx-4",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    class: "flex items-center justify-between mb-4",
                    div {
                        class: "flex items-center gap-2",
                        Video {
                            size: 24,
                            color: "#678983",
                            stroke_width: 2
                        }
                        h2 {
                            class: "text-xl font-semibold text-[#181D31]",
                            "Video Call"
                        }
                    }
                    button {
                        class: "p-1 hover:bg-gray-100 rounded-lg transition-colors text-gray-600 text-xl font-medium",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                p {
                    class: "text-sm text-[#181D31]/70 mb-4",
                    "Room: {room_id}"
                }

                // Participant tile
                div {
                    class: "aspect-video bg-slate-800 rounded-lg flex flex-col items-center justify-center gap-2 mb-6",
                    div {
                        class: "w-16 h-16 rounded-full bg-[#678983] text-white text-2xl font-semibold flex items-center justify-center",
                        "{initial}"
                    }
                    div {
                        class: "text-white font-medium",
                        "{user_name}"
                    }
                    div {
                        class: "text-slate-400 text-xs",
                        "{user_id}"
                    }
                }

                button {
                    class: "w-full px-4 py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-all duration-200",
                    onclick: move |_| on_close.call(()),
                    "Leave Call"
                }
            }
        }
    }
}
