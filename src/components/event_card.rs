use dioxus::prelude::*;
use lucide_dioxus::{Clock, MapPin, MessageCircle, Star, Video};
use crate::event::{ConnectionStatus, Event};
use crate::components::VideoCall;
use crate::components::event_card_state::{BadgeStyle, ButtonStyle, CallOverlay, EventCardState};

/// Forwards `event_id` to `handler` when the control is enabled.
fn forward_action(handler: EventHandler<String>, enabled: bool, event_id: &str) -> bool {
    if enabled {
        handler.call(event_id.to_string());
    }
    enabled
}

fn open_call_overlay(mut overlay: Signal<CallOverlay>, allowed: bool) -> bool {
    let opened = overlay.write().open(allowed);
    if opened {
        log::info!("Opening video call");
    }
    opened
}

fn close_call_overlay(mut overlay: Signal<CallOverlay>) {
    if overlay.peek().is_open() {
        log::info!("Closing video call");
        overlay.write().close();
    }
}

#[component]
pub fn EventCard(
    event: Event,
    on_connect: EventHandler<String>,
    on_message: EventHandler<String>,
    #[props(default)] connection_status: ConnectionStatus,
    #[props(default)] is_current_user: bool
) -> Element {
    let overlay = use_signal(CallOverlay::default);

    let card_state = EventCardState::from_props(
        event.kind,
        event.is_relevant,
        connection_status,
        is_current_user,
    );

    let avatar = match event.user.avatar_image() {
        Some(src) => rsx! {
            img {
                class: "w-10 h-10 rounded-full object-cover",
                src: "{src}",
                alt: "{event.user.name}"
            }
        },
        None => {
            let fallback = event.user.avatar_fallback();
            rsx! {
                span {
                    class: "w-10 h-10 rounded-full bg-[#E6DDC4] text-[#181D31] font-medium flex items-center justify-center",
                    "{fallback}"
                }
            }
        }
    };

    let open_call = move |_: MouseEvent| {
        open_call_overlay(overlay, card_state.can_start_call());
    };

    let connect_id = event.id.clone();
    let message_id = event.id.clone();
    let author_message_id = event.id.clone();
    let schedule = event.schedule_label();

    rsx! {
        div {
            class: "bg-white rounded-xl border border-[#E6DDC4] hover:border-[#678983] transition-colors shadow-sm",

            // Header
            div {
                class: "px-6 pt-6 pb-2",
                div {
                    class: "flex items-center space-x-2",
                    {avatar}
                    div {
                        p {
                            class: "font-medium text-[#181D31]",
                            "{event.user.name}"
                        }
                        div {
                            class: "flex items-center text-sm text-[#181D31]/70 gap-1",
                            MapPin {
                                size: 12,
                                color: "currentColor",
                                stroke_width: 2
                            }
                            "{event.user.location}"
                        }
                    }
                }
            }

            div {
                class: "px-6 pb-6 space-y-4",

                // Badges
                div {
                    class: "flex items-center justify-between",
                    span {
                        class: card_state.get_badge_class(&card_state.type_style),
                        "{card_state.type_label}"
                    }
                    if card_state.relevance_visible {
                        span {
                            class: card_state.get_badge_class(&BadgeStyle::Relevant),
                            Star {
                                size: 12,
                                color: "currentColor",
                                stroke_width: 2
                            }
                            "Matches Your Skills"
                        }
                    }
                }

                // Body
                div {
                    h3 {
                        class: "font-semibold text-lg text-[#181D31] mb-1",
                        "{event.skill.name}"
                    }
                    p {
                        class: "text-[#181D31]/70 text-sm",
                        "{event.description}"
                    }
                }

                // Meta row
                div {
                    class: "flex items-center justify-between text-sm text-[#181D31]/70",
                    div {
                        class: "flex items-center gap-1",
                        Clock {
                            size: 16,
                            color: "currentColor",
                            stroke_width: 2
                        }
                        "{schedule}"
                    }
                    span {
                        class: card_state.get_badge_class(&BadgeStyle::Level),
                        "{event.level}"
                    }
                }

                // Actions
                div {
                    class: "flex items-center space-x-2",
                    if card_state.connect_visible {
                        button {
                            class: format!(
                                "flex-1 {}",
                                card_state.get_button_class(&card_state.connect_style())
                            ),
                            disabled: !card_state.connect_enabled,
                            onclick: move |_| {
                                forward_action(on_connect, card_state.connect_enabled, &connect_id);
                            },
                            Video {
                                size: 16,
                                color: "currentColor",
                                stroke_width: 2
                            }
                            "{card_state.connect_label}"
                        }
                        button {
                            class: format!("flex-1 {}", card_state.get_button_class(&ButtonStyle::Outline)),
                            onclick: move |_| {
                                forward_action(on_message, card_state.message_enabled, &message_id);
                            },
                            MessageCircle {
                                size: 16,
                                color: "currentColor",
                                stroke_width: 2
                            }
                            "Message"
                        }
                        button {
                            class: card_state.get_button_class(&card_state.call_icon_style()),
                            disabled: !card_state.call_icon_enabled,
                            title: card_state.call_tooltip,
                            onclick: open_call,
                            Video {
                                size: 16,
                                color: "currentColor",
                                stroke_width: 2
                            }
                        }
                    } else {
                        button {
                            class: format!("flex-1 {}", card_state.get_button_class(&ButtonStyle::Outline)),
                            onclick: move |_| {
                                forward_action(
                                    on_message,
                                    card_state.message_enabled,
                                    &author_message_id,
                                );
                            },
                            MessageCircle {
                                size: 16,
                                color: "currentColor",
                                stroke_width: 2
                            }
                            "Message"
                        }
                        button {
                            class: format!("flex-1 {}", card_state.get_button_class(&ButtonStyle::Outline)),
                            title: card_state.call_tooltip,
                            onclick: open_call,
                            Video {
                                size: 16,
                                color: "currentColor",
                                stroke_width: 2
                            }
                            "Start Call"
                        }
                    }
                }
            }
        }

        // Identity is the event owner's on both layouts
        VideoCall {
            is_open: overlay.read().is_open(),
            on_close: move |_| close_call_overlay(overlay),
            room_id: event.id.clone(),
            user_id: event.user.id.clone(),
            user_name: event.user.name.clone()
        }
    }
}
