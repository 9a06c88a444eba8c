use dioxus::prelude::*;
use log::{info, warn};
use futures_util::StreamExt;
use crate::commands::FeedCommand;
use crate::event::{ConnectionStatus, Event};
use crate::feed::{simulate_connect, ConnectionRegistry, FeedConfig};
use super::{EventCard, TitleBanner};

/// Shared with the app through the launch context.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedContext {
    pub config: FeedConfig,
    pub events: Vec<Event>,
}

pub fn App() -> Element {
    let context = use_context::<FeedContext>();

    // Connection status per event; cards only ever read from it
    let registry = use_signal(ConnectionRegistry::default);
    let conversation = use_signal(|| None::<String>);

    let feed_coroutine = use_coroutine({
        let config = context.config.clone();
        let mut registry = registry.clone();
        let mut conversation = conversation.clone();

        move |mut rx: UnboundedReceiver<FeedCommand>| {
            let config = config.clone();

            async move {
                while let Some(command) = rx.next().await {
                    info!("Feed coroutine: processing command {:?}", command);

                    match command {
                        FeedCommand::Connect { event_id } => {
                            let requested = registry.write().request(&event_id);
                            match requested {
                                Ok(()) => {
                                    info!("Connection requested for event {}", event_id);
                                    let latency = config.connect_latency;
                                    let accepted = config.accepts_connection(&event_id);

                                    spawn(async move {
                                        let outcome = simulate_connect(latency, accepted).await;
                                        let accepted = outcome == ConnectionStatus::Success;
                                        let resolved =
                                            registry.write().resolve(&event_id, accepted);
                                        match resolved {
                                            Ok(status) => info!(
                                                "Connection for event {} resolved as {:?}",
                                                event_id, status
                                            ),
                                            Err(e) => warn!("Dropping connection outcome: {}", e),
                                        }
                                    });
                                }
                                Err(e) => warn!("Ignoring connect request: {}", e),
                            }
                        }

                        FeedCommand::Message { event_id } => {
                            info!("Opening conversation for event {}", event_id);
                            conversation.set(Some(event_id));
                        }

                        FeedCommand::CloseConversation => {
                            conversation.set(None);
                        }
                    }
                }
            }
        }
    });

    let active_conversation = conversation
        .read()
        .as_ref()
        .and_then(|id| context.events.iter().find(|event| &event.id == id))
        .map(|event| event.user.name.clone());

    let conversation_bar = match active_conversation {
        Some(name) => {
            let close = feed_coroutine.clone();
            rsx! {
                div {
                    class: "mx-5 mb-4 bg-white rounded-xl px-6 py-3 shadow-sm border border-[#E6DDC4] flex justify-between items-center",
                    div {
                        class: "font-medium text-[#181D31] text-sm",
                        "Messaging {name}"
                    }
                    button {
                        class: "px-4 py-2 bg-[#678983] hover:bg-[#678983]/90 text-white rounded-md text-xs font-medium transition-colors",
                        onclick: move |_| close.send(FeedCommand::CloseConversation),
                        "Close"
                    }
                }
            }
        }
        None => rsx! {},
    };

    let cards = context.events.iter().map(|event| {
        let connect = feed_coroutine.clone();
        let message = feed_coroutine.clone();

        rsx! {
            EventCard {
                key: "{event.id}",
                event: event.clone(),
                on_connect: move |event_id: String| connect.send(FeedCommand::Connect { event_id }),
                on_message: move |event_id: String| message.send(FeedCommand::Message { event_id }),
                connection_status: registry.read().status(&event.id),
                is_current_user: context.config.is_viewer(event)
            }
        }
    });

    rsx! {
        div {
            class: "font-sans min-h-screen bg-[#F0E9D2] m-0 p-0 flex flex-col",

            TitleBanner {
                viewer_name: context.config.viewer_name.clone()
            }

            {conversation_bar}

            div {
                class: "px-5 pb-6 grid gap-4 md:grid-cols-2",
                {cards}
            }
        }
    }
}
