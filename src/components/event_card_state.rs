use crate::event::{ConnectionStatus, EventType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonStyle {
    Primary,
    Outline,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BadgeStyle {
    Learn,
    Teach,
    Relevant,
    Level,
}

/// Everything the card shows that depends on its inputs rather than on the
/// event text itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventCardState {
    pub type_label: &'static str,
    pub type_style: BadgeStyle,
    pub relevance_visible: bool,
    pub connect_visible: bool,
    pub connect_enabled: bool,
    pub connect_label: &'static str,
    pub message_enabled: bool,
    pub call_icon_visible: bool,
    pub call_icon_enabled: bool,
    pub call_tooltip: &'static str,
    pub start_call_visible: bool,
    pub start_call_enabled: bool,
}

pub const START_CALL_TOOLTIP: &str = "Start Video Call";
pub const CONNECT_FIRST_TOOLTIP: &str = "Connect first to start video call";

impl EventCardState {
    pub fn from_props(
        kind: EventType,
        is_relevant: bool,
        status: ConnectionStatus,
        is_current_user: bool,
    ) -> Self {
        let (type_label, type_style) = match kind {
            EventType::Learn => (kind.label(), BadgeStyle::Learn),
            EventType::Teach => (kind.label(), BadgeStyle::Teach),
        };

        if is_current_user {
            return Self {
                type_label,
                type_style,
                relevance_visible: is_relevant,
                connect_visible: false,
                connect_enabled: false,
                connect_label: "Connect",
                message_enabled: true,
                call_icon_visible: false,
                call_icon_enabled: false,
                call_tooltip: START_CALL_TOOLTIP,
                start_call_visible: true,
                start_call_enabled: true,
            };
        }

        // Error has no treatment of its own and reads as idle
        let (connect_label, connect_enabled) = match status {
            ConnectionStatus::Pending => ("Requesting...", false),
            ConnectionStatus::Success => ("Requested", false),
            ConnectionStatus::Idle | ConnectionStatus::Error => ("Connect", true),
        };
        let call_icon_enabled = status == ConnectionStatus::Success;

        Self {
            type_label,
            type_style,
            relevance_visible: is_relevant,
            connect_visible: true,
            connect_enabled,
            connect_label,
            message_enabled: true,
            call_icon_visible: true,
            call_icon_enabled,
            call_tooltip: if call_icon_enabled {
                START_CALL_TOOLTIP
            } else {
                CONNECT_FIRST_TOOLTIP
            },
            start_call_visible: false,
            start_call_enabled: false,
        }
    }

    /// True when some visible control is allowed to open the call overlay.
    pub fn can_start_call(&self) -> bool {
        (self.call_icon_visible && self.call_icon_enabled)
            || (self.start_call_visible && self.start_call_enabled)
    }

    pub fn get_button_class(&self, style: &ButtonStyle) -> &'static str {
        match style {
            ButtonStyle::Primary => "inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md text-sm font-medium bg-[#678983] hover:bg-[#678983]/90 text-white transition-colors",
            ButtonStyle::Outline => "inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md text-sm font-medium border border-[#678983] text-[#678983] hover:bg-[#678983] hover:text-white transition-colors",
            ButtonStyle::Disabled => "inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md text-sm font-medium border border-[#678983]/40 text-[#678983]/50 opacity-50 cursor-not-allowed",
        }
    }

    pub fn get_badge_class(&self, style: &BadgeStyle) -> &'static str {
        match style {
            BadgeStyle::Learn => "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-semibold bg-blue-100 text-blue-700",
            BadgeStyle::Teach => "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-semibold bg-green-100 text-green-700",
            BadgeStyle::Relevant => "inline-flex items-center gap-1 px-2.5 py-0.5 rounded-full text-xs font-semibold bg-[#678983] text-white",
            BadgeStyle::Level => "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-semibold border border-[#678983] text-[#678983]",
        }
    }

    pub fn connect_style(&self) -> ButtonStyle {
        if self.connect_enabled {
            ButtonStyle::Primary
        } else {
            ButtonStyle::Disabled
        }
    }

    pub fn call_icon_style(&self) -> ButtonStyle {
        if self.call_icon_enabled {
            ButtonStyle::Outline
        } else {
            ButtonStyle::Disabled
        }
    }
}

/// Open/closed flag for the video call overlay of one card.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CallOverlay {
    is_open: bool,
}

impl CallOverlay {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Opens the overlay if `allowed`. Returns whether it is open afterwards.
    pub fn open(&mut self, allowed: bool) -> bool {
        if allowed {
            self.is_open = true;
        }
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}
