//! Event formatting utilities for client display.

use petri_server::{
    domain::{ConnectionId, EnvironmentState, Mold},
    infrastructure::dto::websocket::{MessageDto, ServerEvent},
};
use petri_shared::time::timestamp_to_clock_time;

use super::domain::CultureView;

const RULE: &str = "============================================================";

/// Event formatter for client display
pub struct EventFormatter;

impl EventFormatter {
    /// Format any server event, after it has been applied to `view`
    pub fn format_event(event: &ServerEvent, view: &CultureView) -> String {
        match event {
            ServerEvent::Welcome { id, messages, .. } => {
                Self::format_welcome(*id, view, messages)
            }
            ServerEvent::Connected { id } => Self::format_connected(*id),
            ServerEvent::Disconnected { id } => Self::format_disconnected(*id),
            ServerEvent::ServerMessage(message) => {
                Self::format_server_message(message, view.own_id)
            }
            ServerEvent::EnvironmentUpdate(_) => Self::format_environment(&view.environment),
            ServerEvent::MoldPlaced { .. } => Self::format_molds(&view.molds),
            ServerEvent::ClearDish {} => "\n~ the dish was wiped clean\n".to_string(),
        }
    }

    /// Format the welcome banner with the message log replayed below it
    pub fn format_welcome(id: u64, view: &CultureView, messages: &[MessageDto]) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", RULE));
        output.push_str(&format!("You are #{}\n", id));
        output.push_str(&format!("Also here: {}\n", Self::format_ids(view)));
        if !messages.is_empty() {
            output.push_str("Earlier messages:\n");
            for message in messages {
                output.push_str(&Self::format_message_line(message, view.own_id));
            }
        }
        output.push_str(&format!("{}\n", RULE));
        output
    }

    pub fn format_connected(id: u64) -> String {
        format!("\n+ #{} joined\n", id)
    }

    pub fn format_disconnected(id: u64) -> String {
        format!("\n- #{} left\n", id)
    }

    /// Format a relayed message
    pub fn format_server_message(message: &MessageDto, own_id: Option<ConnectionId>) -> String {
        format!("\n{}", Self::format_message_line(message, own_id))
    }

    fn format_message_line(message: &MessageDto, own_id: Option<ConnectionId>) -> String {
        let me_suffix = if own_id.map(|id| id.value()) == Some(message.sender) {
            " (me)"
        } else {
            ""
        };
        format!(
            "[{}] #{}{}: {}\n",
            timestamp_to_clock_time(message.time),
            message.sender,
            me_suffix,
            message.content
        )
    }

    /// Format the environment sliders and the size a new mold would reach
    pub fn format_environment(environment: &EnvironmentState) -> String {
        format!(
            "\n~ environment {} / time {} / temperature {} (new molds grow to {:.1})\n",
            environment.environment,
            environment.time,
            environment.temperature,
            environment.mold_size()
        )
    }

    pub fn format_molds(molds: &[Mold]) -> String {
        match molds.len() {
            0 => "\n~ the dish is empty\n".to_string(),
            1 => "\n~ the dish holds 1 mold\n".to_string(),
            n => format!("\n~ the dish holds {} molds\n", n),
        }
    }

    /// Format the local view for `/status`
    pub fn format_status(view: &CultureView) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", RULE));
        match view.own_id {
            Some(id) => output.push_str(&format!("You are #{}\n", id)),
            None => output.push_str("Not welcomed yet\n"),
        }
        output.push_str(&format!("Also here: {}\n", Self::format_ids(view)));
        output.push_str(&format!(
            "Environment: {} / time {} / temperature {}\n",
            view.environment.environment, view.environment.time, view.environment.temperature
        ));
        output.push_str(&format!("Molds: {}\n", view.molds.len()));
        for mold in &view.molds {
            output.push_str(&format!(
                "  {} at ({:.1}, {:.1}) size {:.1}\n",
                mold.mold_type.name().unwrap_or("unknown mold"),
                mold.x,
                mold.y,
                mold.size
            ));
        }
        output.push_str(&format!("Messages: {}\n", view.message_count));
        output.push_str(&format!("{}\n", RULE));
        output
    }

    pub fn format_help() -> String {
        "\nCommands:\n\
         \x20 <text>                               send a message\n\
         \x20 /env <environment> <time> <temperature>  set the environment (0-100 each)\n\
         \x20 /place <x> <y> [type]                place a mold (type 0-5)\n\
         \x20 /clear                               wipe the dish\n\
         \x20 /status                              show what this client knows\n\
         \x20 /help                                show this list\n"
            .to_string()
    }

    /// Format a frame that is not a known server event
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }

    fn format_ids(view: &CultureView) -> String {
        if view.connected.is_empty() {
            return "(nobody)".to_string();
        }
        view.connected
            .iter()
            .map(|id| format!("#{}", id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
