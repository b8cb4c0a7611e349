use crate::location::*;

/// Host chat and toast output.
pub trait ChatChannel {
    /// Send a line to every player in the session.
    fn send_chat_message(&mut self, message: &str);

    /// Show a transient message to the local player only.
    fn show_toast(&mut self, message: &str);
}

pub fn format_alert(prefix: &str, pos: TilePos) -> String {
    format!("{}{}", prefix, pos)
}

/// Broadcast in multiplayer, otherwise toast locally in scarlet.
pub fn send_alert(chat: &mut dyn ChatChannel, net_active: bool, prefix: &str, pos: TilePos) {
    let message = format_alert(prefix, pos);
    if net_active {
        chat.send_chat_message(&message);
    } else {
        chat.show_toast(&format!("[scarlet]{}[]", message));
    }
}
