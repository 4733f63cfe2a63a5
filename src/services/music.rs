//! Music backends

use super::{BackendReply, MusicBackend};
use crate::detector::MusicParams;
use tracing::warn;

pub const NO_TOKEN_MESSAGE: &str = "Brak tokenu Spotify. Połącz swoje konto Spotify w aplikacji.";

/// Backend used while no Spotify account is linked
#[derive(Debug, Default, Clone, Copy)]
pub struct UnlinkedMusicBackend;

impl MusicBackend for UnlinkedMusicBackend {
    async fn execute(&self, params: &MusicParams) -> BackendReply {
        warn!(action = ?params.action, "music command for Spotify without a linked account");
        BackendReply {
            success: false,
            message: NO_TOKEN_MESSAGE.to_string(),
        }
    }
}
