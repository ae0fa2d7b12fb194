mod admin;
mod audio;
mod covers;
mod entities;
mod media;
mod overrides;
mod session;

pub use admin::{admin_purge_uploads, health};
pub use audio::{get_audio, play_audio, set_external_event, stop_audio};
pub use covers::{get_cover, put_cover};
pub use entities::{
    get_member, get_member_media, get_memory, get_memory_media, list_members, list_memories,
};
pub use media::{create_media, delete_media, list_media, media_updates, update_media};
pub use overrides::{hide_static, list_hidden_static, list_static_captions, put_static_caption};
pub use session::create_session;
