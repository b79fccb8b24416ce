//! Recording directory fakes for testing.
//!
//! Both fakes append to one shared journal so tests can assert the order of
//! calls across directories.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wrldlink_domain::{CharacterId, GuildId, GuildShortId, ServerId};

use crate::context::Directories;
use crate::infrastructure::ports::{DirectoryError, GuildDirectory, OnlineStatusDirectory};

/// A call observed by one of the recording directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCall {
    SetOnlineState(CharacterId, String, ServerId),
    GuildEnter(GuildId, String, ServerId),
    GuildLeave(GuildId, String, ServerId),
}

type Journal = Arc<Mutex<Vec<DirectoryCall>>>;

fn record(journal: &Journal, call: DirectoryCall) {
    journal.lock().expect("journal poisoned").push(call);
}

pub struct RecordingOnlineStatus {
    journal: Journal,
    failure: Mutex<Option<DirectoryError>>,
}

#[async_trait]
impl OnlineStatusDirectory for RecordingOnlineStatus {
    async fn set_online_state(
        &self,
        character_id: CharacterId,
        character_name: &str,
        server_id: ServerId,
    ) -> Result<(), DirectoryError> {
        if let Some(error) = self.failure.lock().expect("failure poisoned").clone() {
            return Err(error);
        }
        record(
            &self.journal,
            DirectoryCall::SetOnlineState(character_id, character_name.to_string(), server_id),
        );
        Ok(())
    }
}

pub struct RecordingGuildDirectory {
    journal: Journal,
    short_ids: Mutex<HashMap<GuildId, GuildShortId>>,
}

#[async_trait]
impl GuildDirectory for RecordingGuildDirectory {
    async fn member_enter_game(
        &self,
        guild_id: GuildId,
        character_name: &str,
        server_id: ServerId,
    ) -> Result<GuildShortId, DirectoryError> {
        let short_id = self
            .short_ids
            .lock()
            .expect("short ids poisoned")
            .get(&guild_id)
            .copied()
            .ok_or_else(|| DirectoryError::rejected("guild", format!("unknown guild {guild_id}")))?;
        record(
            &self.journal,
            DirectoryCall::GuildEnter(guild_id, character_name.to_string(), server_id),
        );
        Ok(short_id)
    }

    async fn member_leave_game(
        &self,
        guild_id: GuildId,
        character_name: &str,
        server_id: ServerId,
    ) -> Result<(), DirectoryError> {
        record(
            &self.journal,
            DirectoryCall::GuildLeave(guild_id, character_name.to_string(), server_id),
        );
        Ok(())
    }
}

/// Online-status and guild fakes sharing one journal.
pub struct RecordingDirectories {
    journal: Journal,
    online_status: Arc<RecordingOnlineStatus>,
    guild: Arc<RecordingGuildDirectory>,
}

impl RecordingDirectories {
    pub fn new() -> Self {
        let journal: Journal = Arc::new(Mutex::new(Vec::new()));
        Self {
            online_status: Arc::new(RecordingOnlineStatus {
                journal: journal.clone(),
                failure: Mutex::new(None),
            }),
            guild: Arc::new(RecordingGuildDirectory {
                journal: journal.clone(),
                short_ids: Mutex::new(HashMap::new()),
            }),
            journal,
        }
    }

    pub fn handles(&self) -> Directories {
        Directories {
            online_status: self.online_status.clone(),
            guild: self.guild.clone(),
        }
    }

    /// Short id the guild directory hands out for `guild_id` from now on.
    pub fn assign_short_id(&self, guild_id: GuildId, short_id: GuildShortId) {
        self.guild
            .short_ids
            .lock()
            .expect("short ids poisoned")
            .insert(guild_id, short_id);
    }

    /// Make every online-status update fail with `error`.
    pub fn fail_online_status(&self, error: DirectoryError) {
        *self.online_status.failure.lock().expect("failure poisoned") = Some(error);
    }

    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.journal.lock().expect("journal poisoned").clone()
    }
}

impl Default for RecordingDirectories {
    fn default() -> Self {
        Self::new()
    }
}
