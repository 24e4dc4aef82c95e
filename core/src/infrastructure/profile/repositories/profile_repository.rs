use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::UserProfile, ports::ProfileRepository},
    },
    infrastructure::json_store::JsonStore,
};

const PROFILE_FILE: &str = "profile.json";

#[derive(Debug, Clone)]
pub struct FileProfileRepository {
    pub store: JsonStore,
}

impl FileProfileRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

impl ProfileRepository for FileProfileRepository {
    async fn get_profile(&self) -> Result<Option<UserProfile>, CoreError> {
        self.store.read(PROFILE_FILE).await
    }

    async fn save_profile(&self, profile: UserProfile) -> Result<(), CoreError> {
        self.store.write(PROFILE_FILE, &profile).await
    }
}
