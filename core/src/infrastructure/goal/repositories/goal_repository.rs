use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        goal::{entities::GoalSet, ports::GoalRepository},
    },
    infrastructure::json_store::JsonStore,
};

const GOALS_FILE: &str = "goals.json";

#[derive(Debug, Clone)]
pub struct FileGoalRepository {
    pub store: JsonStore,
}

impl FileGoalRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

impl GoalRepository for FileGoalRepository {
    async fn get_goals(&self) -> Result<Option<GoalSet>, CoreError> {
        self.store.read(GOALS_FILE).await
    }

    async fn save_goals(&self, goals: GoalSet) -> Result<(), CoreError> {
        self.store.write(GOALS_FILE, &goals).await
    }
}
