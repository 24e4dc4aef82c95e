use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        services::{load_for_update, load_or_else, Service},
    },
    goal::ports::{GoalRepository, IntakeLedgerRepository},
    history::ports::HistoryRepository,
    profile::{
        entities::UserProfile,
        ports::{ProfileRepository, ProfileService},
    },
};

impl<P, G, L, H> Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    pub(crate) async fn load_profile(&self) -> UserProfile {
        load_or_else(
            "profile",
            self.profile_repository.get_profile(),
            UserProfile::default,
        )
        .await
    }

    /// Applies `change` to the stored profile and saves it when `change`
    /// reports a modification. Errors leave the store untouched.
    async fn update_profile<F>(&self, change: F) -> Result<UserProfile, CoreError>
    where
        F: FnOnce(&mut UserProfile) -> Result<bool, CoreError> + Send,
    {
        let mut profile = load_for_update(
            "profile",
            self.profile_repository.get_profile(),
            UserProfile::default,
        )
        .await;

        if change(&mut profile.value)? {
            profile
                .save(
                    "profile",
                    self.profile_repository.save_profile(profile.value.clone()),
                )
                .await;
        }

        Ok(profile.value)
    }
}

impl<P, G, L, H> ProfileService for Service<P, G, L, H>
where
    P: ProfileRepository,
    G: GoalRepository,
    L: IntakeLedgerRepository,
    H: HistoryRepository,
{
    #[instrument(skip(self))]
    async fn get_profile(&self) -> Result<UserProfile, CoreError> {
        Ok(self.load_profile().await)
    }

    #[instrument(skip(self))]
    async fn set_diet(&self, diet: String) -> Result<UserProfile, CoreError> {
        let profile = self
            .update_profile(|profile| {
                profile.set_diet(&diet, &self.reference_data.diets)?;
                Ok(true)
            })
            .await?;

        info!(diet = %profile.diet, "diet updated");
        Ok(profile)
    }

    #[instrument(skip(self))]
    async fn add_allergen(&self, name: String) -> Result<UserProfile, CoreError> {
        let profile = self
            .update_profile(|profile| profile.add_allergen(&name, &self.reference_data.allergens))
            .await?;

        info!(allergen = %name, count = profile.allergens.len(), "allergen added");
        Ok(profile)
    }

    #[instrument(skip(self))]
    async fn remove_allergen(&self, name: String) -> Result<UserProfile, CoreError> {
        let profile = self
            .update_profile(|profile| Ok(profile.remove_allergen(&name)))
            .await?;

        info!(allergen = %name, count = profile.allergens.len(), "allergen removed");
        Ok(profile)
    }

    #[instrument(skip(self))]
    async fn set_allergens(&self, names: Vec<String>) -> Result<UserProfile, CoreError> {
        let profile = self
            .update_profile(|profile| {
                profile.set_allergens(&names, &self.reference_data.allergens)?;
                Ok(true)
            })
            .await?;

        info!(count = profile.allergens.len(), "allergens replaced");
        Ok(profile)
    }

    #[instrument(skip(self))]
    async fn add_avoided_ingredient(&self, term: String) -> Result<UserProfile, CoreError> {
        let profile = self
            .update_profile(|profile| profile.add_avoided_ingredient(&term))
            .await?;

        info!(count = profile.avoided_ingredients.len(), "avoided ingredient added");
        Ok(profile)
    }

    #[instrument(skip(self))]
    async fn remove_avoided_ingredient(&self, term: String) -> Result<UserProfile, CoreError> {
        let profile = self
            .update_profile(|profile| Ok(profile.remove_avoided_ingredient(&term)))
            .await?;

        info!(count = profile.avoided_ingredients.len(), "avoided ingredient removed");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tests::{service_in, TestStore};

    #[tokio::test]
    async fn profile_changes_are_persisted() {
        let store = TestStore::new();
        let service = service_in(&store);

        service.set_diet("Vegan".to_string()).await.unwrap();
        service.add_allergen("milk".to_string()).await.unwrap();
        service.add_allergen("wheat".to_string()).await.unwrap();
        service.add_avoided_ingredient("Palm Oil".to_string()).await.unwrap();

        let profile = service_in(&store).get_profile().await.unwrap();
        assert_eq!(profile.diet, "vegan");
        assert_eq!(profile.allergens.iter().collect::<Vec<_>>(), vec!["milk", "wheat"]);
        assert!(profile.avoided_ingredients.contains("palm oil"));
        assert!(profile.updated_at.is_some());
    }

    #[tokio::test]
    async fn rejected_change_is_not_saved() {
        let store = TestStore::new();
        let service = service_in(&store);
        service.set_diet("keto".to_string()).await.unwrap();

        let result = service.set_diet("fruitarian".to_string()).await;

        assert_eq!(result, Err(CoreError::UnknownDiet("fruitarian".to_string())));
        assert_eq!(service.get_profile().await.unwrap().diet, "keto");
    }

    #[tokio::test]
    async fn missing_profile_reads_as_default() {
        let store = TestStore::new();
        let profile = service_in(&store).get_profile().await.unwrap();
        assert_eq!(profile, UserProfile::default());
    }

    #[tokio::test]
    async fn remove_allergen_round_trip() {
        let store = TestStore::new();
        let service = service_in(&store);

        service
            .set_allergens(vec!["eggs".to_string(), "fish".to_string()])
            .await
            .unwrap();
        let profile = service.remove_allergen("eggs".to_string()).await.unwrap();
        assert_eq!(profile.allergens.iter().collect::<Vec<_>>(), vec!["fish"]);

        let unchanged = service.remove_allergen("eggs".to_string()).await.unwrap();
        assert_eq!(unchanged.allergens, profile.allergens);
    }

    #[tokio::test]
    async fn unreadable_profile_is_not_overwritten() {
        let store = TestStore::new();
        store.write_raw("profile.json", "{\"diet\": \"keto\", \"allerg");
        let service = service_in(&store);

        let profile = service.add_allergen("milk".to_string()).await.unwrap();

        assert!(profile.allergens.contains("milk"));
        assert_eq!(
            std::fs::read_to_string(store.root.join("profile.json")).unwrap(),
            "{\"diet\": \"keto\", \"allerg"
        );
    }
}
