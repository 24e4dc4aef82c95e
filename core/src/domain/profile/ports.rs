use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::UserProfile};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_profile(&self) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn save_profile(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Every mutation returns the profile as it stands afterwards.
pub trait ProfileService: Send + Sync {
    fn get_profile(&self) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn set_diet(&self, diet: String) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn add_allergen(
        &self,
        name: String,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn remove_allergen(
        &self,
        name: String,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn set_allergens(
        &self,
        names: Vec<String>,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn add_avoided_ingredient(
        &self,
        term: String,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn remove_avoided_ingredient(
        &self,
        term: String,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}
