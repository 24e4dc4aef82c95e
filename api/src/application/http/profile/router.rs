use super::handlers::{
    add_allergen::{__path_add_allergen, add_allergen},
    add_avoided_ingredient::{__path_add_avoided_ingredient, add_avoided_ingredient},
    get_allergens::{__path_get_allergens, get_allergens},
    get_diet::{__path_get_diet, get_diet},
    get_profile::{__path_get_profile, get_profile},
    remove_allergen::{__path_remove_allergen, remove_allergen},
    remove_avoided_ingredient::{__path_remove_avoided_ingredient, remove_avoided_ingredient},
    set_allergens::{__path_set_allergens, set_allergens},
    set_diet::{__path_set_diet, set_diet},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_profile,
    get_diet,
    set_diet,
    get_allergens,
    set_allergens,
    add_allergen,
    remove_allergen,
    add_avoided_ingredient,
    remove_avoided_ingredient
))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profile", state.args.server.root_path),
            get(get_profile),
        )
        .route(
            &format!("{}/profile/diet", state.args.server.root_path),
            get(get_diet).put(set_diet),
        )
        .route(
            &format!("{}/profile/allergens", state.args.server.root_path),
            get(get_allergens).put(set_allergens),
        )
        .route(
            &format!("{}/profile/allergens/{{name}}", state.args.server.root_path),
            post(add_allergen).delete(remove_allergen),
        )
        .route(
            &format!("{}/profile/avoided/{{term}}", state.args.server.root_path),
            post(add_avoided_ingredient).delete(remove_avoided_ingredient),
        )
}
