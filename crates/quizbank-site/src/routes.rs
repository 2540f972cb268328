//! Route table.

use axum::Router;
use axum::routing::{get, post, put};

use crate::assets::{SCRIPT_PATH, STYLESHEET_PATH};
use crate::error::SiteError;
use crate::handlers::{admin, data, pages, static_files, theme};
use crate::state::SiteState;

/// Build the site router. Admin routes are only mounted when
/// `admin_enabled` is set.
pub fn build_router(state: SiteState) -> Router {
    let mut router = Router::new()
        .route("/", get(pages::home))
        .route("/t/{slug}", get(pages::topic))
        .route("/search", get(pages::search))
        .route("/data/topics.json", get(data::topics))
        .route("/data/{file}", get(data::topic))
        .route("/theme", post(theme::toggle))
        .route(STYLESHEET_PATH, get(static_files::stylesheet))
        .route(SCRIPT_PATH, get(static_files::script));

    if state.settings().admin_enabled {
        router = router.merge(admin_routes());
    }

    router
        .fallback(|| async { SiteError::not_found("page") })
        .with_state(state)
}

fn admin_routes() -> Router<SiteState> {
    Router::new()
        .route("/admin", get(admin::editor))
        .route("/admin/questions", post(admin::add_question))
        .route("/admin/apply", post(admin::apply))
        .route("/admin/questions/{id}/delete", post(admin::delete_question))
        .route("/admin/save", post(admin::save))
        .route("/admin/backup", get(admin::backup))
        .route("/admin/toolbar", post(admin::toolbar))
        .route("/admin/paste", post(admin::paste))
        .route("/api/topics/{slug}", put(admin::save_topic))
}
