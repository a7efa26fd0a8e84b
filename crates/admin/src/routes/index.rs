//! App index: one card per tool.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    response::Redirect,
    routing::get,
};
use serde::Deserialize;

use crate::i18n::Messages;
use crate::routes::extract::FormData;
use crate::state::AppState;

/// Build the index router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/app", get(index).post(select_app))
}

/// Index page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {
    m: &'static Messages,
}

/// Tool selection submitted from an index card.
#[derive(Debug, Deserialize)]
pub struct SelectAppForm {
    #[serde(default, rename = "selectApp")]
    select_app: String,
}

/// Where a tool selection leads.
#[must_use]
pub fn app_path(select_app: &str) -> &'static str {
    match select_app {
        "fulfillmentApp" => "/app/fulfillment",
        "multipassApp" => "/app/multipass",
        _ => "/app",
    }
}

/// GET /
async fn root() -> Redirect {
    Redirect::to("/app")
}

/// GET /app
async fn index(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate {
        m: state.messages(),
    }
}

/// POST /app
async fn select_app(FormData(form): FormData<SelectAppForm>) -> Redirect {
    Redirect::to(app_path(&form.select_app))
}
