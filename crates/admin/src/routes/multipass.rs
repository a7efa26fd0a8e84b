//! Multipass tool pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use merchant_tools_core::FormState;

use crate::error::AppError;
use crate::i18n::Messages;
use crate::routes::ActionView;
use crate::routes::extract::FormData;
use crate::services::{ActionData, generate_login_url};
use crate::state::AppState;

/// Build the multipass router.
pub fn router() -> Router<AppState> {
    Router::new().route("/app/multipass", get(show).post(generate))
}

/// Input of the multipass form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipassForm {
    #[serde(default, rename = "secretKey")]
    pub secret_key: String,
    #[serde(default, rename = "mailAddress")]
    pub mail_address: String,
}

/// Multipass page template.
#[derive(Template, WebTemplate)]
#[template(path = "multipass.html")]
struct MultipassTemplate {
    m: &'static Messages,
    form: FormState<MultipassForm>,
    action: ActionView,
}

/// GET /app/multipass
async fn show(State(state): State<AppState>) -> MultipassTemplate {
    MultipassTemplate {
        m: state.messages(),
        form: FormState::default(),
        action: ActionView::default(),
    }
}

/// POST /app/multipass
async fn generate(
    State(state): State<AppState>,
    FormData(input): FormData<MultipassForm>,
) -> Result<MultipassTemplate, AppError> {
    let mut form: FormState<MultipassForm> = FormState::default();
    form.edit(input);
    let submitted = form.save();

    let login =
        generate_login_url(state.shopify(), &submitted.secret_key, &submitted.mail_address)
            .await?;

    Ok(MultipassTemplate {
        m: state.messages(),
        form,
        action: ActionView::from(&ActionData::from(login)),
    })
}
