use kw_core::enums::AiModel;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ModelStatus {
    model: AiModel,
    name: &'static str,
    selected: bool,
    configured: bool,
}

/// Handle `kw model [NAME]`.
pub async fn handle(name: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = ctx.session()?;
    if let Some(name) = name {
        session.model = name.parse()?;
        ctx.save(&session)?;
        if !ctx.ai.is_available(session.model) {
            tracing::warn!(model = %session.model, "selected model has no API key configured");
        }
    }

    let statuses = AiModel::ALL
        .into_iter()
        .map(|model| ModelStatus {
            model,
            name: model.as_str(),
            selected: model == session.model,
            configured: ctx.ai.is_available(model),
        })
        .collect::<Vec<_>>();
    output(&statuses, flags.format)
}
