use crate::cli::CssToggle;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::layout::PatchOutcome;
use crate::output::Severity;

pub fn run(ctx: &AppContext, toggle: CssToggle) -> AppResult<PatchOutcome> {
    let patcher = ctx.layout_patcher();
    let outcome = match toggle {
        CssToggle::Yes => patcher.add_css_imports()?,
        CssToggle::No => patcher.remove_css_imports()?,
    };

    let layout = ctx.display_path(patcher.path());
    let (severity, message) = describe(outcome, &layout);
    ctx.output.notice(severity, &message)?;
    Ok(outcome)
}

fn describe(outcome: PatchOutcome, layout: &str) -> (Severity, String) {
    match outcome {
        PatchOutcome::Inserted => (Severity::Success, format!("Added css import to {layout}")),
        PatchOutcome::Removed => (
            Severity::Success,
            format!("Removed css import from {layout}"),
        ),
        PatchOutcome::AlreadyPresent => (
            Severity::Info,
            format!("[css] - import already present in {layout}"),
        ),
        PatchOutcome::NotPresent => (
            Severity::Info,
            format!("[css] - no import to remove in {layout}"),
        ),
        PatchOutcome::MarkerMissing => (
            Severity::Warning,
            format!("[css] - marker comment not found in {layout}, skipped"),
        ),
        PatchOutcome::LayoutMissing => (
            Severity::Error,
            format!("[css] - {layout} is not found, skipped"),
        ),
    }
}
