use crate::calculation::usage::RepoUsage;
use crate::prelude::*;

const HEADER: [&str; 3] = ["Repo", "Workflow", "Milliseconds"];

/// Placeholder workflow for repositories that have none, so they still show up.
const NO_WORKFLOW: &str = "n/a";

/// Tab separated, one row per workflow, raw milliseconds so it sorts.
pub fn render(usage: &RepoUsage) -> AppResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false) // Written by hand below.
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);

    writer
        .write_record(HEADER)
        .into_diagnostic()
        .wrap_err("Failed to write TSV header")?;

    for (repository, workflow_usage) in usage.iter() {
        if workflow_usage.is_empty() {
            writer
                .write_record([repository.full_name.as_str(), NO_WORKFLOW, "0"])
                .into_diagnostic()
                .wrap_err("Failed to write TSV row")?;
            continue;
        }

        for (workflow, total_ms) in workflow_usage.iter() {
            writer
                .write_record([
                    repository.full_name.as_str(),
                    workflow.path.as_str(),
                    total_ms.to_string().as_str(),
                ])
                .into_diagnostic()
                .wrap_err("Failed to write TSV row")?;
        }
    }

    let data = writer
        .into_inner()
        .into_diagnostic()
        .wrap_err("Failed to get writer data.")?;

    let tsv_string = String::from_utf8(data)
        .into_diagnostic()
        .wrap_err("Invalid utf-8")?;

    Ok(tsv_string)
}
