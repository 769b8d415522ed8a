use crate::calculation::usage::RepoUsage;

use super::humanize::humanize;

/// One block per repository, one line per workflow, blank line after each block.
pub fn render(usage: &RepoUsage) -> String {
    let mut output = String::new();

    for (repository, workflow_usage) in usage.iter() {
        if workflow_usage.is_empty() {
            output.push_str(&format!("{} (0 workflows; 0ms)\n", repository.full_name));
        } else {
            output.push_str(&format!(
                "{} ({} workflows; {}):\n",
                repository.full_name,
                workflow_usage.len(),
                humanize(workflow_usage.total_ms())
            ));

            for (workflow, total_ms) in workflow_usage.iter() {
                output.push_str(&format!(
                    "- {} ({}, {}, {})\n",
                    workflow.name,
                    workflow.path,
                    workflow.state,
                    humanize(total_ms)
                ));
            }
        }

        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::usage::WorkflowUsage;
    use crate::io::github_client::{Repository, Workflow};

    fn repo(full_name: &str) -> Repository {
        Repository {
            id: 1,
            name: full_name.rsplit('/').next().unwrap().to_owned(),
            full_name: full_name.to_owned(),
            owner: None,
        }
    }

    fn workflow(id: u64, name: &str, path: &str, state: &str) -> Workflow {
        Workflow {
            id,
            name: name.to_owned(),
            path: path.to_owned(),
            state: state.to_owned(),
        }
    }

    #[test]
    fn single_workflow() {
        let mut usage = RepoUsage::default();
        usage.insert(
            repo("codiform/gh-actions-usage"),
            [(workflow(1, "CI", ".github/workflows/ci.yml", "active"), 50)]
                .into_iter()
                .collect(),
        );

        assert_eq!(
            render(&usage),
            "codiform/gh-actions-usage (1 workflows; 50ms):\n- CI (.github/workflows/ci.yml, active, 50ms)\n\n"
        );
    }

    #[test]
    fn repository_without_workflows() {
        let mut usage = RepoUsage::default();
        usage.insert(repo("octocat/Moo"), WorkflowUsage::default());

        assert_eq!(render(&usage), "octocat/Moo (0 workflows; 0ms)\n\n");
    }

    #[test]
    fn repository_total_is_humanized() {
        let mut usage = RepoUsage::default();
        usage.insert(
            repo("octocat/busy"),
            [
                (workflow(1, "Build", "build.yml", "active"), 61_000),
                (workflow(2, "Nightly", "nightly.yml", "disabled_manually"), 500),
            ]
            .into_iter()
            .collect(),
        );

        assert_eq!(
            render(&usage),
            "octocat/busy (2 workflows; 1m 1s):\n\
             - Build (build.yml, active, 1m 1s)\n\
             - Nightly (nightly.yml, disabled_manually, 500ms)\n\n"
        );
    }

    #[test]
    fn nothing_to_report_is_empty() {
        assert_eq!(render(&RepoUsage::default()), "");
    }
}
