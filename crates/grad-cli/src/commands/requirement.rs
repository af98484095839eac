use grad_core::views::requirements::{ApplicantScores, check_requirement};
use grad_db::repos::RequirementInput;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RequirementCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gradt requirement`.
pub async fn handle(
    action: &RequirementCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RequirementCommands::Set {
            university_id,
            gre,
            toefl,
            gpa,
            background,
            notes,
        } => {
            let input = RequirementInput {
                gre: *gre,
                toefl: *toefl,
                gpa: *gpa,
                background: background.clone(),
                notes: notes.clone(),
            };
            let requirement = ctx.service.upsert_requirement(university_id, &input).await?;
            output(&requirement, flags.format)
        }
        RequirementCommands::Get { university_id } => {
            let requirement = ctx
                .service
                .get_requirement_for_university(university_id)
                .await?;
            output(&requirement, flags.format)
        }
        RequirementCommands::List => {
            let requirements = ctx.service.list_requirements().await?;
            output(&requirements, flags.format)
        }
        RequirementCommands::Check {
            university_id,
            gre,
            toefl,
            gpa,
        } => {
            let scores = merge_scores(
                ctx.config.applicant.scores(),
                ApplicantScores {
                    gre: *gre,
                    toefl: *toefl,
                    gpa: *gpa,
                },
            );
            let requirements = match university_id {
                Some(id) => vec![ctx.service.get_requirement_for_university(id).await?],
                None => ctx.service.list_requirements().await?,
            };
            let checks: Vec<_> = requirements
                .iter()
                .map(|requirement| check_requirement(requirement, &scores))
                .collect();
            output(&checks, flags.format)
        }
        RequirementCommands::Delete { university_id } => {
            ctx.service.delete_requirement(university_id).await?;
            output(
                &serde_json::json!({ "deleted": university_id }),
                flags.format,
            )
        }
    }
}

/// Flag scores override configured ones field by field.
const fn merge_scores(configured: ApplicantScores, flags: ApplicantScores) -> ApplicantScores {
    ApplicantScores {
        gre: if flags.gre.is_some() { flags.gre } else { configured.gre },
        toefl: if flags.toefl.is_some() {
            flags.toefl
        } else {
            configured.toefl
        },
        gpa: if flags.gpa.is_some() { flags.gpa } else { configured.gpa },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flag_scores_override_config() {
        let configured = ApplicantScores {
            gre: Some(315),
            toefl: Some(100),
            gpa: None,
        };
        let flags = ApplicantScores {
            gre: Some(325),
            toefl: None,
            gpa: Some(3.7),
        };
        assert_eq!(
            merge_scores(configured, flags),
            ApplicantScores {
                gre: Some(325),
                toefl: Some(100),
                gpa: Some(3.7),
            }
        );
    }
}
