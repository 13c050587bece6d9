//! `admin create` and `admin update`.

use anyhow::Context;
use ronex_admin::{AdminPanel, EncodedImage};
use ronex_client::ApiClient;
use ronex_core::{Category, ProjectDraft, Status};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::{cancel_on_ctrl_c, unlocked_panel};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CreateArgs, ImageArgs, UpdateArgs};
use crate::commands::shared::ProjectDetail;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ImageInfo {
    width: u32,
    height: u32,
    jpeg_bytes: usize,
}

#[derive(Serialize)]
struct SaveResponse {
    #[serde(flatten)]
    project: ProjectDetail,
    uploaded_image: Option<ImageInfo>,
}

pub async fn create(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut panel = unlocked_panel(ctx)?;
    let cancel = cancel_on_ctrl_c();

    let form = panel.open_create()?;
    fill_draft(&mut form.draft, args);

    let image = apply_image(&mut panel, &args.image, &cancel).await?;
    let saved = panel.submit(&cancel).await.context("failed to create project")?;
    respond(&saved, image, ctx, flags)
}

pub async fn update(args: &UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut panel = unlocked_panel(ctx)?;
    let cancel = cancel_on_ctrl_c();

    panel.reload(&cancel).await.context("failed to load projects")?;
    let form = panel.open_edit(&args.id)?;
    patch_draft(&mut form.draft, args);

    let image = if args.clear_image {
        panel.clear_image()?;
        None
    } else {
        apply_image(&mut panel, &args.image, &cancel).await?
    };
    let saved = panel
        .submit(&cancel)
        .await
        .with_context(|| format!("failed to update project {}", args.id))?;
    respond(&saved, image, ctx, flags)
}

fn fill_draft(draft: &mut ProjectDraft, args: &CreateArgs) {
    draft.title.clone_from(&args.title);
    draft.title_localized.clone_from(&args.title_id);
    draft.description.clone_from(&args.description);
    draft.description_localized.clone_from(&args.description_id);
    draft.category = Category::from(args.category.as_str());
    draft.location.clone_from(&args.location);
    draft.duration.clone_from(&args.duration);
    draft.status = Status::from(args.status.as_str());
}

fn patch_draft(draft: &mut ProjectDraft, args: &UpdateArgs) {
    let text_fields = [
        (&mut draft.title, &args.title),
        (&mut draft.title_localized, &args.title_id),
        (&mut draft.description, &args.description),
        (&mut draft.description_localized, &args.description_id),
        (&mut draft.location, &args.location),
        (&mut draft.duration, &args.duration),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }
    if let Some(category) = &args.category {
        draft.category = Category::from(category.as_str());
    }
    if let Some(status) = &args.status {
        draft.status = Status::from(status.as_str());
    }
}

async fn apply_image(
    panel: &mut AdminPanel<ApiClient>,
    args: &ImageArgs,
    cancel: &CancellationToken,
) -> anyhow::Result<Option<EncodedImage>> {
    if let Some(reference) = &args.image {
        panel.set_image_reference(reference)?;
        return Ok(None);
    }
    let Some(path) = &args.image_file else {
        return Ok(None);
    };
    let encoded = panel
        .attach_image_file(path, cancel)
        .await
        .with_context(|| format!("failed to process {}", path.display()))?;
    tracing::info!(
        width = encoded.width,
        height = encoded.height,
        jpeg_bytes = encoded.jpeg_bytes,
        "image embedded"
    );
    Ok(Some(encoded))
}

fn respond(
    saved: &ronex_core::Project,
    image: Option<EncodedImage>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(
        &SaveResponse {
            project: ProjectDetail::new(saved, ctx.language),
            uploaded_image: image.map(|encoded| ImageInfo {
                width: encoded.width,
                height: encoded.height,
                jpeg_bytes: encoded.jpeg_bytes,
            }),
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use crate::cli::{Cli, Commands};
    use crate::cli::subcommands::AdminCommands;

    fn parse_update(extra: &[&str]) -> UpdateArgs {
        let mut argv = vec!["ronex", "admin", "update", "p1"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).expect("cli should parse").command {
            Commands::Admin {
                action: AdminCommands::Update(args),
            } => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut draft = ProjectDraft {
            title: "Old".into(),
            location: "Bogor".into(),
            status: Status::Planned,
            ..ProjectDraft::default()
        };
        patch_draft(
            &mut draft,
            &parse_update(&["--title", "New", "--status", "ongoing", "--category", "BUMN"]),
        );

        assert_eq!(draft.title, "New");
        assert_eq!(draft.location, "Bogor");
        assert_eq!(draft.status, Status::Ongoing);
        assert_eq!(draft.category, Category::Other("BUMN".into()));
    }
}
