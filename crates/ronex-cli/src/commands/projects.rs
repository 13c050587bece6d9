use anyhow::Context;
use ronex_catalog::{CachedProjects, CatalogView, Freshness};
use ronex_client::{ProjectApi, Session};
use ronex_core::{Language, ProjectStats};
use serde::Serialize;

use crate::cli::subcommands::{ListArgs, ProjectsCommands};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{ProjectDetail, ProjectRow};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct WindowInfo {
    start: usize,
    end: usize,
}

#[derive(Serialize)]
struct ProjectListResponse {
    language: Language,
    category: String,
    freshness: Freshness,
    fetched_at: String,
    total: usize,
    matching: usize,
    window: Option<WindowInfo>,
    projects: Vec<ProjectRow>,
}

#[derive(Serialize)]
struct StatsResponse {
    #[serde(flatten)]
    stats: ProjectStats,
    freshness: Freshness,
}

/// Handle `ronex projects <subcommand>`.
pub async fn handle(
    action: &ProjectsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectsCommands::List(args) => list(args, ctx, flags).await,
        ProjectsCommands::Get { id } => get(id, ctx, flags).await,
        ProjectsCommands::Stats => stats(ctx, flags).await,
    }
}

async fn fetch(ctx: &AppContext) -> anyhow::Result<CachedProjects> {
    let cached = ctx
        .cache
        .fetch(&*ctx.api, &Session::anonymous())
        .await
        .context("failed to load projects")?;
    if cached.freshness == Freshness::Stale {
        tracing::warn!(fetched_at = %cached.fetched_at, "showing cached projects; backend unreachable");
    }
    Ok(cached)
}

async fn list(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cached = fetch(ctx).await?;
    let total = cached.projects.len();
    let mut view = CatalogView::new(
        cached.projects,
        ctx.item_estimate(),
        ctx.config.catalog.windowing_threshold,
    );
    view.set_filter(args.category.clone());

    let (shown, window) = match args.viewport() {
        Some(viewport) => {
            let range = view.set_viewport(viewport);
            let window = WindowInfo {
                start: range.start,
                end: range.end,
            };
            (view.visible(), Some(window))
        }
        None => (view.filtered(), None),
    };

    let projects = shown
        .into_iter()
        .map(|project| ProjectRow::new(project, ctx.language))
        .collect::<Vec<_>>();

    if flags.format == OutputFormat::Table {
        return output(&projects, flags.format);
    }

    output(
        &ProjectListResponse {
            language: ctx.language,
            category: args.category.to_string(),
            freshness: cached.freshness,
            fetched_at: cached.fetched_at.to_rfc3339(),
            total,
            matching: view.filtered().len(),
            window,
            projects,
        },
        flags.format,
    )
}

async fn get(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = ctx
        .api
        .get_by_id(&Session::anonymous(), id)
        .await
        .with_context(|| format!("failed to load project {id}"))?;
    output(&ProjectDetail::new(&project, ctx.language), flags.format)
}

async fn stats(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cached = fetch(ctx).await?;
    let stats = ProjectStats::from_projects(&cached.projects);
    if stats.unparsed_durations > 0 {
        tracing::warn!(
            count = stats.unparsed_durations,
            "some durations have no leading number and count as 0 months"
        );
    }
    output(
        &StatsResponse {
            stats,
            freshness: cached.freshness,
        },
        flags.format,
    )
}
