mod cli;
mod logging;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use trace_widgets::config::WidgetSettings;
use trace_widgets::host::{
    dispatch, DomEvent, Extension, Extensions, Host, HostError, HostEvent, MountPoint,
    SharedMount, Trace,
};
use trace_widgets::ui::image::UnavailableBackend;
use trace_widgets::ui::sortable::{render_preview, SortableList};

use crate::cli::{Cli, Command, PlayArgs, RenderArgs};

/// Host that prints every interaction as one JSON line on stdout.
struct StdoutHost;

impl Host for StdoutHost {
    fn interact(&self, event: HostEvent) -> Result<(), HostError> {
        let line = serde_json::to_string(&event).map_err(|err| HostError::Rejected {
            event: event.kind.clone(),
            reason: err.to_string(),
        })?;
        println!("{}", line);
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let settings = Arc::new(match &cli.config {
        Some(path) => WidgetSettings::load_from(path),
        None => WidgetSettings::load(),
    }?);
    tracing::debug!(?settings, "settings loaded");

    match cli.command {
        Command::Render(args) => render(&args, settings),
        Command::Play(args) => play(&args, settings),
    }
}

fn render(args: &RenderArgs, settings: Arc<WidgetSettings>) -> Result<()> {
    let trace = read_trace(&args.trace)?;
    let extensions = Extensions::with_defaults(settings, Arc::new(UnavailableBackend));
    let mount = MountPoint::shared();

    let teardown = extensions
        .render(&trace, &mount, Arc::new(StdoutHost))
        .ok_or_else(|| anyhow!("no widget handles trace type '{}'", trace.kind))?;
    println!("{}", mount.lock().to_html());
    teardown.run();
    Ok(())
}

fn play(args: &PlayArgs, settings: Arc<WidgetSettings>) -> Result<()> {
    let trace = read_trace(&args.trace)?;
    let script = read_script(&args.script)?;
    let mount = MountPoint::shared();
    let host: Arc<dyn Host> = Arc::new(StdoutHost);

    let sortable = SortableList::new(Arc::clone(&settings));
    if sortable.matches(&trace) {
        let mounted = sortable
            .mount(&trace, &mount, host)
            .context("trace payload cannot configure a sortable list")?;
        replay(&mount, &script);
        if args.preview {
            print!("{}", render_preview(&mounted.state(), &settings.labels, args.width));
        } else {
            println!("{}", mount.lock().to_html());
        }
        mounted.into_teardown().run();
        return Ok(());
    }

    let extensions = Extensions::with_defaults(settings, Arc::new(UnavailableBackend));
    let teardown = extensions
        .render(&trace, &mount, host)
        .ok_or_else(|| anyhow!("no widget handles trace type '{}'", trace.kind))?;
    replay(&mount, &script);
    if args.preview {
        tracing::warn!("preview is only available for sortable lists");
    }
    println!("{}", mount.lock().to_html());
    teardown.run();
    Ok(())
}

fn replay(mount: &SharedMount, script: &[DomEvent]) {
    for event in script {
        let delivered = dispatch(mount, event);
        tracing::debug!(?event, delivered, "replayed event");
    }
}

fn read_trace(path: &Path) -> Result<Trace> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read trace {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid trace JSON in {}", path.display()))
}

fn read_script(path: &Path) -> Result<Vec<DomEvent>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid event script in {}", path.display()))
}
