//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::generator::Generator;
use crate::Blog;

/// Generate the static site
pub async fn run(blog: &Blog) -> Result<()> {
    let start = Instant::now();
    tracing::info!("Rendering {} posts", blog.registry.len());

    let stats = Generator::new(blog).generate().await?;

    if stats.missing > 0 {
        tracing::warn!("{} registered posts have no content", stats.missing);
    }
    tracing::info!(
        "Generated {} posts and copied {} assets in {:.2}s",
        stats.posts,
        stats.assets,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Returns true for paths whose changes should not trigger a rebuild
fn is_ignored(path: &Path, public_dir: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path.starts_with(public_dir)
        || path_str.contains(".git")
        || path_str.contains(".DS_Store")
        || path_str.ends_with('~')
}

/// Watch for file changes and regenerate. The configuration is reloaded
/// on every change so registry edits are picked up.
pub async fn watch(blog: &Blog) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<DebounceEventResult>();

    let mut debouncer = new_debouncer(Duration::from_millis(500), move |res| {
        let _ = tx.send(res);
    })?;

    let config_path = blog.base_dir.join("_config.yml");
    for dir in [&blog.content_dir, &blog.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    while let Some(res) = rx.recv().await {
        match res {
            Ok(events) => {
                let changed: Vec<_> = events
                    .iter()
                    .filter(|e| !is_ignored(&e.path, &blog.public_dir))
                    .collect();
                if changed.is_empty() {
                    continue;
                }

                for event in &changed {
                    tracing::info!("File changed: {}", event.path.display());
                }

                let result = match Blog::new(&blog.base_dir) {
                    Ok(reloaded) => run(&reloaded).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    tracing::error!("Generation failed: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
            }
        }
    }

    Ok(())
}
