use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use trailforward_core::gallery::{Advance, Direction, GalleryViewer};
use trailforward_core::store::ImageStore;
use trailforward_core::ui::Document;

use super::gallery_document;
use crate::render::render_gallery;

pub async fn run<S: ImageStore>(store: S, window: usize, moves: &[Direction], interactive: bool) -> Result<()> {
    let mut session = Session::load(store, window).await;

    println!("{}", session.frame());
    for &direction in moves {
        session.press(direction);
        println!("\n{}", session.frame());
    }

    if !interactive {
        return Ok(());
    }

    println!("\n{}", "n = next, p = previous, q = quit".dimmed());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if matches!(input, "q" | "quit") {
            break;
        }
        match input.parse::<Direction>() {
            Ok(direction) => {
                if session.press(direction) == Advance::Inert {
                    println!("{}", "Gallery is empty".dimmed());
                } else {
                    println!("{}", session.frame());
                }
            }
            Err(e) => println!("{}", e.red()),
        }
    }

    Ok(())
}

struct Session<S> {
    viewer: GalleryViewer<S>,
    doc: Document,
}

impl<S: ImageStore> Session<S> {
    async fn load(store: S, window: usize) -> Self {
        let mut doc = gallery_document();
        let mut viewer = GalleryViewer::new(store, window);
        viewer.load(&mut doc).await;
        Session { viewer, doc }
    }

    /// Click the control for `direction`. Disabled controls do nothing.
    fn press(&mut self, direction: Direction) -> Advance {
        match self.doc.click(&format!("gallery-{direction}")) {
            Some(action) => self.viewer.dispatch(&mut self.doc, action).unwrap_or(Advance::Inert),
            None => Advance::Inert,
        }
    }

    fn frame(&self) -> String {
        let navigator = self.viewer.navigator();
        match navigator.active_index() {
            Some(active) => format!(
                "{}\n{}",
                format!("Image {} of {}", active + 1, navigator.len()).bold(),
                render_gallery(&self.doc)
            ),
            None => render_gallery(&self.doc),
        }
    }
}
