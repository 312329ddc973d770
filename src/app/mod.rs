use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use eframe::egui::{self, Context};

use crate::dataset::{Dataset, load_dataset};
use crate::taxonomy::{ColorMap, SectorTaxonomy};

mod graph;
mod highlight;
mod navigation;
mod render_utils;
mod resize;
mod scene;
mod tooltip;

use self::highlight::HighlightEngine;
use self::navigation::NavigationController;
use self::resize::ResizeCoordinator;
use self::scene::{Margins, Scene};

#[derive(Clone, Debug)]
pub struct DataPaths {
    pub nodes_edges: PathBuf,
    pub metadata: PathBuf,
}

pub struct ProductSpaceApp {
    paths: DataPaths,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Dataset, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

/// Everything the graph panel owns between frames. Each interactive piece
/// keeps its own state: the navigation controller owns the view transform, the
/// highlight engine owns the hover state.
struct ViewModel {
    dataset: Dataset,
    taxonomy: SectorTaxonomy,
    colors: ColorMap,
    margins: Margins,
    scene: Option<Scene>,
    navigation: NavigationController,
    highlight: HighlightEngine,
    resize: ResizeCoordinator,
    scene_revision: u64,
}

impl ViewModel {
    fn new(dataset: Dataset) -> Self {
        let taxonomy = SectorTaxonomy::from_metadata(&dataset.metadata);
        tracing::info!(entries = taxonomy.len(), "sector taxonomy ready");

        Self {
            dataset,
            taxonomy,
            colors: ColorMap::hs92(),
            margins: Margins::DEFAULT,
            scene: None,
            navigation: NavigationController::default(),
            highlight: HighlightEngine::default(),
            resize: ResizeCoordinator::default(),
            scene_revision: 0,
        }
    }

    fn show(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| self.draw_graph(ui));
    }
}

impl ProductSpaceApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, paths: DataPaths) -> Self {
        let state = Self::start_load(paths.clone());
        Self { paths, state }
    }

    fn spawn_load(paths: DataPaths) -> Receiver<Result<Dataset, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_dataset(&paths.nodes_edges, &paths.metadata)
                .map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(paths: DataPaths) -> AppState {
        tracing::info!(
            nodes_edges = %paths.nodes_edges.display(),
            metadata = %paths.metadata.display(),
            "loading dataset"
        );
        AppState::Loading {
            rx: Self::spawn_load(paths),
        }
    }
}

impl eframe::App for ProductSpaceApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(Ok(dataset)) => {
                        transition = Some(AppState::Ready(Box::new(ViewModel::new(dataset))));
                    }
                    Ok(Err(error)) => {
                        tracing::error!(%error, "failed to load dataset");
                        transition = Some(AppState::Error(error));
                    }
                    Err(mpsc::TryRecvError::Disconnected) => {
                        transition =
                            Some(AppState::Error("Background load worker disconnected".to_owned()));
                    }
                    Err(mpsc::TryRecvError::Empty) => {}
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading product space...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
                ctx.request_repaint();
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load the product space");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.paths.clone()));
                    }
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
