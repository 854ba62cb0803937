// main.rs - Lights Out board in an egui window

use clap::Parser;
use eframe::egui;
use egui::{Color32, Pos2, Rect, Vec2};
use lights_out::{Coord, Dimensions, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod ui;

use config::{AppConfig, Cli};
use error::AppError;

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::try_from(&cli)?;
    info!("Starting with {config:?}.");

    let app = LightsOut::new(config)?;
    let board = app.layout.size(config.dimensions);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board.x.max(360.0) + 40.0, board.y + 180.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lights Out",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

/// Geometry of the painted board: square cells separated by a thin gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub cell_size: f32,
    pub spacing: f32,
}

impl BoardLayout {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            spacing: (cell_size / 15.0).max(1.0),
        }
    }

    fn pitch(&self) -> f32 {
        self.cell_size + self.spacing
    }

    /// Total painted area for a board of `dims`.
    pub fn size(&self, dims: Dimensions) -> Vec2 {
        let extent = |n: usize| {
            if n == 0 { 0.0 } else { self.pitch() * n as f32 - self.spacing }
        };
        Vec2::new(extent(dims.cols), extent(dims.rows))
    }

    pub fn cell_rect(&self, origin: Pos2, coord: Coord) -> Rect {
        let x = origin.x + coord.col as f32 * self.pitch();
        let y = origin.y + coord.row as f32 * self.pitch();
        Rect::from_min_size(egui::pos2(x, y), Vec2::splat(self.cell_size))
    }

    /// Cell under `pos`, if any. Points in the gaps between cells hit nothing.
    pub fn cell_at(&self, origin: Pos2, dims: Dimensions, pos: Pos2) -> Option<Coord> {
        let axis = |offset: f32, count: usize| -> Option<usize> {
            if offset < 0.0 {
                return None;
            }
            let index = (offset / self.pitch()) as usize;
            let within = offset - index as f32 * self.pitch();
            (index < count && within <= self.cell_size).then_some(index)
        };
        let row = axis(pos.y - origin.y, dims.rows)?;
        let col = axis(pos.x - origin.x, dims.cols)?;
        Some(Coord::new(row, col))
    }
}

/// The window state: one board session plus display settings.
pub struct LightsOut {
    pub session: Session,
    pub layout: BoardLayout,
    pub lit_color: Color32,
    pub unlit_color: Color32,
}

impl LightsOut {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            session: Session::new(config.dimensions)?,
            layout: BoardLayout::new(config.cell_size),
            lit_color: Color32::from_rgb(255, 214, 10),
            unlit_color: Color32::from_rgb(40, 40, 40),
        })
    }
}
