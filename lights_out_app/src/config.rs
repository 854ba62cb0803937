use clap::Parser;
use lights_out::Dimensions;

use crate::error::AppError;

#[derive(Parser, Debug)]
#[clap(name = "lights_out", version, about = "Lights Out puzzle board")]
pub struct Cli {
    #[clap(
        long,
        default_value_t = 5,
        allow_negative_numbers = true,
        help = "Number of board rows"
    )]
    pub rows: i64,

    #[clap(
        long,
        default_value_t = 5,
        allow_negative_numbers = true,
        help = "Number of board columns"
    )]
    pub cols: i64,

    #[clap(
        long,
        default_value_t = 60.0,
        allow_negative_numbers = true,
        help = "Side of one cell on screen, in points"
    )]
    pub cell_size: f32,

    #[clap(long, short, default_value = "info", help = "Log filter, overridden by RUST_LOG")]
    pub log_level: String,
}

/// Validated settings the UI starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub dimensions: Dimensions,
    pub cell_size: f32,
}

impl TryFrom<&Cli> for AppConfig {
    type Error = AppError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let dimensions = Dimensions::from_signed(cli.rows, cli.cols)?;
        if !cli.cell_size.is_finite() || cli.cell_size <= 0.0 {
            return Err(AppError::InvalidCellSize(cli.cell_size));
        }
        Ok(Self {
            dimensions,
            cell_size: cli.cell_size,
        })
    }
}
