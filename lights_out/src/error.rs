use quick_error::quick_error;

quick_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum BoardError {
        InvalidDimensions { rows: i64, cols: i64 } {
            display("invalid board dimensions: {rows}x{cols}")
        }
        OutOfRange { row: usize, col: usize, rows: usize, cols: usize } {
            display("cell ({row}, {col}) is outside the {rows}x{cols} board")
        }
        RaggedRows { row: usize, expected: usize, found: usize } {
            display("row {row} has {found} cells, expected {expected}")
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
