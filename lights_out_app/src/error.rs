use lights_out::BoardError;
use quick_error::quick_error;

quick_error! {
    #[derive(Debug)]
    pub enum AppError {
        Board(err: BoardError) {
            from()
            display("{}", err)
        }
        InvalidCellSize(size: f32) {
            display("cell size must be a positive number, got {size}")
        }
        Ui(err: eframe::Error) {
            from()
            display("{}", err)
        }
    }
}
