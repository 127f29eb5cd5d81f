//! Tic-tac-toe GUI
//!
//! A graphical interface for playing tic-tac-toe against the computer.

use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([600.0, 460.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
