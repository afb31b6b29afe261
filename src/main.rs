//! Rabbit and Wolves GUI
//!
//! Play the wolves against the rabbit AI.

use rabbit_wolves::ui::RabbitWolvesApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 660.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Rabbit and Wolves"),
        ..Default::default()
    };

    eframe::run_native(
        "Rabbit and Wolves",
        options,
        Box::new(|cc| Ok(Box::new(RabbitWolvesApp::new(cc)))),
    )
}
