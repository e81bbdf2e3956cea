//! Step 5: configure the swap chain and clear the window every frame.
//!
//! The clear color defaults to (0.9, 0.1, 0.2, 1.0); pass a JSON settings
//! file as the first argument to change it.
use bringup::prelude::*;

fn main() -> bringup::Result<()> {
    bringup::app::logging::init();
    App::new(Stage::ClearScreen)
        .with_settings(AppSettings::from_args()?)
        .run()
}
