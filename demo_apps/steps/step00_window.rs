//! Step 0: open a window and poll its events until it is closed.
use bringup::prelude::*;

fn main() -> bringup::Result<()> {
    bringup::app::logging::init();
    App::new(Stage::Window)
        .with_settings(AppSettings::from_args()?)
        .run()
}
