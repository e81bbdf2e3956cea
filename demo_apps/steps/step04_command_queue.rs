//! Step 4: submit a command buffer with debug markers and wait until the queue finishes it.
use bringup::prelude::*;

fn main() -> bringup::Result<()> {
    bringup::app::logging::init();
    App::new(Stage::CommandQueue)
        .with_settings(AppSettings::from_args()?)
        .run()
}
