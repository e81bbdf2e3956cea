//! Step 1: create the GPU instance.
use bringup::prelude::*;

fn main() -> bringup::Result<()> {
    bringup::app::logging::init();
    App::new(Stage::Instance)
        .with_settings(AppSettings::from_args()?)
        .run()
}
