//! Step 3: request a device and install its error and device-lost callbacks.
use bringup::prelude::*;

fn main() -> bringup::Result<()> {
    bringup::app::logging::init();
    App::new(Stage::Device)
        .with_settings(AppSettings::from_args()?)
        .run()
}
