//! Step 2: request an adapter and print its identity, limits and features.
use bringup::prelude::*;

fn main() -> bringup::Result<()> {
    bringup::app::logging::init();
    App::new(Stage::Adapter)
        .with_settings(AppSettings::from_args()?)
        .run()
}
