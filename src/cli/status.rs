use crate::error::Result;
use crate::profile::ProfileStore;
use crate::settings::{load_settings, settings_file_exists};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);

    println!("Data dir:    {}", data_dir.display());
    println!(
        "Settings:    {}",
        if settings_file_exists() { "saved" } else { "(defaults)" }
    );
    println!(
        "Budget:      {} bytes / {} rows per import",
        settings.max_file_bytes, settings.max_rows
    );

    let store = ProfileStore::open(&data_dir);
    println!("Profiles:    {}", store.count());
    if settings.user_mobile.is_empty() {
        println!("Active user: (not set)");
    } else {
        println!("Active user: {}", settings.user_mobile);
    }
    Ok(())
}
