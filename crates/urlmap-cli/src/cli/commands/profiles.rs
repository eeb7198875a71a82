//! `urlmap profiles` – list every loaded profile.

use urlmap_core::profile::Profiles;

pub fn run_profiles(profiles: &Profiles, default_profile: &str) {
    println!("{:<2}{:<16} {}", "", "PROFILE", "ENTRIES");
    for (name, registry) in profiles.iter() {
        let marker = if name == default_profile { "*" } else { "" };
        println!("{:<2}{:<16} {}", marker, name, registry.len());
    }
    if profiles.get(default_profile).is_err() {
        tracing::warn!("default profile {} is not defined", default_profile);
    }
}
