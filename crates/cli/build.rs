use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("strikedown")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Strikedown Contributors")
        .about("Audit a Suwayomi library against the MangaDex takedown list")
        .arg(clap::arg!(<SUWAYOMI_URL> "Base URL of the Suwayomi server"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--concurrency <NUM> "Maximum in-flight chapter fetches").default_value("4"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--sheet_id <ID> "Takedown list sheet id"))
        .arg(clap::arg!(--sheet_gid <GID> "Takedown list sheet tab (gid)"))
        .arg(clap::arg!(-v --verbose "Enable progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "strikedown", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "strikedown", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "strikedown", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "strikedown", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
