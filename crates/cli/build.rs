use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("sitegauge")
        .version("1.0.0")
        .author("Sitegauge Contributors")
        .about("Analyze a web page and score it across four categories")
        .arg(clap::arg!(<INPUT> "URL to analyze, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("10"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--"seo-weight" <W> "Weight of the SEO category").default_value("1.0"))
        .arg(clap::arg!(--"conversion-weight" <W> "Weight of the conversion category").default_value("1.0"))
        .arg(clap::arg!(--"performance-weight" <W> "Weight of the performance category").default_value("1.0"))
        .arg(clap::arg!(--"mobile-weight" <W> "Weight of the mobile category").default_value("1.0"))
        .arg(clap::arg!(--lighthouse "Run an installed Lighthouse binary as a supplementary audit"))
        .arg(clap::arg!(--"no-info" "Hide info-level findings from text output"))
        .arg(clap::arg!(--"no-recommendations" "Hide recommendations from text output"))
        .arg(clap::arg!(-v --verbose "Enable step-by-step progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "sitegauge", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "sitegauge", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "sitegauge", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "sitegauge", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
