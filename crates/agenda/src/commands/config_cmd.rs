//! Config subcommand handlers.

use dialoguer::{Confirm, Input};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, PROFILE_KEYS, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn save(cfg: &Config, quiet: bool) -> Result<(), CliError> {
    let path = config::save_config(cfg)?;
    if !quiet {
        eprintln!("Saved {}", path.display());
    }
    Ok(())
}

fn render_toml(cfg: &Config) -> Result<String, CliError> {
    toml::to_string_pretty(cfg).map_err(|e| CliError::Render(e.to_string()))
}

fn profile_list(cfg: &Config) -> String {
    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    names
        .into_iter()
        .map(|name| {
            let marker = if name == cfg.default_profile_name() {
                "*"
            } else {
                " "
            };
            let url = cfg.profiles[name].effective_url().unwrap_or("-");
            format!("{marker} {name}\t{url}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Init wizard ─────────────────────────────────────────────────────

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = config::load_config()?;
    eprintln!("Voice Agenda CLI configuration");
    eprintln!("   Config path: {}\n", config::config_path().display());

    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default(
            global
                .profile
                .clone()
                .unwrap_or_else(|| cfg.default_profile_name().to_owned()),
        )
        .interact_text()
        .map_err(prompt_err)?;

    let mut profile = cfg.profiles.get(&profile_name).cloned().unwrap_or_default();

    // No default URL: the backend location is always supplied by the user.
    let base_url: String = Input::new()
        .with_prompt("Backend base URL")
        .validate_with(|input: &String| -> Result<(), String> {
            Profile::default()
                .set_field("base_url", input)
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_err)?;
    profile.set_field("base_url", &base_url)?;

    let timeout: String = Input::new()
        .with_prompt("Request timeout in seconds (0 = none)")
        .default("0".into())
        .interact_text()
        .map_err(prompt_err)?;
    profile.set_field("timeout_secs", &timeout)?;

    let insecure = Confirm::new()
        .with_prompt("Accept self-signed TLS certificates?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    profile.insecure = Some(insecure);

    let refetch = Confirm::new()
        .with_prompt("Reload a tab every time it is revisited?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    profile.refetch_on_revisit = Some(refetch);

    if cfg.profiles.is_empty() {
        cfg.default_profile = Some(profile_name.clone());
    }
    cfg.profiles.insert(profile_name, profile);
    save(&cfg, global.quiet)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            output::print_output(&render_toml(&cfg)?, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            if !PROFILE_KEYS.contains(&key.as_str()) {
                return Err(CliError::Validation {
                    field: key,
                    reason: format!("expected one of: {}", PROFILE_KEYS.join(", ")),
                });
            }
            let mut cfg = config::load_config()?;
            let name = config::active_profile_name(global, &cfg);
            cfg.profiles
                .entry(name)
                .or_default()
                .set_field(&key, &value)?;
            save(&cfg, global.quiet)
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            output::print_output(&profile_list(&cfg), global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            if !cfg.profiles.contains_key(&name) {
                return Err(agenda_config::ConfigError::ProfileNotFound { profile: name }.into());
            }
            cfg.default_profile = Some(name);
            save(&cfg, global.quiet)
        }
    }
}
